use ns_core::{article_id, Article, ArticleRecord, Result, Sentiment, SentimentModel};
use tracing::warn;

pub mod models;

pub use models::{create_model, Config};

/// Topics requested per article, matching the upstream extractor default.
pub const TOPICS_PER_ARTICLE: usize = 3;

/// Run the classifier collaborator over raw articles and produce the
/// records the comparative pipeline consumes.
///
/// Per-article model failures are permissive: a failed classification
/// reads as neutral, failed topic extraction as an empty set, so partial
/// upstream trouble cannot sink the whole batch.
pub async fn classify_articles(
    model: &dyn SentimentModel,
    articles: &[Article],
) -> Result<Vec<ArticleRecord>> {
    let mut records = Vec::with_capacity(articles.len());

    for (index, article) in articles.iter().enumerate() {
        let sentiment = match model.classify(&article.content).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                warn!("Classification failed for {}: {}", article.url, e);
                Sentiment::neutral()
            }
        };
        let topics = match model.extract_topics(&article.content, TOPICS_PER_ARTICLE).await {
            Ok(topics) => topics,
            Err(e) => {
                warn!("Topic extraction failed for {}: {}", article.url, e);
                Vec::new()
            }
        };

        records.push(ArticleRecord::new(
            article_id(&article.url, index),
            article.title.clone(),
            article.content.clone(),
            Some(sentiment),
            topics,
        ));
    }

    Ok(records)
}

pub mod prelude {
    pub use super::models::create_model;
    pub use super::{classify_articles, Config};
    pub use ns_core::{Error, Result, Sentiment, SentimentLabel, SentimentModel};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LexiconModel;
    use ns_core::SentimentLabel;

    fn article(url: &str, content: &str) -> Article {
        Article {
            url: url.to_string(),
            title: "Title".to_string(),
            content: content.to_string(),
            summary: None,
            published_at: None,
            source: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn classification_produces_one_record_per_article() {
        let model = LexiconModel::new();
        let articles = vec![
            article(
                "https://example.com/a",
                "Profits surged to a record high on strong momentum this quarter overall.",
            ),
            article(
                "https://example.com/b",
                "The lawsuit and fraud probe deepened concerns over mounting losses today.",
            ),
        ];

        let records = classify_articles(&model, &articles).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sentiment.label, SentimentLabel::Positive);
        assert_eq!(records[1].sentiment.label, SentimentLabel::Negative);
        assert!(records.iter().all(|r| !r.id.is_empty()));
        assert_ne!(records[0].id, records[1].id);
    }

    #[tokio::test]
    async fn empty_content_reads_neutral_with_no_topics() {
        let model = LexiconModel::new();
        let records = classify_articles(&model, &[article("https://example.com/a", "")])
            .await
            .unwrap();
        assert_eq!(records[0].sentiment.label, SentimentLabel::Neutral);
        assert!(records[0].topics.is_empty());
    }
}
