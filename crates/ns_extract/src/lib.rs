use std::time::Duration;

use chrono::{DateTime, Utc};
use ns_core::{Article, Error, Result};
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

pub mod sources;

pub use sources::{default_sources, LinkStyle, SearchSource};

pub mod prelude {
    pub use super::NewsExtractor;
    pub use ns_core::{Article, Error, Result};
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Selector ladder tried in order before falling back to every `<p>` on
/// the page.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "div.article-body",
    "div.story-body",
    "div.content",
    "div.story-content",
    "div[itemprop=\"articleBody\"]",
];

/// Fetches company news from the configured search sources and extracts
/// article text and metadata.
pub struct NewsExtractor {
    client: reqwest::Client,
    sources: Vec<SearchSource>,
}

impl NewsExtractor {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            sources: default_sources(),
        })
    }

    /// Collect candidate article URLs for a company across all sources,
    /// deduplicated in discovery order and capped to `limit`.
    pub async fn search(&self, company: &str, limit: usize) -> Result<Vec<String>> {
        let mut urls: Vec<String> = Vec::new();

        for source in &self.sources {
            let search_url = source.search_url(company);
            match self.fetch(&search_url).await {
                Ok(html) => {
                    let links = source.extract_links(&html, &search_url);
                    debug!("{}: {} candidate links", source.name, links.len());
                    for link in links {
                        if !urls.contains(&link) {
                            urls.push(link);
                        }
                    }
                }
                Err(e) => {
                    warn!("Error fetching from {}: {}", source.name, e);
                }
            }
        }

        urls.truncate(limit);
        Ok(urls)
    }

    /// Fetch and parse one article page.
    pub async fn extract_article(&self, url: &str) -> Result<Article> {
        let html = self.fetch(url).await?;
        let article = parse_article(&html, url);
        if article.content.is_empty() {
            return Err(Error::Extraction(format!("No article content at {}", url)));
        }
        Ok(article)
    }

    /// Full extraction pass for a company: search, then fetch articles
    /// until `count` succeed. Per-URL failures are logged and skipped so a
    /// bad source cannot sink the batch.
    pub async fn company_news(&self, company: &str, count: usize) -> Result<Vec<Article>> {
        // Over-fetch candidates to absorb extraction failures
        let urls = self.search(company, count + 5).await?;
        info!("Found {} candidate articles for {}", urls.len(), company);

        let mut articles = Vec::new();
        for url in urls {
            match self.extract_article(&url).await {
                Ok(article) => {
                    articles.push(article);
                    if articles.len() >= count {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Skipping {}: {}", url, e);
                }
            }
        }
        Ok(articles)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Extraction(format!(
                "Failed to fetch {}. Status code: {}",
                url,
                response.status()
            )));
        }
        Ok(response.text().await?)
    }
}

/// Parse title, body, summary and publication date out of an article page.
pub fn parse_article(html: &str, url: &str) -> Article {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| "No title found".to_string());
    let content = extract_content(&document);
    let published_at = extract_date(&document);
    let summary = extract_summary(&document, &content);

    Article {
        url: url.to_string(),
        title,
        content,
        summary,
        published_at,
        source: host_of(url),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let title = Selector::parse("title").unwrap();
    if let Some(el) = document.select(&title).next() {
        let text = el.text().collect::<String>().trim().to_string();
        if !text.is_empty() {
            return Some(text);
        }
    }
    let headings = Selector::parse("h1, h2").unwrap();
    document
        .select(&headings)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn extract_content(document: &Html) -> String {
    let paragraphs = Selector::parse("p").unwrap();

    for selector in CONTENT_SELECTORS {
        let container = Selector::parse(selector).unwrap();
        if let Some(el) = document.select(&container).next() {
            let content = el
                .select(&paragraphs)
                .map(|p| p.text().collect::<String>().trim().to_string())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if !content.is_empty() {
                return content;
            }
        }
    }

    // Fallback: every paragraph on the page
    document
        .select(&paragraphs)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_date(document: &Html) -> Option<DateTime<Utc>> {
    let meta_published = Selector::parse(
        "meta[property=\"article:published_time\"], meta[property=\"og:article:published_time\"]",
    )
    .unwrap();
    if let Some(el) = document.select(&meta_published).next() {
        if let Some(content) = el.value().attr("content") {
            if let Ok(date) = DateTime::parse_from_rfc3339(content) {
                return Some(date.with_timezone(&Utc));
            }
        }
    }

    let time = Selector::parse("time[datetime]").unwrap();
    document
        .select(&time)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .and_then(|datetime| DateTime::parse_from_rfc3339(datetime).ok())
        .map(|date| date.with_timezone(&Utc))
}

fn extract_summary(document: &Html, content: &str) -> Option<String> {
    let meta_description = Selector::parse("meta[name=\"description\"]").unwrap();
    if let Some(el) = document.select(&meta_description).next() {
        if let Some(description) = el.value().attr("content") {
            if !description.trim().is_empty() {
                return Some(description.trim().to_string());
            }
        }
    }

    if content.is_empty() {
        return None;
    }

    // Lead sentence, extended by one if too short
    let sentences: Vec<&str> = content.split(". ").collect();
    let mut summary = format!("{}.", sentences[0].trim_end_matches('.'));
    if summary.len() < 100 && sentences.len() > 1 {
        summary.push_str(&format!(" {}.", sentences[1].trim_end_matches('.')));
    }
    Some(summary)
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_default()
}

impl std::fmt::Debug for NewsExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsExtractor")
            .field("sources", &self.sources.len())
            .finish()
    }
}
