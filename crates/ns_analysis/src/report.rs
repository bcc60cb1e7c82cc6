use ns_core::{ArticleRecord, Result, SentimentLabel};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{aggregate_sentiment, SentimentDistribution};
use crate::coverage::{generate_coverage_diffs, CoverageDiffStatement};
use crate::topics::{compare_topics, TopicOverlap};

/// Final output of the comparative pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeReport {
    pub distribution: SentimentDistribution,
    pub overlap: TopicOverlap,
    pub diff_statements: Vec<CoverageDiffStatement>,
    pub final_sentiment_summary: String,
}

/// Run the whole pipeline over a set of article records.
///
/// Aggregation and topic comparison are both read-only over the records;
/// coverage statements consume both of their outputs. Fails with
/// `Error::EmptyInput` when called with no articles.
pub fn build_report(records: &[ArticleRecord]) -> Result<ComparativeReport> {
    let distribution = aggregate_sentiment(records)?;
    let overlap = compare_topics(records);
    let diff_statements = generate_coverage_diffs(records, &distribution, &overlap);
    let final_sentiment_summary = final_summary(&distribution);

    debug!(
        articles = records.len(),
        common_topics = overlap.common.len(),
        statements = diff_statements.len(),
        "built comparative report"
    );

    Ok(ComparativeReport {
        distribution,
        overlap,
        diff_statements,
        final_sentiment_summary,
    })
}

/// Report envelope handed to the API and speech layers: the comparative
/// report plus the company name and the records it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyReport {
    pub company: String,
    pub articles: Vec<ArticleRecord>,
    pub comparative: ComparativeReport,
    pub article_count: usize,
}

pub fn build_company_report(company: &str, records: Vec<ArticleRecord>) -> Result<CompanyReport> {
    let comparative = build_report(&records)?;
    Ok(CompanyReport {
        company: company.to_string(),
        article_count: records.len(),
        articles: records,
        comparative,
    })
}

/// Single-sentence leaning statement plus the outlook sentence matching
/// the dominant label.
fn final_summary(distribution: &SentimentDistribution) -> String {
    let dominant_count = distribution.count(distribution.dominant);
    let mut summary = format!(
        "News coverage leans {} ({} of {} articles).",
        distribution.dominant, dominant_count, distribution.total
    );
    summary.push(' ');
    summary.push_str(match distribution.dominant {
        SentimentLabel::Positive => "This suggests a favorable outlook.",
        SentimentLabel::Negative => "This indicates potential concerns or challenges.",
        SentimentLabel::Neutral => "The overall sentiment is balanced.",
    });
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::{Error, Sentiment};

    fn record(id: &str, label: SentimentLabel, topics: &[&str]) -> ArticleRecord {
        ArticleRecord::new(
            id,
            format!("Article {}", id.to_uppercase()),
            "content",
            Some(Sentiment::new(label, 0.0)),
            topics.to_vec(),
        )
    }

    #[test]
    fn worked_example() {
        let records = vec![
            record("a", SentimentLabel::Positive, &["earnings", "growth"]),
            record("b", SentimentLabel::Negative, &["earnings", "lawsuit"]),
        ];
        let report = build_report(&records).unwrap();

        assert_eq!(
            report.overlap.common.iter().collect::<Vec<_>>(),
            vec!["earnings"]
        );
        assert_eq!(
            report.overlap.unique["a"].iter().collect::<Vec<_>>(),
            vec!["growth"]
        );
        assert_eq!(
            report.overlap.unique["b"].iter().collect::<Vec<_>>(),
            vec!["lawsuit"]
        );
        // 1 vs 1 tie resolves to positive.
        assert_eq!(report.distribution.dominant, SentimentLabel::Positive);
        assert!(report.final_sentiment_summary.contains("positive"));
        assert!(report.final_sentiment_summary.contains("1 of 2"));
    }

    #[test]
    fn summary_outlook_tracks_dominant_label() {
        let negative = vec![
            record("a", SentimentLabel::Negative, &[]),
            record("b", SentimentLabel::Negative, &[]),
            record("c", SentimentLabel::Positive, &[]),
        ];
        let report = build_report(&negative).unwrap();
        assert!(report.final_sentiment_summary.contains("leans negative"));
        assert!(report.final_sentiment_summary.contains("concerns"));
        assert!(report.final_sentiment_summary.contains("2 of 3"));
    }

    #[test]
    fn empty_input_propagates() {
        assert!(matches!(build_report(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn report_is_idempotent() {
        let records = vec![
            record("a", SentimentLabel::Positive, &["merger", "growth"]),
            record("b", SentimentLabel::Neutral, &["merger"]),
            record("c", SentimentLabel::Negative, &["merger", "lawsuit"]),
        ];
        let first = serde_json::to_string(&build_report(&records).unwrap()).unwrap();
        let second = serde_json::to_string(&build_report(&records).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_referenced_id_exists_in_input() {
        let records = vec![
            record("a", SentimentLabel::Positive, &["growth"]),
            record("b", SentimentLabel::Negative, &["lawsuit"]),
            record("c", SentimentLabel::Neutral, &[]),
        ];
        let report = build_report(&records).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();

        for id in report.overlap.unique.keys() {
            assert!(ids.contains(&id.as_str()));
        }
        for statement in &report.diff_statements {
            assert!(ids.contains(&statement.subject_a.as_str()));
            assert!(ids.contains(&statement.subject_b.as_str()));
        }
    }
}
