use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Raw article as it comes out of the extraction stage, before any
/// classification has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
}

/// Categorical tone of an article. Declaration order is the fixed
/// tie-break priority used when picking a dominant label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels, in tie-break priority order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Map a compound score in [-1, 1] onto a label using the same
    /// thresholds as the upstream classifier.
    pub fn from_score(score: f32) -> Self {
        if score >= 0.05 {
            SentimentLabel::Positive
        } else if score <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Permissive parse: anything unrecognized counts as neutral so a
    /// partially failed classifier upstream cannot sink the whole report.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Compound score in [-1, 1].
    pub score: f32,
}

impl Sentiment {
    pub fn new(label: SentimentLabel, score: f32) -> Self {
        Self { label, score }
    }

    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            score: 0.0,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Normalized per-article input to the comparative pipeline. Immutable
/// once constructed; topics are lowercased and deduplicated here so the
/// pipeline can compare sets without caring about upstream casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub sentiment: Sentiment,
    pub topics: BTreeSet<String>,
}

impl ArticleRecord {
    pub fn new<I, S>(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        sentiment: Option<Sentiment>,
        topics: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let topics = topics
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            sentiment: sentiment.unwrap_or_default(),
            topics,
        }
    }
}

/// Stable article identifier: sha2 digest of the URL, truncated to 16 hex
/// chars. Articles without a URL fall back to their ordinal index so every
/// record still gets a unique id within a run.
pub fn article_id(url: &str, index: usize) -> String {
    if url.is_empty() {
        return index.to_string();
    }
    let digest = Sha256::digest(url.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_parse_is_lenient() {
        assert_eq!(SentimentLabel::parse_lenient("Positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::parse_lenient(" negative "), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::parse_lenient("confused"), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::parse_lenient(""), SentimentLabel::Neutral);
    }

    #[test]
    fn label_from_score_thresholds() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.049), SentimentLabel::Neutral);
    }

    #[test]
    fn record_normalizes_topics() {
        let record = ArticleRecord::new(
            "a1",
            "Title",
            "Content",
            None,
            vec!["Earnings", " GROWTH ", "earnings", ""],
        );
        let topics: Vec<&str> = record.topics.iter().map(|t| t.as_str()).collect();
        assert_eq!(topics, vec!["earnings", "growth"]);
        assert_eq!(record.sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn article_ids_are_stable() {
        let a = article_id("https://example.com/story", 0);
        let b = article_id("https://example.com/story", 3);
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert_eq!(article_id("", 7), "7");
    }
}
