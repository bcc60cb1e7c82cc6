use std::collections::BTreeSet;

use ns_core::ArticleRecord;
use serde::{Deserialize, Serialize};

use crate::aggregate::SentimentDistribution;
use crate::topics::TopicOverlap;

/// One generated comparison between two articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageDiffStatement {
    pub subject_a: String,
    pub subject_b: String,
    pub text: String,
}

/// Generate one comparison statement per adjacent pair of articles, in
/// input order. Phrasing is fixed for a given input so reports are
/// reproducible.
pub fn generate_coverage_diffs(
    records: &[ArticleRecord],
    distribution: &SentimentDistribution,
    overlap: &TopicOverlap,
) -> Vec<CoverageDiffStatement> {
    records
        .windows(2)
        .map(|pair| statement_for(&pair[0], &pair[1], distribution, overlap))
        .collect()
}

fn statement_for(
    a: &ArticleRecord,
    b: &ArticleRecord,
    distribution: &SentimentDistribution,
    overlap: &TopicOverlap,
) -> CoverageDiffStatement {
    let empty = BTreeSet::new();
    let unique_a = overlap.unique_for(&a.id).unwrap_or(&empty);
    let unique_b = overlap.unique_for(&b.id).unwrap_or(&empty);

    let mut text = if unique_a.is_empty() && unique_b.is_empty() {
        format!(
            "\"{}\" and \"{}\" cover the same topics with nothing unique to either; the first reads {}, the second {}.",
            a.title, b.title, a.sentiment.label, b.sentiment.label
        )
    } else {
        format!(
            "{}, while {}.",
            clause(a, unique_a, "focuses on"),
            clause(b, unique_b, "emphasizes")
        )
    };

    if a.sentiment.label == b.sentiment.label {
        if a.sentiment.label == distribution.dominant {
            text.push_str(&format!(
                " Both follow the dominant {} tone of the coverage.",
                distribution.dominant
            ));
        }
    } else {
        text.push_str(&format!(
            " Tone splits between {} and {}.",
            a.sentiment.label, b.sentiment.label
        ));
    }

    CoverageDiffStatement {
        subject_a: a.id.clone(),
        subject_b: b.id.clone(),
        text,
    }
}

fn clause(record: &ArticleRecord, unique: &BTreeSet<String>, verb: &str) -> String {
    if unique.is_empty() {
        format!(
            "\"{}\" ({}) stays on shared themes",
            record.title, record.sentiment.label
        )
    } else {
        let topics: Vec<&str> = unique.iter().map(|t| t.as_str()).collect();
        format!(
            "\"{}\" ({}) {} {}",
            record.title,
            record.sentiment.label,
            verb,
            topics.join(", ")
        )
    }
}
