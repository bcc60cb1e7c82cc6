use std::collections::BTreeMap;

use ns_core::{ArticleRecord, Error, Result, SentimentLabel};
use serde::{Deserialize, Serialize};

/// Distribution of sentiment labels across a set of articles.
///
/// `counts` always carries all three labels, including zero counts, so
/// serialized reports have a stable shape regardless of input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub counts: BTreeMap<SentimentLabel, usize>,
    pub total: usize,
    pub dominant: SentimentLabel,
}

impl SentimentDistribution {
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }
}

/// Tally sentiment labels over the article set and pick the dominant one.
///
/// Ties are broken by fixed priority: positive > neutral > negative.
pub fn aggregate_sentiment(records: &[ArticleRecord]) -> Result<SentimentDistribution> {
    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut counts: BTreeMap<SentimentLabel, usize> =
        SentimentLabel::ALL.iter().map(|&label| (label, 0)).collect();
    for record in records {
        *counts.entry(record.sentiment.label).or_insert(0) += 1;
    }

    // Walking labels in priority order with a strict comparison makes the
    // earlier label win ties.
    let mut dominant = SentimentLabel::Positive;
    let mut best = 0;
    for label in SentimentLabel::ALL {
        let count = counts[&label];
        if count > best {
            best = count;
            dominant = label;
        }
    }

    Ok(SentimentDistribution {
        counts,
        total: records.len(),
        dominant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::Sentiment;

    fn record(id: &str, label: SentimentLabel) -> ArticleRecord {
        ArticleRecord::new(
            id,
            format!("Article {}", id),
            "content",
            Some(Sentiment::new(label, 0.0)),
            Vec::<String>::new(),
        )
    }

    #[test]
    fn counts_sum_to_total() {
        let records = vec![
            record("a", SentimentLabel::Positive),
            record("b", SentimentLabel::Negative),
            record("c", SentimentLabel::Negative),
            record("d", SentimentLabel::Neutral),
        ];
        let distribution = aggregate_sentiment(&records).unwrap();
        assert_eq!(distribution.total, 4);
        assert_eq!(distribution.counts.values().sum::<usize>(), 4);
        assert_eq!(distribution.count(SentimentLabel::Negative), 2);
        assert_eq!(distribution.dominant, SentimentLabel::Negative);
    }

    #[test]
    fn all_labels_present_even_when_unused() {
        let records = vec![record("a", SentimentLabel::Positive)];
        let distribution = aggregate_sentiment(&records).unwrap();
        assert_eq!(distribution.counts.len(), 3);
        assert_eq!(distribution.count(SentimentLabel::Negative), 0);
        assert_eq!(distribution.count(SentimentLabel::Neutral), 0);
    }

    #[test]
    fn ties_resolve_positive_over_negative() {
        let records = vec![
            record("a", SentimentLabel::Positive),
            record("b", SentimentLabel::Positive),
            record("c", SentimentLabel::Negative),
            record("d", SentimentLabel::Negative),
        ];
        let distribution = aggregate_sentiment(&records).unwrap();
        assert_eq!(distribution.dominant, SentimentLabel::Positive);
    }

    #[test]
    fn ties_resolve_neutral_over_negative() {
        let records = vec![
            record("a", SentimentLabel::Neutral),
            record("b", SentimentLabel::Negative),
        ];
        let distribution = aggregate_sentiment(&records).unwrap();
        assert_eq!(distribution.dominant, SentimentLabel::Neutral);
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = aggregate_sentiment(&[]);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }
}
