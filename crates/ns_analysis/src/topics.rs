use std::collections::{BTreeMap, BTreeSet, HashMap};

use ns_core::ArticleRecord;
use serde::{Deserialize, Serialize};

/// Cross-article topic structure: topics shared by at least two articles,
/// and per-article topics no other article mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicOverlap {
    pub common: BTreeSet<String>,
    pub unique: BTreeMap<String, BTreeSet<String>>,
}

impl TopicOverlap {
    /// Unique topics for one article; absent ids read as empty.
    pub fn unique_for(&self, id: &str) -> Option<&BTreeSet<String>> {
        self.unique.get(id)
    }
}

/// Compute topic overlap across the article set.
///
/// Topic sets are already lowercase-normalized by `ArticleRecord`, so one
/// membership count per distinct topic is enough. Every article gets a
/// `unique` entry, even when its topic set is empty.
pub fn compare_topics(records: &[ArticleRecord]) -> TopicOverlap {
    let mut membership: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for topic in &record.topics {
            *membership.entry(topic.as_str()).or_insert(0) += 1;
        }
    }

    let common: BTreeSet<String> = membership
        .iter()
        .filter(|(_, &count)| count >= 2)
        .map(|(topic, _)| (*topic).to_string())
        .collect();

    let mut unique = BTreeMap::new();
    for record in records {
        let own: BTreeSet<String> = record
            .topics
            .iter()
            .filter(|topic| !common.contains(*topic))
            .cloned()
            .collect();
        unique.insert(record.id.clone(), own);
    }

    TopicOverlap { common, unique }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, topics: &[&str]) -> ArticleRecord {
        ArticleRecord::new(id, format!("Article {}", id), "content", None, topics.to_vec())
    }

    #[test]
    fn common_requires_two_articles() {
        let records = vec![
            record("a", &["earnings", "growth"]),
            record("b", &["earnings", "lawsuit"]),
        ];
        let overlap = compare_topics(&records);

        assert_eq!(
            overlap.common.iter().collect::<Vec<_>>(),
            vec!["earnings"]
        );
        assert_eq!(
            overlap.unique["a"].iter().collect::<Vec<_>>(),
            vec!["growth"]
        );
        assert_eq!(
            overlap.unique["b"].iter().collect::<Vec<_>>(),
            vec!["lawsuit"]
        );
    }

    #[test]
    fn unique_never_intersects_common() {
        let records = vec![
            record("a", &["merger", "earnings", "layoffs"]),
            record("b", &["merger", "earnings"]),
            record("c", &["merger", "expansion"]),
        ];
        let overlap = compare_topics(&records);

        for unique in overlap.unique.values() {
            assert!(unique.is_disjoint(&overlap.common));
        }
        assert!(overlap.common.contains("merger"));
        assert!(overlap.common.contains("earnings"));
        assert!(!overlap.common.contains("layoffs"));
    }

    #[test]
    fn topicless_article_keeps_an_empty_entry() {
        let records = vec![record("a", &["merger"]), record("b", &[])];
        let overlap = compare_topics(&records);

        assert!(overlap.common.is_empty());
        assert!(overlap.unique["b"].is_empty());
        assert_eq!(overlap.unique.len(), 2);
    }

    #[test]
    fn casing_was_normalized_upstream() {
        // ArticleRecord lowercases at construction, so "Merger" and
        // "merger" land in the same membership bucket.
        let records = vec![record("a", &["Merger"]), record("b", &["merger"])];
        let overlap = compare_topics(&records);
        assert!(overlap.common.contains("merger"));
    }
}
