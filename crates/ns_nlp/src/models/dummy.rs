use std::fmt;

use async_trait::async_trait;
use ns_core::{Result, Sentiment, SentimentModel};

/// Fixed-output model for tests and wiring checks.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

#[async_trait]
impl SentimentModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn classify(&self, _text: &str) -> Result<Sentiment> {
        Ok(Sentiment::neutral())
    }

    async fn extract_topics(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        // First few distinct longer words, in order of appearance
        let mut topics: Vec<String> = Vec::new();
        for word in text.to_lowercase().split_whitespace() {
            let word: String = word.chars().filter(|c| c.is_alphanumeric()).collect();
            if word.len() > 3 && !topics.contains(&word) {
                topics.push(word);
                if topics.len() >= limit {
                    break;
                }
            }
        }
        Ok(topics)
    }

    async fn summarize(&self, text: &str, _max_chars: usize) -> Result<String> {
        // Take first 20 words and join them
        let words: Vec<&str> = text.split_whitespace().take(20).collect();
        Ok(words.join(" "))
    }
}
