use async_trait::async_trait;

use crate::types::Sentiment;
use crate::Result;

/// Black-box classifier collaborator. The comparative pipeline never calls
/// this directly; callers run it over raw articles first and hand the
/// pipeline finished records.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Returns the name of the model
    fn name(&self) -> &str;

    /// Classify the tone of a piece of text
    async fn classify(&self, text: &str) -> Result<Sentiment>;

    /// Extract up to `limit` key topics from a piece of text
    async fn extract_topics(&self, text: &str, limit: usize) -> Result<Vec<String>>;

    /// Produce a short summary bounded by `max_chars`
    async fn summarize(&self, text: &str, max_chars: usize) -> Result<String>;
}
