use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ns_core::{Error, Result, Sentiment, SentimentLabel, SentimentModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Config;

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const DEFAULT_MODEL: &str = "deepseek-chat";

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat-completions backed model. The endpoint is asked for a bare label
/// or a comma-separated keyword list; anything it answers that does not
/// parse falls back to neutral rather than failing the batch.
pub struct RemoteModel {
    client: Arc<Client>,
    api_key: String,
    model: String,
    base_url: String,
}

impl RemoteModel {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key: config.api_key.unwrap_or_default(),
            model: config.model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: config.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    async fn complete(&self, prompt: String) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Inference("Empty completion response".to_string()))
    }
}

impl fmt::Debug for RemoteModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SentimentModel for RemoteModel {
    fn name(&self) -> &str {
        "Remote"
    }

    async fn classify(&self, text: &str) -> Result<Sentiment> {
        let prompt = format!(
            "Classify the sentiment of the following news text. \
             Answer with exactly one word: positive, negative or neutral.\n\n{}",
            text
        );
        let answer = self.complete(prompt).await?;
        let label = SentimentLabel::parse_lenient(&answer);
        let score = match label {
            SentimentLabel::Positive => 0.5,
            SentimentLabel::Neutral => 0.0,
            SentimentLabel::Negative => -0.5,
        };
        Ok(Sentiment::new(label, score))
    }

    async fn extract_topics(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        let prompt = format!(
            "List at most {} key topics of the following news text as a \
             comma-separated list of single lowercase keywords, nothing else.\n\n{}",
            limit, text
        );
        let answer = self.complete(prompt).await?;
        Ok(answer
            .split(',')
            .map(|topic| topic.trim().to_lowercase())
            .filter(|topic| !topic.is_empty())
            .take(limit)
            .collect())
    }

    async fn summarize(&self, text: &str, max_chars: usize) -> Result<String> {
        let prompt = format!(
            "Summarize the following news text in at most {} characters:\n\n{}",
            max_chars, text
        );
        self.complete(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_the_key() {
        let model = RemoteModel::new(Config {
            api_key: Some("secret-key".to_string()),
            ..Config::default()
        })
        .unwrap();
        let debug = format!("{:?}", model);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn config_defaults_apply() {
        let model = RemoteModel::new(Config::default()).unwrap();
        assert_eq!(model.model, DEFAULT_MODEL);
        assert_eq!(model.base_url, DEFAULT_BASE_URL);
    }
}
