pub mod error;
pub mod models;
pub mod speech;
pub mod types;

pub use error::Error;
pub use models::SentimentModel;
pub use speech::SpeechSynthesizer;
pub use types::{article_id, Article, ArticleRecord, Sentiment, SentimentLabel};

pub type Result<T> = std::result::Result<T, Error>;
