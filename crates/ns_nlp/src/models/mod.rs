use std::sync::Arc;

use ns_core::{Error, Result, SentimentModel};

pub mod dummy;
pub mod lexicon;
pub mod remote;

pub use dummy::DummyModel;
pub use lexicon::LexiconModel;
pub use remote::RemoteModel;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

/// Build a model by name. "lexicon" is the self-contained default;
/// "remote" needs at least an API key in the config.
pub fn create_model(kind: &str, config: &Config) -> Result<Arc<dyn SentimentModel>> {
    match kind {
        "lexicon" => Ok(Arc::new(LexiconModel::new())),
        "remote" => Ok(Arc::new(RemoteModel::new(config.clone())?)),
        "dummy" => Ok(Arc::new(DummyModel)),
        other => Err(Error::Inference(format!("Unknown model: {}", other))),
    }
}
