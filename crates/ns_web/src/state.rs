use std::sync::Arc;

use ns_core::{SentimentModel, SpeechSynthesizer};
use ns_extract::NewsExtractor;

pub struct AppState {
    pub extractor: NewsExtractor,
    pub model: Arc<dyn SentimentModel>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}
