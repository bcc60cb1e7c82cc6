use async_trait::async_trait;

use crate::Result;

/// Speech-synthesis collaborator. Takes plain text, returns encoded audio
/// bytes (MP3 for the stock implementation).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// BCP-47 tag of the language the audio is spoken in
    fn language(&self) -> &str;

    /// Synthesize speech for the given text
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;
}
