use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use ns_core::{Result, Sentiment, SentimentLabel, SentimentModel};

/// Self-contained sentiment model: a small polarity lexicon plus
/// frequency-based topic extraction and extractive summaries. Good enough
/// to run the whole pipeline offline; swap in `RemoteModel` for anything
/// serious.
pub struct LexiconModel;

const POSITIVE: &[&str] = &[
    "gain", "gains", "growth", "profit", "profits", "surge", "surged", "record",
    "strong", "beat", "beats", "upbeat", "optimistic", "rally", "rallied", "success",
    "successful", "win", "wins", "expand", "expansion", "improve", "improved",
    "innovative", "breakthrough", "soar", "soared", "upgrade", "upgraded", "bullish",
    "outperform", "momentum", "robust", "favorable", "positive",
];

const NEGATIVE: &[&str] = &[
    "loss", "losses", "decline", "declined", "drop", "dropped", "plunge", "plunged",
    "weak", "miss", "missed", "lawsuit", "probe", "investigation", "fraud", "recall",
    "layoff", "layoffs", "cut", "cuts", "downgrade", "downgraded", "bearish", "fear",
    "fears", "risk", "risks", "warn", "warning", "scandal", "fine", "fined", "crash",
    "bankruptcy", "negative", "concern", "concerns",
];

const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "been", "but", "by", "can", "could", "did", "do", "does", "for", "from",
    "had", "has", "have", "he", "her", "his", "how", "i", "if", "in", "into", "is",
    "it", "its", "just", "more", "most", "new", "no", "not", "of", "on", "one",
    "or", "other", "our", "out", "over", "said", "says", "she", "so", "some",
    "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "to", "up", "was", "we", "were", "what", "when", "which", "who",
    "will", "with", "would", "you", "your",
];

// VADER-style squashing of the raw hit count into [-1, 1].
const NORMALIZATION_ALPHA: f32 = 15.0;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .map(|t| t.to_string())
            .collect()
    }

    fn compound_score(tokens: &[String]) -> f32 {
        let mut raw = 0.0f32;
        for token in tokens {
            if POSITIVE.contains(&token.as_str()) {
                raw += 1.0;
            } else if NEGATIVE.contains(&token.as_str()) {
                raw -= 1.0;
            }
        }
        raw / (raw * raw + NORMALIZATION_ALPHA).sqrt()
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LexiconModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconModel").finish()
    }
}

#[async_trait]
impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "Lexicon"
    }

    async fn classify(&self, text: &str) -> Result<Sentiment> {
        if text.trim().is_empty() {
            return Ok(Sentiment::neutral());
        }
        let tokens = Self::tokenize(text);
        let score = Self::compound_score(&tokens);
        Ok(Sentiment::new(SentimentLabel::from_score(score), score))
    }

    async fn extract_topics(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        if text.trim().len() < 10 {
            return Ok(Vec::new());
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for token in Self::tokenize(text) {
            if token.len() > 3 && !STOPWORDS.contains(&token.as_str()) {
                *frequencies.entry(token).or_insert(0) += 1;
            }
        }

        // Count descending, then alphabetical, so equal-frequency words
        // come out in a fixed order.
        let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(ranked.into_iter().take(limit).map(|(word, _)| word).collect())
    }

    async fn summarize(&self, text: &str, max_chars: usize) -> Result<String> {
        let text = text.trim();
        if text.len() < 50 {
            return Ok(text.to_string());
        }

        let sentences = split_sentences(text);
        if sentences.len() <= 3 {
            return Ok(text.to_string());
        }

        let summary = sentences[..3].join(" ");
        if summary.len() > max_chars {
            Ok(sentences[..2].join(" "))
        } else {
            Ok(summary)
        }
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let sentence = current.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
