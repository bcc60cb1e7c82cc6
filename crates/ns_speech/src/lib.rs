use ns_analysis::CompanyReport;
use ns_core::SentimentLabel;

pub mod google;

pub use google::GoogleSpeech;

pub mod prelude {
    pub use super::{clean_text, summary_text, GoogleSpeech};
    pub use ns_core::{Result, SpeechSynthesizer};
}

/// Strip URLs and characters that trip up TTS endpoints, and collapse
/// whitespace.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| !word.starts_with("http"))
        .map(|word| {
            word.chars()
                .filter(|c| {
                    c.is_alphanumeric()
                        || c.is_whitespace()
                        || matches!(c, '.' | ',' | '?' | '!' | ';' | ':' | '-' | '\'' | '"' | '(' | ')')
                })
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spoken-summary text for a finished report: company, leaning sentence,
/// per-label counts.
pub fn summary_text(report: &CompanyReport) -> String {
    let distribution = &report.comparative.distribution;
    format!(
        "News report for {}. {} Found {} positive, {} negative, and {} neutral articles.",
        report.company,
        report.comparative.final_sentiment_summary,
        distribution.count(SentimentLabel::Positive),
        distribution.count(SentimentLabel::Negative),
        distribution.count(SentimentLabel::Neutral),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_analysis::build_company_report;
    use ns_core::{ArticleRecord, Sentiment, SentimentLabel};

    #[test]
    fn clean_text_strips_urls_and_symbols() {
        let cleaned = clean_text("Read more at https://example.com — shares up 5%!");
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains('%'));
        assert!(!cleaned.contains('—'));
        assert!(cleaned.contains("shares up 5!"));
    }

    #[test]
    fn clean_text_collapses_whitespace() {
        assert_eq!(clean_text("a   b\n\tc"), "a b c");
    }

    #[test]
    fn summary_text_names_company_and_counts() {
        let records = vec![
            ArticleRecord::new(
                "a",
                "A",
                "content",
                Some(Sentiment::new(SentimentLabel::Positive, 0.4)),
                vec!["growth"],
            ),
            ArticleRecord::new(
                "b",
                "B",
                "content",
                Some(Sentiment::new(SentimentLabel::Negative, -0.4)),
                vec!["lawsuit"],
            ),
        ];
        let report = build_company_report("Acme", records).unwrap();
        let text = summary_text(&report);

        assert!(text.starts_with("News report for Acme."));
        assert!(text.contains("Found 1 positive, 1 negative, and 0 neutral articles."));
        assert!(text.contains("leans positive"));
    }
}
