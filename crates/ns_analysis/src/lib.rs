//! Comparative analysis over per-article sentiment and topic records.
//!
//! Pure, synchronous, single-pass: callers classify articles first (see
//! `ns_nlp`), then hand the finished records to [`build_report`].

pub mod aggregate;
pub mod coverage;
pub mod report;
pub mod topics;

pub use aggregate::{aggregate_sentiment, SentimentDistribution};
pub use coverage::{generate_coverage_diffs, CoverageDiffStatement};
pub use report::{build_company_report, build_report, CompanyReport, ComparativeReport};
pub use topics::{compare_topics, TopicOverlap};

pub mod prelude {
    pub use super::{build_report, ComparativeReport};
    pub use ns_core::{ArticleRecord, Error, Result, Sentiment, SentimentLabel};
}
