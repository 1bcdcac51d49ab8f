//! Heuristic extractive summarization for research-paper text.
//!
//! Given the raw text extracted from a paper, the pipeline segments it into
//! sentences, scores each sentence from four additive signals (length band,
//! position band, keyword hits, surface features), groups sentences into
//! section buckets, and greedily assembles a summary under a character
//! budget with a global fallback pass. No machine learning is involved; the
//! whole pipeline is synchronous and pure.
//!
//! ```
//! use skimmer_core::Summarizer;
//!
//! let text = "Methods: We used a novel approach. \
//!             Results: The outcome was significant. \
//!             Conclusion: This matters.";
//! let summary = Summarizer::new().summarize_with_budget(text, 500, 100);
//! assert!(!summary.is_empty());
//! assert!(summary.chars().count() <= 500);
//! ```

pub mod assemble;
pub mod chunk;
pub mod config;
pub mod config_file;
pub mod record;
pub mod scoring;
pub mod section;
pub mod segment;
pub mod summarizer;

pub use chunk::{chunk_text, DEFAULT_CHUNK_LENGTH};
pub use config::{ConfigError, ListOverride, SummarizerConfig, SummarizerConfigBuilder};
pub use record::{SummaryRecord, ALGORITHM_ID};
pub use scoring::{KeywordCategory, ScoreWeights, DEFAULT_KEYWORD_CATEGORIES};
pub use section::{Section, Sentence, DEFAULT_SECTION, DEFAULT_SECTION_HEADERS};
pub use segment::split_sentences;
pub use summarizer::{
    Summarizer, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SENTENCES_PER_SECTION,
};

/// Summarize `text` with a one-off default-configured [`Summarizer`].
///
/// Convenience wrapper for callers that don't hold a pipeline instance;
/// equivalent to `Summarizer::new().summarize_with_budget(text, max_length,
/// min_length)`.
pub fn summarize(text: &str, max_length: usize, min_length: usize) -> String {
    Summarizer::new().summarize_with_budget(text, max_length, min_length)
}
