//! The summarization pipeline, owned explicitly by the caller.
//!
//! One [`Summarizer`] value holds the resolved vocabulary, keyword tables,
//! and weights. Every call allocates its own sentence and section
//! structures, so a single instance can serve concurrent callers without
//! coordination; there is no process-wide state.

use tracing::debug;

use crate::assemble::{assemble_by_section, assemble_global_fallback};
use crate::config::SummarizerConfig;
use crate::scoring::{self, KeywordCategory, ScoreWeights, DEFAULT_KEYWORD_CATEGORIES};
use crate::section::{self, Section, Sentence, DEFAULT_SECTION_HEADERS};
use crate::segment;

/// Default hard cap on summary length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 500;
/// Default soft floor on summary length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 100;
/// Default number of top sentences taken per section bucket.
pub const DEFAULT_SENTENCES_PER_SECTION: usize = 2;

/// Heuristic extractive summarizer for research-paper text.
#[derive(Debug, Clone)]
pub struct Summarizer {
    headers: Vec<String>,
    categories: Vec<KeywordCategory>,
    weights: ScoreWeights,
    sentences_per_section: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// A summarizer with the built-in vocabulary, keyword tables, and
    /// weights.
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    /// A summarizer with a custom (already validated) configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        let default_headers: Vec<String> = DEFAULT_SECTION_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect();
        Self {
            headers: config.section_vocabulary.resolve(&default_headers),
            categories: config
                .keyword_categories
                .resolve(&DEFAULT_KEYWORD_CATEGORIES),
            weights: config.weights.unwrap_or_default(),
            sentences_per_section: config
                .sentences_per_section
                .unwrap_or(DEFAULT_SENTENCES_PER_SECTION),
        }
    }

    /// Split document text into ordered sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        segment::split_sentences(text)
    }

    /// First known section header contained in `sentence`, if any.
    pub fn detect_section(&self, sentence: &str) -> Option<&str> {
        section::detect_section(sentence, &self.headers)
    }

    /// Importance score for one sentence at `position` out of `total`.
    pub fn score_sentence(&self, text: &str, position: usize, total: usize) -> f64 {
        scoring::score_sentence(text, position, total, &self.categories, &self.weights)
    }

    /// Group scored sentences into section buckets in first-appearance
    /// order.
    pub fn organize(&self, sentences: Vec<Sentence>) -> Vec<Section> {
        section::organize_into_sections(sentences, &self.headers)
    }

    /// Run segmentation, scoring, and organization on raw document text.
    pub fn organize_text(&self, text: &str) -> Vec<Section> {
        let sentences = self.split_sentences(text);
        let total = sentences.len();
        debug!(
            sentence_count = total,
            input_chars = text.chars().count(),
            "segmented document"
        );
        let scored: Vec<Sentence> = sentences
            .into_iter()
            .enumerate()
            .map(|(position, text)| {
                let score = self.score_sentence(&text, position, total);
                Sentence {
                    text,
                    score,
                    position,
                    section: None,
                }
            })
            .collect();
        self.organize(scored)
    }

    /// Summarize with the default budgets ([`DEFAULT_MAX_LENGTH`],
    /// [`DEFAULT_MIN_LENGTH`]).
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with_budget(text, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH)
    }

    /// Summarize `text` to at most `max_length` characters, aiming for at
    /// least `min_length`.
    ///
    /// Never fails: degenerate input (empty text, nothing but page numbers,
    /// a minimum that the budget cannot accommodate) degrades to a short or
    /// empty summary.
    pub fn summarize_with_budget(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> String {
        let sections = self.organize_text(text);
        if sections.is_empty() {
            return String::new();
        }

        let first_pass =
            assemble_by_section(&sections, max_length, min_length, self.sentences_per_section);
        if first_pass.reached_min {
            return first_pass.summary;
        }
        assemble_global_fallback(&sections, first_pass, max_length, min_length).summary
    }
}
