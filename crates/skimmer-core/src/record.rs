use serde::{Deserialize, Serialize};

/// Identifier recorded with every summary so stored results name the
/// algorithm that produced them.
pub const ALGORITHM_ID: &str = "skimmer/heuristic-extractive-v1";

/// A summary plus the generation parameters it was produced with, shaped for
/// persistence by an external store. Field names match the stored schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub paper_title: String,
    pub summary_text: String,
    pub chunk_length: usize,
    pub summary_min_length: usize,
    pub summary_max_length: usize,
    /// Algorithm identifier; see [`ALGORITHM_ID`].
    pub model: String,
}

impl SummaryRecord {
    pub fn new(
        paper_title: &str,
        summary_text: &str,
        chunk_length: usize,
        summary_min_length: usize,
        summary_max_length: usize,
    ) -> Self {
        Self {
            paper_title: paper_title.to_string(),
            summary_text: summary_text.to_string(),
            chunk_length,
            summary_min_length,
            summary_max_length,
            model: ALGORITHM_ID.to_string(),
        }
    }
}
