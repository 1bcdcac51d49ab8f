//! Sentence importance scoring.
//!
//! Each sentence is scored independently from four additive signals: length
//! band, position band, keyword hits, and surface features. The score is a
//! plain `f64` accumulator with no normalization; ties are resolved
//! downstream by stable sorting.

use once_cell::sync::Lazy;

/// One group of domain-signal words with a per-word weight.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordCategory {
    pub name: String,
    /// Lowercase substrings matched case-insensitively against the sentence.
    pub words: Vec<String>,
    /// Score added per matched word (each word counts at most once).
    pub weight: f64,
}

impl KeywordCategory {
    pub fn new(name: &str, words: &[&str], weight: f64) -> Self {
        Self {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            weight,
        }
    }
}

/// The seven built-in keyword categories. Methodology and results words
/// carry double weight; the rest count single.
pub static DEFAULT_KEYWORD_CATEGORIES: Lazy<Vec<KeywordCategory>> = Lazy::new(|| {
    vec![
        KeywordCategory::new(
            "methodology",
            &[
                "method",
                "approach",
                "technique",
                "procedure",
                "experiment",
                "study",
                "analysis",
                "evaluation",
            ],
            2.0,
        ),
        KeywordCategory::new(
            "results",
            &[
                "result",
                "finding",
                "outcome",
                "conclusion",
                "demonstrate",
                "show",
                "prove",
                "indicate",
                "reveal",
            ],
            2.0,
        ),
        KeywordCategory::new(
            "importance",
            &[
                "important",
                "significant",
                "crucial",
                "essential",
                "key",
                "critical",
                "vital",
                "fundamental",
            ],
            1.0,
        ),
        KeywordCategory::new(
            "novelty",
            &[
                "novel",
                "new",
                "innovative",
                "original",
                "unique",
                "unprecedented",
                "groundbreaking",
            ],
            1.0,
        ),
        KeywordCategory::new(
            "impact",
            &[
                "impact",
                "effect",
                "influence",
                "contribution",
                "implication",
                "application",
                "relevance",
            ],
            1.0,
        ),
        KeywordCategory::new(
            "limitation",
            &[
                "limitation",
                "constraint",
                "challenge",
                "drawback",
                "weakness",
                "restriction",
            ],
            1.0,
        ),
        KeywordCategory::new(
            "future",
            &[
                "future",
                "further",
                "next",
                "prospect",
                "potential",
                "recommendation",
                "suggestion",
            ],
            1.0,
        ),
    ]
});

/// Sentences shorter than this carry too little content to score.
pub const MEDIUM_MIN_CHARS: usize = 30;
/// Upper bound (exclusive) of the preferred medium length band.
pub const MEDIUM_MAX_CHARS: usize = 150;
/// Upper bound (exclusive) of the tolerated long length band.
pub const LONG_MAX_CHARS: usize = 250;
/// Index fraction considered the head of the document.
pub const LEAD_FRACTION: f64 = 0.2;
/// Index fraction past which a sentence counts as the tail.
pub const TAIL_FRACTION: f64 = 0.8;

/// Weights for the non-keyword scoring signals.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Length in (30, 150): crisp, content-bearing sentences.
    pub medium_sentence: f64,
    /// Length in [150, 250): tolerated run-ons.
    pub long_sentence: f64,
    /// Position in the first 20% of the document.
    pub lead_position: f64,
    /// Position in the last 20% of the document.
    pub tail_position: f64,
    /// Sentence starts with an ASCII uppercase letter.
    pub leading_uppercase: f64,
    /// Sentence contains at least one ASCII digit.
    pub contains_digit: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            medium_sentence: 2.0,
            long_sentence: 1.0,
            lead_position: 3.0,
            tail_position: 2.0,
            leading_uppercase: 0.5,
            contains_digit: 0.5,
        }
    }
}

/// Score one sentence. Pure function of `(text, position, total)` plus the
/// configured categories and weights; independent of every other sentence.
pub(crate) fn score_sentence(
    text: &str,
    position: usize,
    total: usize,
    categories: &[KeywordCategory],
    weights: &ScoreWeights,
) -> f64 {
    let mut score = 0.0;

    let length = text.chars().count();
    if length > MEDIUM_MIN_CHARS && length < MEDIUM_MAX_CHARS {
        score += weights.medium_sentence;
    } else if (MEDIUM_MAX_CHARS..LONG_MAX_CHARS).contains(&length) {
        score += weights.long_sentence;
    }

    if total > 0 {
        let relative = position as f64 / total as f64;
        if relative < LEAD_FRACTION {
            score += weights.lead_position;
        } else if relative > TAIL_FRACTION {
            score += weights.tail_position;
        }
    }

    score += keyword_score(text, categories);

    if text.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        score += weights.leading_uppercase;
    }
    if text.chars().any(|c| c.is_ascii_digit()) {
        score += weights.contains_digit;
    }

    score
}

/// Sum of category weights over matched words. Each word contributes at most
/// once no matter how often it repeats within the sentence; distinct words
/// all contribute, with no cap.
fn keyword_score(text: &str, categories: &[KeywordCategory]) -> f64 {
    let lower = text.to_lowercase();
    categories
        .iter()
        .map(|category| {
            let hits = category
                .words
                .iter()
                .filter(|word| lower.contains(word.as_str()))
                .count();
            hits as f64 * category.weight
        })
        .sum()
}
