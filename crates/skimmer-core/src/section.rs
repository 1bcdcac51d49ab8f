//! Section detection and document organization.
//!
//! Research prose announces its structure in running text ("3. Methods",
//! "Results and discussion"). The classifier scans a fixed, ordered
//! vocabulary of known headers; the organizer walks the sentence sequence
//! and files each sentence under the most recently announced section.

use tracing::debug;

/// Section headers commonly found in research papers, in scan order.
///
/// The first substring match wins, even when a later header is also present
/// and arguably more specific. The order is part of the observable behavior.
pub static DEFAULT_SECTION_HEADERS: &[&str] = &[
    "abstract",
    "introduction",
    "background",
    "related work",
    "literature review",
    "methodology",
    "methods",
    "approach",
    "experimental setup",
    "implementation",
    "results",
    "findings",
    "analysis",
    "discussion",
    "evaluation",
    "conclusion",
    "future work",
    "limitations",
    "recommendations",
];

/// Name used for sentences that appear before any header is detected.
pub const DEFAULT_SECTION: &str = "introduction";

/// A single sentence of the document, scored and positioned.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Trimmed sentence text; never empty, never a bare numeral.
    pub text: String,
    /// Importance score, assigned once by the scorer.
    pub score: f64,
    /// Zero-based index in the segmented sequence; stable identity.
    pub position: usize,
    /// Section this sentence was filed under, set by the organizer.
    pub section: Option<String>,
}

/// A section bucket: one named slot gathering sentences in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub sentences: Vec<Sentence>,
}

/// Return the first known header contained in `sentence`, scanning
/// `headers` in order (case-insensitive substring match).
pub(crate) fn detect_section<'a>(sentence: &str, headers: &'a [String]) -> Option<&'a str> {
    let lower = sentence.to_lowercase();
    headers
        .iter()
        .find(|h| lower.contains(h.as_str()))
        .map(String::as_str)
}

/// Group scored sentences into section buckets in first-appearance order.
///
/// A header-bearing sentence switches the current section and is filed under
/// the section it announces, not the one it closes. Buckets are created
/// lazily; a header that recurs later reuses its existing bucket, so a
/// section's sentences may be non-contiguous in the original document.
pub(crate) fn organize_into_sections(
    sentences: Vec<Sentence>,
    headers: &[String],
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = DEFAULT_SECTION.to_string();

    for mut sentence in sentences {
        if let Some(detected) = detect_section(&sentence.text, headers) {
            current = detected.to_string();
        }
        sentence.section = Some(current.clone());

        // Linear scan is fine at this scale (~20 known headers).
        match sections.iter_mut().find(|s| s.name == current) {
            Some(section) => section.sentences.push(sentence),
            None => sections.push(Section {
                name: current.clone(),
                sentences: vec![sentence],
            }),
        }
    }

    debug!(
        section_count = sections.len(),
        sections = ?sections.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        "organized sentences into sections"
    );
    sections
}
