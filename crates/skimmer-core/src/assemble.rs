//! Two-phase summary assembly.
//!
//! Phase one walks section buckets in first-appearance order and takes the
//! top-scored sentences from each under the character budget. Phase two runs
//! only when phase one falls short of the minimum length: it re-ranks every
//! sentence globally and keeps appending until the budget or the floor is
//! hit. Both phases stop a pass immediately on the first candidate that
//! would overflow `max_length` rather than trying smaller sentences; which
//! content survives truncation therefore depends jointly on section order
//! and score order, and changing that would change observable output.

use std::cmp::Ordering;

use tracing::debug;

use crate::section::{Section, Sentence};

/// Running state of one assembly pass.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub summary: String,
    /// Character length of `summary`, counted in Unicode scalar values and
    /// including the joining spaces.
    pub chars: usize,
    pub reached_min: bool,
}

impl Assembly {
    fn empty() -> Self {
        Self {
            summary: String::new(),
            chars: 0,
            reached_min: false,
        }
    }
}

/// Append `text` (plus a joining space when the summary is non-empty) if it
/// fits within `max_length`. Returns false without modifying anything when
/// it would overflow.
fn append_within_budget(assembly: &mut Assembly, text: &str, max_length: usize) -> bool {
    let separator = if assembly.summary.is_empty() { 0 } else { 1 };
    let added = text.chars().count() + separator;
    if assembly.chars + added > max_length {
        return false;
    }
    if separator == 1 {
        assembly.summary.push(' ');
    }
    assembly.summary.push_str(text);
    assembly.chars += added;
    true
}

/// Sentences sorted by score descending. `sort_by` is stable, so equal
/// scores keep their incoming relative order.
fn rank_by_score<'a>(sentences: impl Iterator<Item = &'a Sentence>) -> Vec<&'a Sentence> {
    let mut ranked: Vec<&Sentence> = sentences.collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// Phase one: per-section greedy selection.
///
/// Sections are visited in first-appearance order; within each, up to
/// `per_section` top-scored sentences are taken. The first candidate that
/// would overflow `max_length` ends the current section's take; reaching
/// `min_length` ends the whole pass.
pub fn assemble_by_section(
    sections: &[Section],
    max_length: usize,
    min_length: usize,
    per_section: usize,
) -> Assembly {
    let mut assembly = Assembly::empty();

    for section in sections {
        let ranked = rank_by_score(section.sentences.iter());
        for sentence in ranked.into_iter().take(per_section) {
            if !append_within_budget(&mut assembly, &sentence.text, max_length) {
                break;
            }
            if assembly.chars >= min_length {
                assembly.reached_min = true;
                debug!(
                    chars = assembly.chars,
                    section = section.name.as_str(),
                    "per-section pass reached minimum length"
                );
                return assembly;
            }
        }
    }

    assembly.reached_min = assembly.chars >= min_length;
    debug!(
        chars = assembly.chars,
        reached_min = assembly.reached_min,
        "per-section pass exhausted all sections"
    );
    assembly
}

/// Phase two: global fallback, run when phase one under-fills the summary.
///
/// All sentences are ranked globally by score, with ties broken by original
/// document position (bucket order would differ once a header recurs); any
/// sentence whose exact text already occurs in the phase-one summary is
/// skipped. The same overflow-stops-immediately and minimum-length
/// early-exit rules apply.
pub fn assemble_global_fallback(
    sections: &[Section],
    seed: Assembly,
    max_length: usize,
    min_length: usize,
) -> Assembly {
    let mut assembly = seed;
    let already = assembly.summary.clone();

    // Restore document order before the stable score sort: bucket order
    // interleaves positions when a section is non-contiguous.
    let mut ordered: Vec<&Sentence> =
        sections.iter().flat_map(|s| s.sentences.iter()).collect();
    ordered.sort_by_key(|s| s.position);
    let ranked = rank_by_score(ordered.into_iter());
    for sentence in ranked {
        if already.contains(&sentence.text) {
            continue;
        }
        if !append_within_budget(&mut assembly, &sentence.text, max_length) {
            break;
        }
        if assembly.chars >= min_length {
            assembly.reached_min = true;
            break;
        }
    }

    assembly.reached_min = assembly.chars >= min_length;
    debug!(
        chars = assembly.chars,
        reached_min = assembly.reached_min,
        "global fallback pass finished"
    );
    assembly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, score: f64, position: usize) -> Sentence {
        Sentence {
            text: text.to_string(),
            score,
            position,
            section: None,
        }
    }

    fn section(name: &str, sentences: Vec<Sentence>) -> Section {
        Section {
            name: name.to_string(),
            sentences,
        }
    }

    #[test]
    fn test_takes_top_two_per_section() {
        let sections = vec![section(
            "introduction",
            vec![
                sentence("low scorer", 1.0, 0),
                sentence("top scorer", 5.0, 1),
                sentence("mid scorer", 3.0, 2),
            ],
        )];
        let result = assemble_by_section(&sections, 500, 400, 2);
        assert_eq!(result.summary, "top scorer mid scorer");
        assert!(!result.reached_min);
    }

    #[test]
    fn test_overflow_stops_section_immediately() {
        // The big sentence overflows; the small one after it in score order
        // is NOT tried (stop, don't skip-and-continue).
        let sections = vec![section(
            "introduction",
            vec![
                sentence(&"a".repeat(40), 5.0, 0),
                sentence("tiny", 1.0, 1),
            ],
        )];
        let result = assemble_by_section(&sections, 30, 100, 2);
        assert_eq!(result.summary, "");
        assert_eq!(result.chars, 0);
    }

    #[test]
    fn test_overflow_in_one_section_continues_with_next() {
        let sections = vec![
            section("introduction", vec![sentence(&"a".repeat(40), 5.0, 0)]),
            section("methods", vec![sentence("short follow-up", 1.0, 1)]),
        ];
        let result = assemble_by_section(&sections, 30, 100, 2);
        assert_eq!(result.summary, "short follow-up");
    }

    #[test]
    fn test_min_length_exits_whole_pass() {
        let sections = vec![
            section("introduction", vec![sentence("first sentence here", 5.0, 0)]),
            section("methods", vec![sentence("never reached", 5.0, 1)]),
        ];
        let result = assemble_by_section(&sections, 500, 10, 2);
        assert_eq!(result.summary, "first sentence here");
        assert!(result.reached_min);
    }

    #[test]
    fn test_budget_includes_joining_space() {
        // "abcde" (5) + space + "fghij" (5) = 11 chars.
        let sections = vec![section(
            "introduction",
            vec![sentence("abcde", 2.0, 0), sentence("fghij", 1.0, 1)],
        )];
        let fits = assemble_by_section(&sections, 11, 100, 2);
        assert_eq!(fits.summary, "abcde fghij");
        assert_eq!(fits.chars, 11);

        let tight = assemble_by_section(&sections, 10, 100, 2);
        assert_eq!(tight.summary, "abcde");
        assert_eq!(tight.chars, 5);
    }

    #[test]
    fn test_stable_order_for_equal_scores() {
        let sections = vec![section(
            "introduction",
            vec![
                sentence("appeared first", 2.0, 0),
                sentence("appeared second", 2.0, 1),
            ],
        )];
        let result = assemble_by_section(&sections, 500, 400, 2);
        assert_eq!(result.summary, "appeared first appeared second");
    }

    #[test]
    fn test_fallback_skips_already_included_text() {
        let sections = vec![section(
            "introduction",
            vec![
                sentence("already in summary", 5.0, 0),
                sentence("fresh content", 1.0, 1),
            ],
        )];
        let seed = Assembly {
            summary: "already in summary".to_string(),
            chars: 18,
            reached_min: false,
        };
        let result = assemble_global_fallback(&sections, seed, 500, 400);
        assert_eq!(result.summary, "already in summary fresh content");
    }

    #[test]
    fn test_fallback_global_score_order_across_sections() {
        let sections = vec![
            section("introduction", vec![sentence("weak intro", 1.0, 0)]),
            section("results", vec![sentence("strong result", 9.0, 1)]),
        ];
        let result = assemble_global_fallback(&sections, Assembly::empty(), 500, 400);
        assert_eq!(result.summary, "strong result weak intro");
    }

    #[test]
    fn test_fallback_ties_follow_document_order_not_bucket_order() {
        // Recurring header: the first bucket holds positions 0 and 3, the
        // second positions 1 and 2. The tied sentences at positions 2 and 3
        // must append in document order even though bucket order would put
        // position 3 first.
        let sections = vec![
            section(
                "methods",
                vec![
                    sentence("m early", 9.0, 0),
                    sentence("m late tie", 2.0, 3),
                ],
            ),
            section(
                "results",
                vec![
                    sentence("r early", 8.0, 1),
                    sentence("r mid tie", 2.0, 2),
                ],
            ),
        ];
        let result = assemble_global_fallback(&sections, Assembly::empty(), 500, 400);
        assert_eq!(result.summary, "m early r early r mid tie m late tie");
    }

    #[test]
    fn test_fallback_overflow_stops_entirely() {
        let sections = vec![section(
            "introduction",
            vec![
                sentence(&"b".repeat(60), 9.0, 0),
                sentence("small", 1.0, 1),
            ],
        )];
        let result = assemble_global_fallback(&sections, Assembly::empty(), 50, 100);
        assert_eq!(result.summary, "");
        assert!(!result.reached_min);
    }

    #[test]
    fn test_empty_sections_yield_empty_assembly() {
        let result = assemble_by_section(&[], 500, 100, 2);
        assert_eq!(result.summary, "");
        assert!(!result.reached_min);
    }
}
