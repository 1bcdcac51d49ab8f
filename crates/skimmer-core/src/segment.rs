use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence terminator (`.`, `!`, `?`) followed by whitespace of any kind.
static TERMINATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])\s+").unwrap());

/// Fragments that are nothing but digits (stray page numbers, figure indices).
static NUMERIC_ONLY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Marker inserted after each sentence terminator before splitting.
/// U+001F (unit separator) does not occur in extracted document text.
const SENTENCE_MARK: char = '\u{1F}';

/// Split extracted document text into an ordered list of sentences.
///
/// A sentence boundary is a `.`, `!`, or `?` followed by whitespace (spaces,
/// tabs, or newlines). Pieces are trimmed; empty pieces and purely numeric
/// pieces are dropped. Text with no terminal punctuation at all comes back
/// as a single sentence equal to the trimmed input.
pub fn split_sentences(text: &str) -> Vec<String> {
    let marked = TERMINATOR_RE.replace_all(text, format!("${{1}}{}", SENTENCE_MARK).as_str());
    marked
        .split(SENTENCE_MARK)
        .map(str::trim)
        .filter(|s| !s.is_empty() && !NUMERIC_ONLY_RE.is_match(s))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let sentences = split_sentences("First sentence. Second sentence! Third sentence?");
        assert_eq!(
            sentences,
            vec!["First sentence.", "Second sentence!", "Third sentence?"]
        );
    }

    #[test]
    fn test_split_newlines_and_tabs() {
        let sentences = split_sentences("One ends here.\nTwo ends here.\tThree ends here.");
        assert_eq!(
            sentences,
            vec!["One ends here.", "Two ends here.", "Three ends here."]
        );
    }

    #[test]
    fn test_no_terminal_punctuation_single_sentence() {
        let sentences = split_sentences("  a block of text with no terminators at all  ");
        assert_eq!(
            sentences,
            vec!["a block of text with no terminators at all"]
        );
    }

    #[test]
    fn test_drops_trailing_page_number() {
        // A bare trailing numeral (page number after the last sentence) is
        // dropped; "42." with its period would not be purely numeric.
        let sentences = split_sentences("Real content here. 42");
        assert_eq!(sentences, vec!["Real content here."]);
    }

    #[test]
    fn test_all_numeric_document() {
        assert!(split_sentences("12").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn test_terminator_without_trailing_whitespace_does_not_split() {
        // "e.g" style internal periods followed by a letter stay intact.
        let sentences = split_sentences("Version 2.5 improved recall.");
        assert_eq!(sentences, vec!["Version 2.5 improved recall."]);
    }

    #[test]
    fn test_order_preserved() {
        let text = "Alpha. Beta. Gamma. Delta.";
        let sentences = split_sentences(text);
        assert_eq!(sentences, vec!["Alpha.", "Beta.", "Gamma.", "Delta."]);
    }
}
