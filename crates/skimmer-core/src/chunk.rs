use crate::segment::split_sentences;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_LENGTH: usize = 1000;

/// Split document text into chunks of at most `max_chunk_chars` characters,
/// packing whole sentences greedily in document order. Sentences within a
/// chunk are joined with single spaces, which count toward the limit. A lone
/// sentence longer than the limit becomes its own oversized chunk rather
/// than being split mid-sentence.
pub fn chunk_text(text: &str, max_chunk_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for sentence in split_sentences(text) {
        let length = sentence.chars().count();
        let separator = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current_chars + separator + length > max_chunk_chars {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_chars += 1;
        }
        current.push_str(&sentence);
        current_chars += length;
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
