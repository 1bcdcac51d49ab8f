use std::io::Write;

use owo_colors::OwoColorize;
use skimmer_core::Section;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the document overview before the summary.
pub fn print_overview(
    w: &mut dyn Write,
    name: &str,
    char_count: usize,
    sentence_count: usize,
    section_count: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(w, "Summarizing {}...", name)?;
    let detail = format!(
        "({} characters, {} sentences, {} sections)",
        char_count, sentence_count, section_count
    );
    if color.enabled() {
        writeln!(w, "{}", detail.dimmed())?;
    } else {
        writeln!(w, "{}", detail)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Print the summary between separator rules.
pub fn print_summary_block(
    w: &mut dyn Write,
    summary: &str,
    color: ColorMode,
) -> std::io::Result<()> {
    let sep = "=".repeat(60);
    if color.enabled() {
        writeln!(w, "{}", sep.bold())?;
        writeln!(w, "{}", "SUMMARY".bold())?;
        writeln!(w, "{}", sep.bold())?;
    } else {
        writeln!(w, "{}", sep)?;
        writeln!(w, "SUMMARY")?;
        writeln!(w, "{}", sep)?;
    }
    writeln!(w)?;
    if summary.is_empty() {
        if color.enabled() {
            writeln!(w, "{}", "(no summary could be produced)".dimmed())?;
        } else {
            writeln!(w, "(no summary could be produced)")?;
        }
    } else {
        writeln!(w, "{}", summary)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Print footer statistics after the summary.
pub fn print_summary_stats(
    w: &mut dyn Write,
    summary_chars: usize,
    max_length: usize,
    min_length: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!(
        "Summary length: {} characters (budget {}, floor {})",
        summary_chars, max_length, min_length
    );
    if color.enabled() {
        writeln!(w, "{}", msg.dimmed())?;
    } else {
        writeln!(w, "{}", msg)?;
    }
    Ok(())
}

/// Print the organized section buckets for inspection.
pub fn print_sections_report(
    w: &mut dyn Write,
    sections: &[Section],
    color: ColorMode,
) -> std::io::Result<()> {
    if sections.is_empty() {
        writeln!(w, "No sentences found in document.")?;
        return Ok(());
    }

    for section in sections {
        let top_score = section
            .sentences
            .iter()
            .map(|s| s.score)
            .fold(f64::NEG_INFINITY, f64::max);
        if color.enabled() {
            writeln!(
                w,
                "{} {} sentences, top score {:.1}",
                format!("{}:", section.name).bold().cyan(),
                section.sentences.len(),
                top_score
            )?;
        } else {
            writeln!(
                w,
                "{}: {} sentences, top score {:.1}",
                section.name,
                section.sentences.len(),
                top_score
            )?;
        }
        for sentence in &section.sentences {
            let short = truncate(&sentence.text, 70);
            let line = format!("  [{:>3}] ({:>4.1}) {}", sentence.position, sentence.score, short);
            if color.enabled() {
                writeln!(w, "{}", line.dimmed())?;
            } else {
                writeln!(w, "{}", line)?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Print chunk boundaries with per-chunk sizes.
pub fn print_chunks(
    w: &mut dyn Write,
    chunks: &[String],
    chunk_length: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{} chunks (limit {} characters):",
        chunks.len(),
        chunk_length
    )?;
    writeln!(w)?;
    for (index, chunk) in chunks.iter().enumerate() {
        let header = format!("-- chunk {} ({} characters) --", index + 1, chunk.chars().count());
        if color.enabled() {
            writeln!(w, "{}", header.bold())?;
        } else {
            writeln!(w, "{}", header)?;
        }
        writeln!(w, "{}", chunk)?;
        writeln!(w)?;
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skimmer_core::Sentence;

    fn plain() -> ColorMode {
        ColorMode(false)
    }

    #[test]
    fn test_overview_plain() {
        let mut buf = Vec::new();
        print_overview(&mut buf, "paper.txt", 1234, 20, 4, plain()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Summarizing paper.txt..."));
        assert!(out.contains("1234 characters, 20 sentences, 4 sections"));
    }

    #[test]
    fn test_summary_block_empty_summary() {
        let mut buf = Vec::new();
        print_summary_block(&mut buf, "", plain()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("(no summary could be produced)"));
    }

    #[test]
    fn test_sections_report_lists_buckets() {
        let sections = vec![Section {
            name: "methods".to_string(),
            sentences: vec![Sentence {
                text: "We measured things.".to_string(),
                score: 4.5,
                position: 3,
                section: Some("methods".to_string()),
            }],
        }];
        let mut buf = Vec::new();
        print_sections_report(&mut buf, &sections, plain()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("methods: 1 sentences, top score 4.5"));
        assert!(out.contains("We measured things."));
    }

    #[test]
    fn test_chunks_plain_mode_has_no_escape_codes() {
        let chunks = vec!["First chunk text.".to_string(), "Second chunk.".to_string()];
        let mut buf = Vec::new();
        print_chunks(&mut buf, &chunks, 100, plain()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("2 chunks (limit 100 characters):"));
        assert!(out.contains("-- chunk 1 (17 characters) --"));
        assert!(!out.contains('\u{1b}'), "plain mode must not emit ANSI codes");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "y".repeat(100);
        let short = truncate(&long, 70);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 73);
    }
}
