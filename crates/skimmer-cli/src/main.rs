use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use skimmer_core::config_file::{self, ConfigFile};
use skimmer_core::{
    chunk_text, KeywordCategory, ScoreWeights, SummaryRecord, Summarizer,
    SummarizerConfigBuilder, DEFAULT_CHUNK_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};

mod output;

use output::ColorMode;

/// Skimmer - Heuristic extractive summarization for research-paper text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize an extracted-text file
    Summarize {
        /// Path to the extracted document text (UTF-8)
        file_path: PathBuf,

        /// Maximum summary length in characters
        #[arg(long)]
        max_length: Option<usize>,

        /// Minimum summary length in characters
        #[arg(long)]
        min_length: Option<usize>,

        /// Write the summary text to this file instead of just printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit the summary record as JSON instead of a formatted report
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the detected section buckets of a document
    Sections {
        /// Path to the extracted document text (UTF-8)
        file_path: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show how a document splits into fixed-size chunks
    Chunks {
        /// Path to the extracted document text (UTF-8)
        file_path: PathBuf,

        /// Maximum chunk length in characters
        #[arg(long)]
        chunk_length: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config_file::load_config();

    match cli.command {
        Command::Summarize {
            file_path,
            max_length,
            min_length,
            output,
            json,
            no_color,
        } => summarize(
            &config, file_path, max_length, min_length, output, json, no_color,
        ),
        Command::Sections {
            file_path,
            no_color,
        } => sections(&config, file_path, no_color),
        Command::Chunks {
            file_path,
            chunk_length,
            no_color,
        } => chunks(&config, file_path, chunk_length, no_color),
    }
}

#[allow(clippy::too_many_arguments)]
fn summarize(
    config: &ConfigFile,
    file_path: PathBuf,
    max_length: Option<usize>,
    min_length: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
    no_color: bool,
) -> anyhow::Result<()> {
    let text = read_document(&file_path)?;
    let summarizer = build_summarizer(config)?;

    let budgets = config.budgets.clone().unwrap_or_default();
    let max_length = resolve_setting(
        max_length,
        "SKIMMER_MAX_LENGTH",
        budgets.max_length,
        DEFAULT_MAX_LENGTH,
    );
    let min_length = resolve_setting(
        min_length,
        "SKIMMER_MIN_LENGTH",
        budgets.min_length,
        DEFAULT_MIN_LENGTH,
    );
    let chunk_length = resolve_setting(
        None,
        "SKIMMER_CHUNK_LENGTH",
        budgets.chunk_length,
        DEFAULT_CHUNK_LENGTH,
    );

    let summary = summarizer.summarize_with_budget(&text, max_length, min_length);

    if let Some(ref output_path) = output {
        std::fs::write(output_path, &summary)
            .with_context(|| format!("failed to write summary to {}", output_path.display()))?;
    }

    let name = display_name(&file_path);
    let mut stdout = std::io::stdout().lock();

    if json {
        let record = SummaryRecord::new(&name, &summary, chunk_length, min_length, max_length);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&record)?)?;
        return Ok(());
    }

    let buckets = summarizer.organize_text(&text);
    let sentence_count: usize = buckets.iter().map(|b| b.sentences.len()).sum();
    let color = ColorMode(!no_color);

    output::print_overview(
        &mut stdout,
        &name,
        text.chars().count(),
        sentence_count,
        buckets.len(),
        color,
    )?;
    output::print_summary_block(&mut stdout, &summary, color)?;
    output::print_summary_stats(
        &mut stdout,
        summary.chars().count(),
        max_length,
        min_length,
        color,
    )?;
    if let Some(ref output_path) = output {
        writeln!(stdout, "Summary written to {}", output_path.display())?;
    }
    Ok(())
}

fn sections(config: &ConfigFile, file_path: PathBuf, no_color: bool) -> anyhow::Result<()> {
    let text = read_document(&file_path)?;
    let summarizer = build_summarizer(config)?;

    let buckets = summarizer.organize_text(&text);
    let mut stdout = std::io::stdout().lock();
    output::print_sections_report(&mut stdout, &buckets, ColorMode(!no_color))?;
    Ok(())
}

fn chunks(
    config: &ConfigFile,
    file_path: PathBuf,
    chunk_length: Option<usize>,
    no_color: bool,
) -> anyhow::Result<()> {
    let text = read_document(&file_path)?;
    let budgets = config.budgets.clone().unwrap_or_default();
    let chunk_length = resolve_setting(
        chunk_length,
        "SKIMMER_CHUNK_LENGTH",
        budgets.chunk_length,
        DEFAULT_CHUNK_LENGTH,
    );

    let pieces = chunk_text(&text, chunk_length);
    let mut stdout = std::io::stdout().lock();
    output::print_chunks(&mut stdout, &pieces, chunk_length, ColorMode(!no_color))?;
    Ok(())
}

/// Resolve a numeric setting: CLI flag > environment > config file > default.
fn resolve_setting(
    flag: Option<usize>,
    env_key: &str,
    file_value: Option<usize>,
    default: usize,
) -> usize {
    flag.or_else(|| std::env::var(env_key).ok().and_then(|v| v.parse().ok()))
        .or(file_value)
        .unwrap_or(default)
}

/// Build a summarizer from the scoring/sections/keywords config sections.
fn build_summarizer(config: &ConfigFile) -> anyhow::Result<Summarizer> {
    let mut builder = SummarizerConfigBuilder::new();

    if let Some(ref sections) = config.sections {
        if let Some(ref replace) = sections.replace_headers {
            builder = builder.set_section_headers(replace.clone());
        } else if let Some(ref extra) = sections.extra_headers {
            for header in extra {
                builder = builder.add_section_header(header.clone());
            }
        }
    }

    if let Some(ref keywords) = config.keywords {
        if let Some(ref extra) = keywords.extra {
            for table in extra {
                builder = builder.add_keyword_category(KeywordCategory {
                    name: table.name.clone(),
                    words: table.words.clone(),
                    weight: table.weight.unwrap_or(1.0),
                });
            }
        }
    }

    if let Some(ref scoring) = config.scoring {
        let mut weights = ScoreWeights::default();
        if let Some(v) = scoring.medium_sentence_weight {
            weights.medium_sentence = v;
        }
        if let Some(v) = scoring.long_sentence_weight {
            weights.long_sentence = v;
        }
        if let Some(v) = scoring.lead_position_weight {
            weights.lead_position = v;
        }
        if let Some(v) = scoring.tail_position_weight {
            weights.tail_position = v;
        }
        if let Some(v) = scoring.leading_uppercase_weight {
            weights.leading_uppercase = v;
        }
        if let Some(v) = scoring.contains_digit_weight {
            weights.contains_digit = v;
        }
        builder = builder.weights(weights);
        if let Some(n) = scoring.sentences_per_section {
            builder = builder.sentences_per_section(n);
        }
    }

    let config = builder.build().context("invalid skimmer configuration")?;
    Ok(Summarizer::with_config(config))
}

fn read_document(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document text from {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
