use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub budgets: Option<BudgetsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub sections: Option<SectionsConfig>,
    pub keywords: Option<KeywordsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetsConfig {
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub chunk_length: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub medium_sentence_weight: Option<f64>,
    pub long_sentence_weight: Option<f64>,
    pub lead_position_weight: Option<f64>,
    pub tail_position_weight: Option<f64>,
    pub leading_uppercase_weight: Option<f64>,
    pub contains_digit_weight: Option<f64>,
    pub sentences_per_section: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionsConfig {
    /// Headers appended to the built-in vocabulary (scanned after it).
    pub extra_headers: Option<Vec<String>>,
    /// Full replacement of the built-in vocabulary. Wins over
    /// `extra_headers` when both are set.
    pub replace_headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordsConfig {
    /// Categories appended to the seven built-in ones.
    pub extra: Option<Vec<KeywordTableConfig>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordTableConfig {
    pub name: String,
    pub words: Vec<String>,
    /// Score per matched word; defaults to 1.0 when omitted.
    pub weight: Option<f64>,
}

/// Platform config directory path: `<config_dir>/skimmer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("skimmer").join("config.toml"))
}

/// Load config by cascading CWD `.skimmer.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".skimmer.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        budgets: Some(BudgetsConfig {
            max_length: overlay
                .budgets
                .as_ref()
                .and_then(|b| b.max_length)
                .or_else(|| base.budgets.as_ref().and_then(|b| b.max_length)),
            min_length: overlay
                .budgets
                .as_ref()
                .and_then(|b| b.min_length)
                .or_else(|| base.budgets.as_ref().and_then(|b| b.min_length)),
            chunk_length: overlay
                .budgets
                .as_ref()
                .and_then(|b| b.chunk_length)
                .or_else(|| base.budgets.as_ref().and_then(|b| b.chunk_length)),
        }),
        scoring: Some(ScoringConfig {
            medium_sentence_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.medium_sentence_weight)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.medium_sentence_weight)),
            long_sentence_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.long_sentence_weight)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.long_sentence_weight)),
            lead_position_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.lead_position_weight)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.lead_position_weight)),
            tail_position_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.tail_position_weight)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.tail_position_weight)),
            leading_uppercase_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.leading_uppercase_weight)
                .or_else(|| {
                    base.scoring
                        .as_ref()
                        .and_then(|s| s.leading_uppercase_weight)
                }),
            contains_digit_weight: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.contains_digit_weight)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.contains_digit_weight)),
            sentences_per_section: overlay
                .scoring
                .as_ref()
                .and_then(|s| s.sentences_per_section)
                .or_else(|| base.scoring.as_ref().and_then(|s| s.sentences_per_section)),
        }),
        sections: Some(SectionsConfig {
            extra_headers: overlay
                .sections
                .as_ref()
                .and_then(|s| s.extra_headers.clone())
                .or_else(|| base.sections.as_ref().and_then(|s| s.extra_headers.clone())),
            replace_headers: overlay
                .sections
                .as_ref()
                .and_then(|s| s.replace_headers.clone())
                .or_else(|| {
                    base.sections
                        .as_ref()
                        .and_then(|s| s.replace_headers.clone())
                }),
        }),
        keywords: Some(KeywordsConfig {
            extra: overlay
                .keywords
                .as_ref()
                .and_then(|k| k.extra.clone())
                .or_else(|| base.keywords.as_ref().and_then(|k| k.extra.clone())),
        }),
    }
}
