use thiserror::Error;

use crate::scoring::{KeywordCategory, ScoreWeights};

/// Errors from [`SummarizerConfigBuilder::build`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("scoring weight `{name}` must be finite and non-negative (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("keyword category `{0}` has a non-finite or negative weight")]
    InvalidCategoryWeight(String),
    #[error("keyword category `{0}` has no words")]
    EmptyCategory(String),
    #[error("section vocabulary replacement is empty")]
    EmptyVocabulary,
    #[error("sentences_per_section must be at least 1")]
    ZeroSentencesPerSection,
}

/// Controls how a list of values is overridden from its defaults.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    /// Use the built-in defaults.
    #[default]
    Default,
    /// Completely replace the defaults with these values.
    Replace(Vec<T>),
    /// Append these values to the defaults.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    /// Resolve this override against the given defaults.
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut result = defaults.to_vec();
                result.extend(v.iter().cloned());
                result
            }
        }
    }
}

/// Validated configuration for the summarization pipeline.
///
/// Constructed via [`SummarizerConfigBuilder`]; the default configuration
/// reproduces the fixed built-in algorithm exactly.
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfig {
    /// Section header vocabulary override (scan order preserved).
    pub(crate) section_vocabulary: ListOverride<String>,
    /// Keyword category override.
    pub(crate) keyword_categories: ListOverride<KeywordCategory>,
    /// Non-keyword signal weights; `None` means built-in defaults.
    pub(crate) weights: Option<ScoreWeights>,
    /// How many top sentences the per-section pass takes from each bucket.
    pub(crate) sentences_per_section: Option<usize>,
}

/// Builder for [`SummarizerConfig`].
///
/// Headers and keyword words are lowercased in [`build()`](Self::build),
/// since all matching is case-insensitive. Fails fast on nonsensical
/// weights, an empty replacement vocabulary, or a zero per-section take.
#[derive(Debug, Clone, Default)]
pub struct SummarizerConfigBuilder {
    section_vocabulary: ListOverride<String>,
    keyword_categories: ListOverride<KeywordCategory>,
    weights: Option<ScoreWeights>,
    sentences_per_section: Option<usize>,
}

impl SummarizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Section vocabulary ──

    pub fn set_section_headers(mut self, headers: Vec<String>) -> Self {
        self.section_vocabulary = ListOverride::Replace(headers);
        self
    }

    pub fn add_section_header(mut self, header: String) -> Self {
        match &mut self.section_vocabulary {
            ListOverride::Extend(v) => v.push(header),
            _ => self.section_vocabulary = ListOverride::Extend(vec![header]),
        }
        self
    }

    // ── Keyword categories ──

    pub fn set_keyword_categories(mut self, categories: Vec<KeywordCategory>) -> Self {
        self.keyword_categories = ListOverride::Replace(categories);
        self
    }

    pub fn add_keyword_category(mut self, category: KeywordCategory) -> Self {
        match &mut self.keyword_categories {
            ListOverride::Extend(v) => v.push(category),
            _ => self.keyword_categories = ListOverride::Extend(vec![category]),
        }
        self
    }

    // ── Scalars ──

    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn sentences_per_section(mut self, n: usize) -> Self {
        self.sentences_per_section = Some(n);
        self
    }

    /// Validate and produce a [`SummarizerConfig`].
    pub fn build(self) -> Result<SummarizerConfig, ConfigError> {
        if let Some(ref weights) = self.weights {
            check_weight("medium_sentence", weights.medium_sentence)?;
            check_weight("long_sentence", weights.long_sentence)?;
            check_weight("lead_position", weights.lead_position)?;
            check_weight("tail_position", weights.tail_position)?;
            check_weight("leading_uppercase", weights.leading_uppercase)?;
            check_weight("contains_digit", weights.contains_digit)?;
        }

        if let Some(n) = self.sentences_per_section {
            if n == 0 {
                return Err(ConfigError::ZeroSentencesPerSection);
            }
        }

        if let ListOverride::Replace(ref headers) = self.section_vocabulary {
            if headers.is_empty() {
                return Err(ConfigError::EmptyVocabulary);
            }
        }

        let section_vocabulary = lowercase_override(self.section_vocabulary);
        let keyword_categories = match self.keyword_categories {
            ListOverride::Default => ListOverride::Default,
            ListOverride::Replace(v) => ListOverride::Replace(validate_categories(v)?),
            ListOverride::Extend(v) => ListOverride::Extend(validate_categories(v)?),
        };

        Ok(SummarizerConfig {
            section_vocabulary,
            keyword_categories,
            weights: self.weights,
            sentences_per_section: self.sentences_per_section,
        })
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidWeight { name, value });
    }
    Ok(())
}

fn lowercase_override(list: ListOverride<String>) -> ListOverride<String> {
    let lower = |v: Vec<String>| v.into_iter().map(|s| s.to_lowercase()).collect();
    match list {
        ListOverride::Default => ListOverride::Default,
        ListOverride::Replace(v) => ListOverride::Replace(lower(v)),
        ListOverride::Extend(v) => ListOverride::Extend(lower(v)),
    }
}

fn validate_categories(
    categories: Vec<KeywordCategory>,
) -> Result<Vec<KeywordCategory>, ConfigError> {
    categories
        .into_iter()
        .map(|mut category| {
            if !category.weight.is_finite() || category.weight < 0.0 {
                return Err(ConfigError::InvalidCategoryWeight(category.name));
            }
            if category.words.is_empty() {
                return Err(ConfigError::EmptyCategory(category.name));
            }
            category.words = category.words.iter().map(|w| w.to_lowercase()).collect();
            Ok(category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let config = SummarizerConfigBuilder::new().build().unwrap();
        assert!(matches!(config.section_vocabulary, ListOverride::Default));
        assert!(config.weights.is_none());
        assert!(config.sentences_per_section.is_none());
    }

    #[test]
    fn test_builder_rejects_negative_weight() {
        let weights = ScoreWeights {
            lead_position: -1.0,
            ..Default::default()
        };
        let result = SummarizerConfigBuilder::new().weights(weights).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidWeight {
                name: "lead_position",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_rejects_nan_weight() {
        let weights = ScoreWeights {
            contains_digit: f64::NAN,
            ..Default::default()
        };
        assert!(SummarizerConfigBuilder::new().weights(weights).build().is_err());
    }

    #[test]
    fn test_builder_rejects_zero_per_section() {
        let result = SummarizerConfigBuilder::new().sentences_per_section(0).build();
        assert!(matches!(result, Err(ConfigError::ZeroSentencesPerSection)));
    }

    #[test]
    fn test_builder_rejects_empty_vocabulary_replacement() {
        let result = SummarizerConfigBuilder::new()
            .set_section_headers(vec![])
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyVocabulary)));
    }

    #[test]
    fn test_builder_lowercases_headers_and_words() {
        let config = SummarizerConfigBuilder::new()
            .add_section_header("Zusammenfassung".to_string())
            .add_keyword_category(KeywordCategory::new("custom", &["SIGNAL"], 1.5))
            .build()
            .unwrap();
        match config.section_vocabulary {
            ListOverride::Extend(ref v) => assert_eq!(v, &vec!["zusammenfassung".to_string()]),
            _ => panic!("expected Extend"),
        }
        match config.keyword_categories {
            ListOverride::Extend(ref v) => assert_eq!(v[0].words, vec!["signal".to_string()]),
            _ => panic!("expected Extend"),
        }
    }

    #[test]
    fn test_builder_rejects_empty_category() {
        let result = SummarizerConfigBuilder::new()
            .add_keyword_category(KeywordCategory::new("empty", &[], 1.0))
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyCategory(_))));
    }

    #[test]
    fn test_list_override_resolve() {
        let defaults = vec!["a".to_string(), "b".to_string()];

        let d: ListOverride<String> = ListOverride::Default;
        assert_eq!(d.resolve(&defaults), defaults);

        let r: ListOverride<String> = ListOverride::Replace(vec!["x".to_string()]);
        assert_eq!(r.resolve(&defaults), vec!["x".to_string()]);

        let e: ListOverride<String> = ListOverride::Extend(vec!["c".to_string()]);
        assert_eq!(
            e.resolve(&defaults),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }
}
