//! Attempt and batch configuration, validation, and error types.
//!
//! [`AttemptConfig`] describes one seeded generation and is usually built
//! through [`AttemptConfig::builder`]. [`BatchConfig`] describes a run of
//! many attempts over the same words. Both are checked by `validate()`
//! before any work starts.

use std::error::Error;
use std::fmt;

use crossgrid_core::Word;
use crossgrid_grid::AdjacencyRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`AttemptConfig::validate`] and
/// [`BatchConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The word list is empty.
    NoWords,
    /// A word is empty once whitespace is removed.
    BlankWord {
        /// Position of the word in the input list.
        index: usize,
    },
    /// The batch asks for zero attempts.
    ZeroAttempts,
    /// The batch asks for zero workers.
    ZeroWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWords => write!(f, "no words given"),
            Self::BlankWord { index } => write!(f, "word {index} is blank"),
            Self::ZeroAttempts => write!(f, "attempts must be at least 1"),
            Self::ZeroWorkers => write!(f, "workers must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

fn validate_words(words: &[String]) -> Result<(), ConfigError> {
    if words.is_empty() {
        return Err(ConfigError::NoWords);
    }
    if let Some(index) = words.iter().position(|w| Word::normalize(w).is_empty()) {
        return Err(ConfigError::BlankWord { index });
    }
    Ok(())
}

// ── AttemptConfig ──────────────────────────────────────────────────

/// Everything one attempt needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptConfig {
    /// Input words in the order given. Case and spacing are normalized
    /// by the attempt.
    pub words: Vec<String>,
    /// Seed for the attempt's random number generator.
    pub seed: u64,
    /// Keep words outside the root's component as dropped instead of
    /// failing the attempt. Default: `false`.
    pub allow_partial: bool,
    /// Adjacency rule for insertions. Default: [`AdjacencyRule::Strict`].
    pub adjacency: AdjacencyRule,
}

impl AttemptConfig {
    /// Start building a config.
    pub fn builder() -> AttemptConfigBuilder {
        AttemptConfigBuilder {
            words: Vec::new(),
            seed: 0,
            allow_partial: false,
            adjacency: AdjacencyRule::default(),
        }
    }

    /// Check the word list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_words(&self.words)
    }
}

/// Builder for [`AttemptConfig`].
#[derive(Clone, Debug)]
pub struct AttemptConfigBuilder {
    words: Vec<String>,
    seed: u64,
    allow_partial: bool,
    adjacency: AdjacencyRule,
}

impl AttemptConfigBuilder {
    /// Append one word.
    pub fn word(mut self, word: impl Into<String>) -> Self {
        self.words.push(word.into());
        self
    }

    /// Append several words.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Allow layouts that leave disconnected words out.
    pub fn allow_partial(mut self, allow: bool) -> Self {
        self.allow_partial = allow;
        self
    }

    /// Set the adjacency rule.
    pub fn adjacency(mut self, adjacency: AdjacencyRule) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<AttemptConfig, ConfigError> {
        let config = AttemptConfig {
            words: self.words,
            seed: self.seed,
            allow_partial: self.allow_partial,
            adjacency: self.adjacency,
        };
        config.validate()?;
        Ok(config)
    }
}

// ── BatchConfig ────────────────────────────────────────────────────

/// A run of independent attempts over one word list.
///
/// Attempt `i` uses seed `base_seed ^ i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Input words shared by every attempt.
    pub words: Vec<String>,
    /// Number of attempts. Default: 100.
    pub attempts: u32,
    /// Seed the per-attempt seeds are derived from. Default: 0.
    pub base_seed: u64,
    /// Worker threads. `1` runs attempts on the calling thread. Default: 1.
    pub workers: usize,
    /// Passed to every attempt. Default: `false`.
    pub allow_partial: bool,
    /// Passed to every attempt. Default: [`AdjacencyRule::Strict`].
    pub adjacency: AdjacencyRule,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            attempts: 100,
            base_seed: 0,
            workers: 1,
            allow_partial: false,
            adjacency: AdjacencyRule::default(),
        }
    }
}

impl BatchConfig {
    /// Default batch over `words`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Check the word list and the attempt and worker counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_words(&self.words)?;
        if self.attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        Ok(())
    }

    /// Seed of attempt `index`.
    pub fn seed_for(&self, index: u32) -> u64 {
        self.base_seed ^ u64::from(index)
    }

    /// The config attempt `index` runs with.
    pub fn attempt_config(&self, index: u32) -> AttemptConfig {
        AttemptConfig {
            words: self.words.clone(),
            seed: self.seed_for(index),
            allow_partial: self.allow_partial,
            adjacency: self.adjacency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_words_in_order() {
        let config = AttemptConfig::builder()
            .word("Star Wars")
            .words(["Kindle", "Santa"])
            .seed(9)
            .build()
            .unwrap();
        assert_eq!(config.words, vec!["Star Wars", "Kindle", "Santa"]);
        assert_eq!(config.seed, 9);
        assert!(!config.allow_partial);
        assert_eq!(config.adjacency, AdjacencyRule::Strict);
    }

    #[test]
    fn builder_rejects_no_words() {
        assert_eq!(
            AttemptConfig::builder().build().unwrap_err(),
            ConfigError::NoWords
        );
    }

    #[test]
    fn builder_rejects_blank_word() {
        let err = AttemptConfig::builder()
            .words(["CAT", " \t", "CAR"])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::BlankWord { index: 1 });
        assert_eq!(err.to_string(), "word 1 is blank");
    }

    #[test]
    fn batch_defaults() {
        let config = BatchConfig::new(["CAT"]);
        assert_eq!(config.attempts, 100);
        assert_eq!(config.workers, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn batch_rejects_zero_counts() {
        let mut config = BatchConfig::new(["CAT"]);
        config.attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
        config.attempts = 3;
        config.workers = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn attempt_seeds_are_xored_with_index() {
        let config = BatchConfig {
            base_seed: 0b1010,
            ..BatchConfig::new(["CAT", "CAR"])
        };
        assert_eq!(config.seed_for(0), 0b1010);
        assert_eq!(config.seed_for(3), 0b1001);
        let attempt = config.attempt_config(3);
        assert_eq!(attempt.seed, 0b1001);
        assert_eq!(attempt.words, config.words);
    }
}
