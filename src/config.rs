use std::env;

use anyhow::{Context, Result};

use crate::similarity::factory::Strategy;
use crate::similarity::DEFAULT_THRESHOLD;

/// Run defaults loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live there.
/// Command-line flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Similarity a pair must strictly exceed (ANTIPLAG_THRESHOLD, default 0.85)
    pub threshold: f64,
    /// Strategy identifier handed to the checker factory (ANTIPLAG_STRATEGY)
    pub strategy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: Strategy::default().as_str().to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults. The strategy name is not
    /// checked here; the factory rejects unknown names when it is used.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let threshold = match lookup("ANTIPLAG_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("ANTIPLAG_THRESHOLD is not a number: {raw:?}"))?,
            None => defaults.threshold,
        };

        let strategy = lookup("ANTIPLAG_STRATEGY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.strategy);

        Ok(Self {
            threshold,
            strategy,
        })
    }

    /// Check that the threshold is usable before building a checker.
    pub fn require_valid_threshold(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0 and 1, got {}.\n\
                 Set ANTIPLAG_THRESHOLD or pass --threshold.",
                self.threshold
            );
        }
        Ok(())
    }
}
