//! Heuristic selector configuration.

/// Configuration for the randomized heuristic selector.
///
/// # Examples
///
/// ```
/// use menuplan::heuristic::SelectorConfig;
///
/// let config = SelectorConfig::default()
///     .with_top_tier(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Size of the high-scoring subset each pool is truncated to before
    /// sampling. Larger = more variety, lower average score.
    pub top_tier: usize,

    /// Maximum random draws per slot before giving up.
    pub max_attempts: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            top_tier: 100,
            max_attempts: 100,
            seed: None,
        }
    }
}

impl SelectorConfig {
    pub fn with_top_tier(mut self, n: usize) -> Self {
        self.top_tier = n;
        self
    }

    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_tier == 0 {
            return Err("top_tier must be positive".into());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be positive".into());
        }
        Ok(())
    }
}
