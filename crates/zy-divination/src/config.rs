//! Configuration for a divination session.

use crate::method::Method;

/// Configuration for a divination session.
#[derive(Debug, Clone)]
pub struct DivinationConfig {
    /// RNG seed for reproducible casts; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Method used when a cast does not name one.
    pub default_method: Method,
}

impl Default for DivinationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_method: Method::YarrowStalks,
        }
    }
}

impl DivinationConfig {
    /// Set a reproducible RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.default_method = method;
        self
    }
}
