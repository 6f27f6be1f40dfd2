//! Search configuration.

/// Configuration parameters for itinerary enumeration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs in one itinerary.
    ///
    /// The directed-edge rule already guarantees termination, this is a
    /// second, defensive bound. Extensions past it are not explored.
    pub max_depth: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given depth bound.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}
