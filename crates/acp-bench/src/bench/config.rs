//! Benchmark configuration

use super::mode::BenchMode;

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// The timed loop to run
    pub mode: BenchMode,
    /// Loop iterations (non-positive runs zero iterations)
    pub count: i64,
    /// Synthetic tokens per message in tokens mode
    pub tokens: i64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            mode: BenchMode::default(),
            count: 100,
            tokens: 100,
        }
    }
}

impl BenchmarkConfig {
    /// Number of loop iterations actually executed
    pub fn iterations(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}
