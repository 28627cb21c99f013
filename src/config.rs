/*!
Benchmark configuration for pqcd.

Controls how many iterations each algorithm runs, how many workers run
them concurrently, and the size of the message signed on every signature
iteration.
*/

use crate::core::constants::bench;
use crate::core::crypto::types::Algorithm;
use crate::core::error::{Error, Result};

/// Configuration for a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Full operation cycles per algorithm
    pub iterations: usize,
    /// Concurrent workers sharing the handler
    pub workers: usize,
    /// Bytes of random text signed per signature cycle
    pub message_size: usize,
    /// Algorithms to exercise
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: bench::DEFAULT_ITERATIONS,
            workers: bench::DEFAULT_WORKERS,
            message_size: bench::DEFAULT_MESSAGE_SIZE,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the post-quantum algorithms
    pub fn post_quantum() -> Self {
        Self {
            algorithms: Algorithm::ALL.iter().copied().filter(Algorithm::is_post_quantum).collect(),
            ..Self::default()
        }
    }

    /// Only the classical baselines
    pub fn classical() -> Self {
        Self {
            algorithms: Algorithm::ALL.iter().copied().filter(|a| !a.is_post_quantum()).collect(),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::Config("iterations must be greater than zero".into()));
        }

        if self.workers == 0 || self.workers > bench::MAX_WORKERS {
            return Err(Error::Config(format!(
                "workers must be between 1 and {}, got {}",
                bench::MAX_WORKERS,
                self.workers
            )));
        }

        if self.message_size > bench::MAX_MESSAGE_SIZE {
            return Err(Error::Config(format!(
                "message size {} exceeds the {} byte limit",
                self.message_size,
                bench::MAX_MESSAGE_SIZE
            )));
        }

        if self.algorithms.is_empty() {
            return Err(Error::Config("at least one algorithm is required".into()));
        }

        Ok(())
    }
}
