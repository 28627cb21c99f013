/*!
Constants for pqcd.

Service-level defaults and limits. Per-algorithm encoding sizes live in
`core::crypto::types::constants`.
*/

/// Crate version reported by the health endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Benchmark defaults and limits
pub mod bench {
    /// Iterations per algorithm when none are given
    pub const DEFAULT_ITERATIONS: usize = 100;

    /// Concurrent workers when none are given
    pub const DEFAULT_WORKERS: usize = 4;

    /// Upper bound on concurrent workers
    pub const MAX_WORKERS: usize = 256;

    /// Size of the message signed in each iteration
    pub const DEFAULT_MESSAGE_SIZE: usize = 256;

    /// Largest message the benchmark will sign (1 MiB)
    pub const MAX_MESSAGE_SIZE: usize = 1 << 20;
}
