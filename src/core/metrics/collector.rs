/*!
Running per-operation statistics.

Each `(algorithm, operation)` pair owns one `OperationStat`, folded forward
by every recorded sample with the incremental mean
`avg_n = (avg_{n-1} * (n - 1) + x) / n`. No samples are retained, so memory
is bounded by the number of distinct pairs.

A single `RwLock` guards the whole map. Writers hold it only for the O(1)
update; the cryptographic work being measured must run, and be timed,
before `record_operation` is called.
*/

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::operation::Operation;
use crate::core::crypto::types::Algorithm;
use crate::core::error::Result;

/// Aggregated statistics for one `(algorithm, operation)` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationStat {
    pub operation: Operation,
    pub algorithm: Algorithm,
    pub count: u64,
    #[serde(rename = "avg_latency_us")]
    pub avg_latency_micros: f64,
    #[serde(rename = "min_latency_us")]
    pub min_latency_micros: f64,
    #[serde(rename = "max_latency_us")]
    pub max_latency_micros: f64,
    #[serde(rename = "avg_input_size_bytes")]
    pub avg_input_bytes: f64,
    #[serde(rename = "avg_output_size_bytes")]
    pub avg_output_bytes: f64,
    /// Fraction of attempts so far that succeeded
    pub success_rate: f64,
}

impl OperationStat {
    /// Empty entry whose min/max start at the first observed latency
    fn seeded(algorithm: Algorithm, operation: Operation, first_latency: f64) -> Self {
        Self {
            operation,
            algorithm,
            count: 0,
            avg_latency_micros: 0.0,
            min_latency_micros: first_latency,
            max_latency_micros: first_latency,
            avg_input_bytes: 0.0,
            avg_output_bytes: 0.0,
            success_rate: 0.0,
        }
    }

    fn fold(&mut self, latency: f64, input_size: f64, output_size: f64, success: bool) {
        self.count += 1;
        let n = self.count as f64;

        self.avg_latency_micros = running_mean(self.avg_latency_micros, latency, n);
        self.avg_input_bytes = running_mean(self.avg_input_bytes, input_size, n);
        self.avg_output_bytes = running_mean(self.avg_output_bytes, output_size, n);

        if latency < self.min_latency_micros {
            self.min_latency_micros = latency;
        }
        if latency > self.max_latency_micros {
            self.max_latency_micros = latency;
        }

        let indicator = if success { 1.0 } else { 0.0 };
        self.success_rate = running_mean(self.success_rate, indicator, n);
    }
}

#[inline]
fn running_mean(previous: f64, sample: f64, n: f64) -> f64 {
    (previous * (n - 1.0) + sample) / n
}

/// Concurrent aggregator of operation statistics
#[derive(Debug, Default)]
pub struct MetricsCollector {
    stats: RwLock<HashMap<(Algorithm, Operation), OperationStat>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed attempt into the stats for `(algorithm, operation)`.
    ///
    /// Latency is recorded in whole microseconds.
    pub fn record_operation(
        &self,
        algorithm: Algorithm,
        operation: Operation,
        duration: Duration,
        input_size: usize,
        output_size: usize,
        success: bool,
    ) {
        let latency = duration.as_micros() as f64;

        {
            let mut stats = self.stats.write();
            stats
                .entry((algorithm, operation))
                .or_insert_with(|| OperationStat::seeded(algorithm, operation, latency))
                .fold(latency, input_size as f64, output_size as f64, success);
        }

        log::debug!(
            "operation recorded: algorithm={} operation={} latency_us={} input_bytes={} output_bytes={} success={}",
            algorithm,
            operation,
            latency,
            input_size,
            output_size,
            success
        );
    }

    /// Copy of every tracked entry, in no particular order
    pub fn all_stats(&self) -> Vec<OperationStat> {
        self.stats.read().values().cloned().collect()
    }

    /// Copy of one entry, if anything has been recorded for it
    pub fn stat(&self, algorithm: Algorithm, operation: Operation) -> Option<OperationStat> {
        self.stats.read().get(&(algorithm, operation)).cloned()
    }

    /// Number of distinct `(algorithm, operation)` pairs
    pub fn len(&self) -> usize {
        self.stats.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.read().is_empty()
    }

    /// Snapshot rendered as a JSON array, sorted by algorithm then operation
    pub fn report_json(&self) -> Result<String> {
        let mut stats = self.all_stats();
        stats.sort_by_key(|s| (s.algorithm, s.operation));
        Ok(serde_json::to_string_pretty(&stats)?)
    }
}
