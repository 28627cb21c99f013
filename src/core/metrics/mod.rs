/*!
Performance metrics for provider operations.
*/

mod collector;
mod operation;

pub use collector::{MetricsCollector, OperationStat};
pub use operation::Operation;
