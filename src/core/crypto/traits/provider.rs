/*!
Base contract shared by every provider.
*/

use crate::core::crypto::types::{Algorithm, AlgorithmSizes};

/// A provider that knows which algorithm it implements
pub trait NamedProvider: Send + Sync {
    /// The algorithm this provider instance represents
    fn algorithm(&self) -> Algorithm;

    /// Fixed encoding sizes for keys and outputs
    fn sizes(&self) -> AlgorithmSizes;
}
