/*!
Names of the measured operations.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// A provider operation, used as the second half of a metrics key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Operation {
    KeyGen,
    Encapsulate,
    Decapsulate,
    Sign,
    Verify,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::KeyGen,
        Operation::Encapsulate,
        Operation::Decapsulate,
        Operation::Sign,
        Operation::Verify,
    ];

    /// Metric name, e.g. `KeyGen`
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::KeyGen => "KeyGen",
            Operation::Encapsulate => "Encapsulate",
            Operation::Decapsulate => "Decapsulate",
            Operation::Sign => "Sign",
            Operation::Verify => "Verify",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::InvalidRequest(format!("unknown operation: {}", s)))
    }
}
