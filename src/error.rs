//! Error types for scanner position tracking

use std::fmt;

/// Errors from driving a [`PositionStack`](crate::scanner::PositionStack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The position stack is empty: no input is being scanned.
    NotScanning,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::NotScanning => write!(f, "not scanning anything"),
        }
    }
}

impl std::error::Error for ScanError {}
