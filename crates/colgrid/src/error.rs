//! Error type for layout computation.
//!
//! The layout engine itself cannot fail: infeasible column counts fall back
//! to a single column and an empty item list produces an empty layout. The
//! only rejected input is a caller contract violation.

use std::fmt;

/// Error type for grid layout operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// The caller passed a terminal width of zero. The engine needs at
    /// least one usable cell; width detection should have fallen back to a
    /// positive default before reaching the solver.
    InvalidTerminalWidth,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidTerminalWidth => {
                write!(f, "terminal width must be at least 1")
            }
        }
    }
}

impl std::error::Error for GridError {}
