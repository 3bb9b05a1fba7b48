//! Error types for the core engine

use thiserror::Error;

/// Errors raised while transferring a piece into the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    /// A piece locked while one of its cells was still above row 0.
    ///
    /// The lock is rejected as a whole: no cell is written and no rows are cleared.
    #[error("field overflow: piece cell at ({x}, {y}) is above the field")]
    Overflow {
        /// Column of the first offending cell
        x: i8,
        /// Row of the first offending cell (always negative)
        y: i8,
    },
}
