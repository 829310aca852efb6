//! Error types.
//!
//! Every fallible operation in the crate reports an [`Error`]. All of them
//! are configuration errors raised before any search runs: the search loop
//! itself has no failure mode, since infeasible solutions are scored through
//! the penalty term instead of being rejected.

use thiserror::Error;

/// Errors raised while building a problem instance or a driver configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The number of sets and the number of costs differ.
    #[error("number of sets ({sets}) does not match number of costs ({costs})")]
    LengthMismatch {
        /// Number of sets supplied.
        sets: usize,
        /// Number of costs supplied.
        costs: usize,
    },

    /// A set references a row outside `[0, rows)`.
    #[error("set {set} covers row {row}, but the instance has only {rows} rows")]
    RowOutOfRange {
        /// Index of the offending set.
        set: usize,
        /// Row index found in the set.
        row: usize,
        /// Declared row count.
        rows: usize,
    },

    /// A set cost is negative or not finite.
    #[error("set {set} has invalid cost {cost}")]
    InvalidCost {
        /// Index of the offending set.
        set: usize,
        /// The rejected cost.
        cost: f64,
    },

    /// A set line lists a different number of rows than it declares.
    #[error("set {set} declares {declared} rows but lists {found}")]
    SetSizeMismatch {
        /// Index of the offending set.
        set: usize,
        /// Row count declared on the line.
        declared: usize,
        /// Row numbers actually present.
        found: usize,
    },

    /// An instance header declares a different number of sets than follow it.
    #[error("instance declares {declared} sets but contains {found}")]
    SetCountMismatch {
        /// Set count from the header line.
        declared: usize,
        /// Set lines actually present.
        found: usize,
    },

    /// Malformed instance text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A bit string contained something other than `0` or `1`.
    #[error("invalid bit {found:?} at position {index}")]
    InvalidBit {
        /// Position of the character.
        index: usize,
        /// The rejected character.
        found: char,
    },

    /// A tunable is outside its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Accepted range or constraint.
        reason: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
