//! Error types for set algebra operations.
//!
//! Every operation validates its inputs before it allocates or mutates
//! anything, so an error never leaves a partially built result behind.
//!
//! - [`PreconditionError`]: the receiver, an operand, or a callback is unusable
//! - [`ConfigurationError`]: the resolved result type cannot be constructed
//! - [`SetAlgebraError`]: the union of both, returned by fallible operations
//!
//! Not finding an element is not an error: [`find`](crate::find) returns
//! `None`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashSet;
//! use lambars_sets::{intersect, PreconditionKind, SetAlgebraError};
//!
//! let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
//! let error = intersect(&set, &[]).unwrap_err();
//!
//! match error {
//!     SetAlgebraError::Precondition(precondition) => {
//!         assert_eq!(precondition.operation, "intersect");
//!         assert_eq!(precondition.kind, PreconditionKind::MissingOperand { required: 1 });
//!     }
//!     SetAlgebraError::Configuration(_) => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// The reason a precondition check rejected an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreconditionKind {
    /// The receiver is not a set-like value.
    InvalidReceiver,
    /// The operand at `position` (zero-based, receiver excluded) is not iterable.
    InvalidArgument {
        /// Zero-based position of the offending operand.
        position: usize,
    },
    /// Fewer operands than the operation needs were supplied.
    MissingOperand {
        /// Minimum number of operands besides the receiver.
        required: usize,
    },
    /// The callback argument at `position` is absent or not callable.
    NotCallable {
        /// Zero-based position of the callback among the arguments.
        position: usize,
    },
}

impl std::fmt::Display for PreconditionKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReceiver => write!(formatter, "receiver is not set-like"),
            Self::InvalidArgument { position } => {
                write!(formatter, "operand {position} is not iterable")
            }
            Self::MissingOperand { required } => {
                write!(formatter, "at least {required} operand(s) required")
            }
            Self::NotCallable { position } => {
                write!(formatter, "argument {position} is not callable")
            }
        }
    }
}

/// Raised when an operation is invoked with an unusable receiver, operand,
/// or callback.
///
/// # Examples
///
/// ```rust
/// use lambars_sets::{PreconditionError, PreconditionKind};
///
/// let error = PreconditionError::new("intersect", PreconditionKind::MissingOperand { required: 1 });
/// assert_eq!(error.to_string(), "intersect: at least 1 operand(s) required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{operation}: {kind}")]
pub struct PreconditionError {
    /// Name of the operation that rejected its input.
    pub operation: &'static str,
    /// What was wrong with the input.
    pub kind: PreconditionKind,
}

impl PreconditionError {
    /// Creates a new `PreconditionError`.
    #[must_use]
    pub const fn new(operation: &'static str, kind: PreconditionKind) -> Self {
        Self { operation, kind }
    }
}

/// Raised when a result type cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use lambars_sets::ConfigurationError;
///
/// let error = ConfigurationError::new("BoundedSet", "capacity must be positive");
/// assert_eq!(
///     error.to_string(),
///     "result type `BoundedSet` is not constructible: capacity must be positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("result type `{species}` is not constructible: {reason}")]
pub struct ConfigurationError {
    /// Name of the result type that failed to construct.
    pub species: String,
    /// Why construction was refused.
    pub reason: String,
}

impl ConfigurationError {
    /// Creates a new `ConfigurationError`.
    #[must_use]
    pub fn new(species: &str, reason: &str) -> Self {
        Self {
            species: species.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Any failure a set algebra operation can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SetAlgebraError {
    /// An input failed validation.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    /// The result type could not be constructed.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl SetAlgebraError {
    /// Returns `true` if this is a precondition failure.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    /// Returns `true` if this is a configuration failure.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result alias used by every fallible operation in this crate.
pub type SetAlgebraResult<T> = Result<T, SetAlgebraError>;

/// Converts `error` and records it before it is handed back to the caller.
pub(crate) fn rejected(
    operation: &'static str,
    error: impl Into<SetAlgebraError>,
) -> SetAlgebraError {
    let error = error.into();
    tracing::debug!(operation, %error, "set operation rejected");
    error
}
