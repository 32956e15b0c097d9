//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, unsupported inputs). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A forecast was requested for an unsupported horizon.
    #[error("unsupported forecast horizon: {days} days (supported: 7, 14, 30)")]
    InvalidHorizon { days: u32 },

    /// Too little demand history to fit a seasonality model.
    #[error("insufficient demand history: {observations} observation(s), need at least {required}")]
    InsufficientHistory {
        observations: usize,
        required: usize,
    },

    /// A referenced product code is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// A referenced inventory lot does not exist.
    #[error("unknown lot: {0}")]
    UnknownLot(String),

    /// A non-positive (or non-finite) quantity reached the ledger boundary.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(f64),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_product(id: impl ToString) -> Self {
        Self::UnknownProduct(id.to_string())
    }

    pub fn unknown_lot(id: impl ToString) -> Self {
        Self::UnknownLot(id.to_string())
    }
}
