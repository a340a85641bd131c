//! distribution::errors — error surface for finite discrete distributions.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by every operator in the
//! `distribution` subtree: construction, support operators, trimming,
//! extremal operators, queries, and the named-distribution factories.
//!
//! Key behaviors
//! -------------
//! - Define [`DistError`] and [`DistResult`] as the canonical error and result
//!   types for distribution code.
//! - Attach human-readable `Display` messages that embed the offending payload
//!   (lengths, values, thresholds) so diagnostics are meaningful on their own.
//! - Implement `From<DistError> for PyErr` when the `python-bindings` feature
//!   is enabled, mapping every variant to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every variant is a local precondition violation detected synchronously;
//!   there is no retry semantics because all computations are deterministic.
//! - Variants are small and `Clone` so they can be compared in tests and
//!   wrapped by higher layers (see `queueing::errors`).
//!
//! Conventions
//! -----------
//! - Messages are phrased as domain constraints ("eps must be finite and
//!   >= 0") rather than implementation details.
//! - Boundary clamps in `pi_fold`, `max_of` and `min_of` are documented design
//!   behavior and never surface as errors.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` messages embed their payloads.
use crate::distribution::fdd::MAX_WINDOW_LEN;
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for distribution operations that may produce [`DistError`].
pub type DistResult<T> = Result<T, DistError>;

/// Error conditions for finite discrete distributions.
///
/// Variants
/// --------
/// - `LengthMismatch`: value and probability lists differ in length.
/// - `EmptySupport`: no `(value, probability)` pair was supplied.
/// - `InvalidProbability`: a probability is negative or non-finite.
/// - `InvalidEpsilon`: a trimming threshold is negative or non-finite.
/// - `TruncationDomain`: a normalized tail/conditional selects zero mass.
/// - `EmptySelection`: a conditional predicate matched no support value.
/// - `EmptyInput`: an n-ary operator was called with no operands.
/// - `InvalidQuantile`: quantile level outside `(0, 1)`.
/// - `InvalidEntropyBase`: logarithm base is not finite, positive and `!= 1`.
/// - `ZeroMass`: renormalization of a distribution without positive mass.
/// - `InvalidParameter`: a factory parameter violates its valid range.
/// - `WindowOverflow`: a result window leaves the `i64` range or exceeds
///   [`MAX_WINDOW_LEN`] positions.
#[derive(Debug, Clone, PartialEq)]
pub enum DistError {
    // ---- Construction ----
    LengthMismatch { values: usize, probabilities: usize },
    EmptySupport,
    InvalidProbability { index: usize, value: f64 },

    // ---- Operator arguments ----
    InvalidEpsilon { value: f64 },
    TruncationDomain { operator: &'static str, m: i64 },
    EmptySelection,
    EmptyInput { operator: &'static str },
    InvalidQuantile { q: f64 },
    InvalidEntropyBase { base: f64 },
    ZeroMass,

    // ---- Factories ----
    InvalidParameter { family: &'static str, reason: String },

    // ---- Window arithmetic ----
    WindowOverflow { operator: &'static str },
}

impl std::error::Error for DistError {}

impl std::fmt::Display for DistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistError::LengthMismatch { values, probabilities } => {
                write!(
                    f,
                    "Value/probability length mismatch: {values} values, {probabilities} probabilities"
                )
            }
            DistError::EmptySupport => {
                write!(f, "A distribution needs at least one (value, probability) pair.")
            }
            DistError::InvalidProbability { index, value } => {
                write!(f, "Probability at index {index} must be finite and >= 0; got {value}")
            }
            DistError::InvalidEpsilon { value } => {
                write!(f, "Threshold eps must be finite and >= 0; got {value}")
            }
            DistError::TruncationDomain { operator, m } => {
                write!(f, "{operator}: no probability mass in the selected region at m = {m}")
            }
            DistError::EmptySelection => {
                write!(f, "Condition does not match any value of the distribution.")
            }
            DistError::EmptyInput { operator } => {
                write!(f, "{operator}: at least one distribution is required")
            }
            DistError::InvalidQuantile { q } => {
                write!(f, "Quantile level must satisfy 0 < q < 1; got {q}")
            }
            DistError::InvalidEntropyBase { base } => {
                write!(f, "Entropy base must be finite, > 0 and != 1; got {base}")
            }
            DistError::ZeroMass => {
                write!(f, "Distribution has no positive probability mass to normalize.")
            }
            DistError::InvalidParameter { family, reason } => {
                write!(f, "Invalid {family} parameters: {reason}")
            }
            DistError::WindowOverflow { operator } => {
                write!(
                    f,
                    "{operator}: support window leaves the i64 range or exceeds {MAX_WINDOW_LEN} values"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<DistError> for PyErr {
    fn from(err: DistError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
