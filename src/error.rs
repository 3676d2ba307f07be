//! Crate-wide error type for sparse polynomial operations
//!
//! Every fallible operation in this crate returns a `SpolyResult`. There
//! is no panicking entry point for malformed caller input; the only
//! panics that can occur are `debug_assert!` failures guarding internal
//! invariants the caller is never expected to violate (for example,
//! combining two `Zq` values with different moduli).

use std::fmt;

/// Failure modes for sparse interpolation, multiplication, and the
/// supporting primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpolyError {
    /// The claimed term/height/degree bounds were too small for the
    /// basis actually needed (BP or SP interpolation).
    EstimateTooLow,

    /// Interpolation ran to completion but could not recover a
    /// polynomial consistent with the evaluations it was given.
    Incomplete,

    /// An internal precondition was violated, e.g. a caller-supplied
    /// evaluation vector whose length does not match its basis.
    InvariantViolated { reason: String },

    /// `mul_os`'s bounded verification-and-retry loop ran out of
    /// attempts without producing a result that passed the random
    /// modular check.
    VerificationExhausted { attempts: u32 },

    /// The power-of-generator root finder could not factor its input
    /// completely into linear factors over powers of the generator.
    NoRootFound,

    /// `poly_to_dense` was asked to materialize a polynomial whose
    /// degree does not fit in a dense vector the caller can hold.
    DegreeTooLarge,
}

impl fmt::Display for SpolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpolyError::EstimateTooLow => {
                write!(f, "term/height/degree bounds too small for basis")
            }
            SpolyError::Incomplete => {
                write!(f, "interpolation did not converge to a consistent polynomial")
            }
            SpolyError::InvariantViolated { reason } => {
                write!(f, "invariant violated: {reason}")
            }
            SpolyError::VerificationExhausted { attempts } => {
                write!(f, "mul_os verification failed after {attempts} attempts")
            }
            SpolyError::NoRootFound => {
                write!(f, "could not find all roots as powers of the generator")
            }
            SpolyError::DegreeTooLarge => {
                write!(f, "degree too large to materialize as a dense polynomial")
            }
        }
    }
}

impl std::error::Error for SpolyError {}

/// Convenience alias used throughout the crate.
pub type SpolyResult<T> = Result<T, SpolyError>;
