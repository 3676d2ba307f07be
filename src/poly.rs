//! The sparse polynomial container (C1): ordered term storage with the
//! normalization, shifting, and scalar operations every interpolation
//! and multiplication routine in this crate builds on.
//!
//! Terms are kept as two parallel `Vec<BigInt>`s rather than one
//! `Vec<(BigInt, BigInt)>`, mirroring the layout of the C struct this
//! type is grounded on (`coeffs`/`expons` parallel arrays), while still
//! exposing an API that keeps the two vectors in lockstep — there is no
//! way to observe one without the other out of sync.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};

pub mod arithmetic;
mod dense;
pub mod display;
mod normalise;
#[cfg(test)]
mod tests;

/// A sparse univariate polynomial over the integers.
///
/// Invariants (checked by every public constructor and mutator via
/// [`SpPoly::normalise`]):
///
/// 1. Exponents strictly decrease: `expons[0] > expons[1] > ...`.
/// 2. No coefficient is zero.
/// 3. An empty term list represents the zero polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpPoly {
    coeffs: Vec<BigInt>,
    expons: Vec<BigInt>,
}

impl SpPoly {
    pub fn zero() -> Self {
        SpPoly {
            coeffs: Vec::new(),
            expons: Vec::new(),
        }
    }

    /// Builds a polynomial from `(coeff, exponent)` terms in any order,
    /// combining duplicate exponents and dropping zero coefficients.
    /// Exponents must be non-negative; use
    /// [`SpPoly::from_terms_laurent`] for Laurent polynomials.
    pub fn from_terms(terms: Vec<(BigInt, BigInt)>) -> Self {
        debug_assert!(
            terms.iter().all(|(_, e)| !e.is_negative()),
            "use from_terms_laurent for negative exponents"
        );
        Self::from_terms_laurent(terms)
    }

    /// Builds a polynomial from `(coeff, exponent)` terms, permitting
    /// negative (Laurent) exponents. Every interpolation routine in
    /// this crate assumes non-negative exponents; that assumption is
    /// the caller's responsibility, not something enforced here.
    pub fn from_terms_laurent(terms: Vec<(BigInt, BigInt)>) -> Self {
        let mut coeffs = Vec::with_capacity(terms.len());
        let mut expons = Vec::with_capacity(terms.len());
        for (c, e) in terms {
            coeffs.push(c);
            expons.push(e);
        }
        let mut p = SpPoly { coeffs, expons };
        p.normalise();
        p
    }

    pub fn constant(c: BigInt) -> Self {
        if c.is_zero() {
            SpPoly::zero()
        } else {
            SpPoly {
                coeffs: vec![c],
                expons: vec![BigInt::zero()],
            }
        }
    }

    pub fn monomial(c: BigInt, e: BigInt) -> Self {
        if c.is_zero() {
            SpPoly::zero()
        } else {
            SpPoly {
                coeffs: vec![c],
                expons: vec![e],
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn term_count(&self) -> usize {
        self.coeffs.len()
    }

    /// Highest exponent, or `None` for the zero polynomial (the
    /// idiomatic stand-in for the "-1 by convention" sentinel the
    /// source this type is grounded on uses).
    pub fn degree(&self) -> Option<&BigInt> {
        self.expons.first()
    }

    /// Lowest exponent, or `None` for the zero polynomial.
    pub fn low_degree(&self) -> Option<&BigInt> {
        self.expons.last()
    }

    /// Maximum absolute value among the coefficients, or `None` for
    /// the zero polynomial.
    pub fn height(&self) -> Option<BigUint> {
        self.coeffs.iter().map(|c| c.abs().to_biguint().unwrap()).max()
    }

    /// Terms as `(coefficient, exponent)` pairs, highest exponent
    /// first.
    pub fn terms(&self) -> impl Iterator<Item = (&BigInt, &BigInt)> {
        self.coeffs.iter().zip(self.expons.iter())
    }

    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn expons(&self) -> &[BigInt] {
        &self.expons
    }

    /// Finds the position of `exponent` via binary search (exponents
    /// are stored in strictly decreasing order).
    fn position_of(&self, exponent: &BigInt) -> Result<usize, usize> {
        self.expons.binary_search_by(|e| exponent.cmp(e))
    }

    /// Coefficient at `exponent`, or zero if absent.
    pub fn coeff_at(&self, exponent: &BigInt) -> BigInt {
        match self.position_of(exponent) {
            Ok(i) => self.coeffs[i].clone(),
            Err(_) => BigInt::zero(),
        }
    }

    /// Sets the coefficient at `exponent`, inserting or removing the
    /// term as needed to preserve invariants 1–2.
    pub fn set_coeff(&mut self, exponent: BigInt, coeff: BigInt) {
        match self.position_of(&exponent) {
            Ok(i) => {
                if coeff.is_zero() {
                    self.coeffs.remove(i);
                    self.expons.remove(i);
                } else {
                    self.coeffs[i] = coeff;
                }
            }
            Err(i) => {
                if !coeff.is_zero() {
                    self.coeffs.insert(i, coeff);
                    self.expons.insert(i, exponent);
                }
            }
        }
    }

    /// Translates every exponent by `n` (grounded on
    /// `fmpz_spoly_shift_left`; `n` may be negative).
    pub fn shift(&self, n: &BigInt) -> Self {
        SpPoly {
            coeffs: self.coeffs.clone(),
            expons: self.expons.iter().map(|e| e + n).collect(),
        }
    }

    pub fn neg(&self) -> Self {
        SpPoly {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
            expons: self.expons.clone(),
        }
    }
}
