//! Conversion between the sparse term-list representation and a dense
//! coefficient vector, `poly_to_dense`/`poly_from_dense` in the
//! distilled spec's exposed-constructor list.
//!
//! Dense storage only makes sense for non-negative, boundedly-large
//! exponents (a `Vec` indexed by exponent needs a `usize` length);
//! this crate's interpolation and multiplication engines never go
//! through this path themselves (their whole point is to avoid
//! materializing anything of size `O(degree)`), so this module exists
//! purely as the caller-facing round-trip utility S5 exercises.

use super::SpPoly;
use crate::error::{SpolyError, SpolyResult};
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

impl SpPoly {
    /// Converts this polynomial into a dense coefficient vector,
    /// `dense[i]` holding the coefficient of `x^i`, for `i` from `0`
    /// up to and including the degree.
    ///
    /// Returns [`SpolyError::DegreeTooLarge`] if the degree does not
    /// fit a `usize`, or exceeds `max_len` (the caller's declared
    /// bound on how large a dense buffer it is willing to allocate) —
    /// this crate otherwise has no way to stop an astronomically large
    /// sparse degree from trying to allocate an astronomically large
    /// `Vec`.
    pub fn to_dense(&self, max_len: usize) -> SpolyResult<Vec<BigInt>> {
        if self.is_zero() {
            return Ok(Vec::new());
        }
        let degree = self.degree().expect("non-zero polynomial has a degree");
        if degree.sign() == num_bigint::Sign::Minus {
            return Err(SpolyError::DegreeTooLarge);
        }
        let len = degree
            .to_usize()
            .map(|d| d + 1)
            .ok_or(SpolyError::DegreeTooLarge)?;
        if len > max_len {
            return Err(SpolyError::DegreeTooLarge);
        }

        let mut dense = vec![BigInt::zero(); len];
        for (c, e) in self.terms() {
            let idx = e.to_usize().expect("non-negative, already bounds-checked above");
            dense[idx] = c.clone();
        }
        Ok(dense)
    }

    /// Builds a polynomial from a dense coefficient vector, `dense[i]`
    /// being the coefficient of `x^i`; zero entries are simply dropped
    /// by normalization.
    pub fn from_dense(dense: &[BigInt]) -> Self {
        let terms = dense
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| (c.clone(), BigInt::from(i as u64)))
            .collect();
        SpPoly::from_terms(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_small_polynomial() {
        let p = SpPoly::from_terms(vec![
            (BigInt::from(3), BigInt::from(5)),
            (BigInt::from(-2), BigInt::from(1)),
            (BigInt::from(7), BigInt::from(0)),
        ]);
        let dense = p.to_dense(1000).unwrap();
        assert_eq!(dense.len(), 6);
        let recovered = SpPoly::from_dense(&dense);
        assert_eq!(recovered, p);
    }

    #[test]
    fn zero_polynomial_is_empty_dense_vector() {
        let p = SpPoly::zero();
        assert_eq!(p.to_dense(10).unwrap(), Vec::<BigInt>::new());
        assert!(SpPoly::from_dense(&[]).is_zero());
    }

    #[test]
    fn rejects_degree_past_the_caller_bound() {
        let p = SpPoly::from_terms(vec![(BigInt::from(1), BigInt::from(1_000_000))]);
        assert_eq!(p.to_dense(1000), Err(SpolyError::DegreeTooLarge));
    }

    #[test]
    fn laurent_polynomial_cannot_be_densified() {
        let p = SpPoly::from_terms_laurent(vec![(BigInt::from(1), BigInt::from(-1))]);
        assert_eq!(p.to_dense(1000), Err(SpolyError::DegreeTooLarge));
    }
}
