//! `add`/`sub`/`scalar_mul`/`scalar_addmul`/`mul` for [`SpPoly`].

use super::SpPoly;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;

impl SpPoly {
    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        if scalar.is_zero() {
            return SpPoly::zero();
        }
        SpPoly {
            coeffs: self.coeffs.iter().map(|c| c * scalar).collect(),
            expons: self.expons.clone(),
        }
    }

    /// Computes `self + scalar * other`.
    ///
    /// Grounded on `fmpz_spoly/scalar_addmul.c`'s four-case dispatch:
    /// two disjoint-exponent-range shortcuts (the usual case once a
    /// caller is accumulating many low-degree correction terms onto a
    /// fixed high-degree base, as the SP interpolation engine does
    /// round by round) plus a general three-way merge.
    pub fn scalar_addmul(&self, scalar: &BigInt, other: &Self) -> Self {
        if scalar.is_zero() || other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.scalar_mul(scalar);
        }

        let self_low = self.low_degree().unwrap();
        let other_high = other.degree().unwrap();
        if other_high < self_low {
            // other lies entirely below self: append.
            let mut coeffs = self.coeffs.clone();
            let mut expons = self.expons.clone();
            coeffs.extend(other.coeffs.iter().map(|c| c * scalar));
            expons.extend(other.expons.iter().cloned());
            return SpPoly { coeffs, expons };
        }

        let self_high = self.degree().unwrap();
        let other_low = other.low_degree().unwrap();
        if self_high < other_low {
            // self lies entirely below other: prepend.
            let mut coeffs: Vec<BigInt> = other.coeffs.iter().map(|c| c * scalar).collect();
            let mut expons: Vec<BigInt> = other.expons.clone();
            coeffs.extend(self.coeffs.iter().cloned());
            expons.extend(self.expons.iter().cloned());
            return SpPoly { coeffs, expons };
        }

        // General case: three-pointer merge of two descending-exponent
        // term lists, combining equal exponents and dropping zero sums.
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + other.coeffs.len());
        let mut expons = Vec::with_capacity(self.expons.len() + other.expons.len());
        let (mut i, mut j) = (0usize, 0usize);
        while i < self.coeffs.len() && j < other.coeffs.len() {
            match self.expons[i].cmp(&other.expons[j]) {
                Ordering::Greater => {
                    coeffs.push(self.coeffs[i].clone());
                    expons.push(self.expons[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    coeffs.push(&other.coeffs[j] * scalar);
                    expons.push(other.expons[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let sum = &self.coeffs[i] + &other.coeffs[j] * scalar;
                    if !sum.is_zero() {
                        coeffs.push(sum);
                        expons.push(self.expons[i].clone());
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        while i < self.coeffs.len() {
            coeffs.push(self.coeffs[i].clone());
            expons.push(self.expons[i].clone());
            i += 1;
        }
        while j < other.coeffs.len() {
            coeffs.push(&other.coeffs[j] * scalar);
            expons.push(other.expons[j].clone());
            j += 1;
        }
        SpPoly { coeffs, expons }
    }

    pub fn add(&self, other: &Self) -> Self {
        self.scalar_addmul(&BigInt::from(1), other)
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.scalar_addmul(&BigInt::from(-1), other)
    }

    /// Full sparse-times-sparse multiplication: `O(t1 * t2)` terms
    /// before combining. This is the "classical" baseline; the
    /// output-sensitive multiplier in [`crate::mul_os`] avoids this
    /// blow-up when the product is itself sparse.
    pub fn mul_classical(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return SpPoly::zero();
        }
        let mut terms = Vec::with_capacity(self.coeffs.len() * other.coeffs.len());
        for (c1, e1) in self.terms() {
            for (c2, e2) in other.terms() {
                terms.push((c1 * c2, e1 + e2));
            }
        }
        SpPoly::from_terms_laurent(terms)
    }

    /// Evaluates `self` at the integer `x`.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for (c, e) in self.terms() {
            let exp = e.to_u32().expect("evaluate assumes non-negative exponents");
            acc += c * x.pow(exp);
        }
        acc
    }

    /// Evaluates `self` modulo `m`.
    pub fn evaluate_mod(&self, x: &BigInt, m: &BigInt) -> BigInt {
        let mut acc = BigInt::zero();
        for (c, e) in self.terms() {
            acc = (acc + c * x.modpow(e, m)) % m;
        }
        ((acc % m) + m) % m
    }
}
