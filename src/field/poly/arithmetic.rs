//! Arithmetic operations for [`PolyZq`].

use super::PolyZq;
use crate::error::{SpolyError, SpolyResult};
use crate::field::element::Zq;
use num_bigint::BigUint;

impl PolyZq {
    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus, "modulus mismatch");
        let max_len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(max_len);
        for i in 0..max_len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            result.push((a + b).value().clone());
        }
        PolyZq::from_coeffs(result, self.modulus.clone())
    }

    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus, "modulus mismatch");
        let max_len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(max_len);
        for i in 0..max_len {
            let a = self.coeff(i);
            let b = other.coeff(i);
            result.push((a - b).value().clone());
        }
        PolyZq::from_coeffs(result, self.modulus.clone())
    }

    pub fn neg(&self) -> Self {
        PolyZq::zero(self.modulus.clone()).sub(self)
    }

    /// Schoolbook `O(n*m)` multiplication. The moduli involved here are
    /// too large for a fixed-width NTT prime trick to help in general,
    /// so there is no `mul_fast` counterpart to the teacher's `u64`
    /// `PolyZp`.
    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.modulus, other.modulus, "modulus mismatch");
        if self.is_zero() || other.is_zero() {
            return PolyZq::zero(self.modulus.clone());
        }
        let mut result = vec![BigUint::from(0u32); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a == &BigUint::from(0u32) {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = (&result[i + j] + a * b) % &self.modulus;
            }
        }
        PolyZq::from_coeffs(result, self.modulus.clone())
    }

    pub fn scale(&self, c: &Zq) -> Self {
        debug_assert_eq!(c.modulus(), &self.modulus, "modulus mismatch");
        if c.is_zero() || self.is_zero() {
            return PolyZq::zero(self.modulus.clone());
        }
        let new_coeffs: Vec<BigUint> = self
            .coeffs
            .iter()
            .map(|a| (Zq::new(a.clone(), self.modulus.clone()) * c.clone()).value().clone())
            .collect();
        PolyZq::from_coeffs(new_coeffs, self.modulus.clone())
    }

    /// `self = quotient * divisor + remainder`, `deg(remainder) < deg(divisor)`.
    pub fn div_rem(&self, divisor: &Self) -> SpolyResult<(Self, Self)> {
        debug_assert_eq!(self.modulus, divisor.modulus, "modulus mismatch");
        if divisor.is_zero() {
            return Err(SpolyError::InvariantViolated {
                reason: "division by the zero polynomial".to_string(),
            });
        }
        if self.is_zero() {
            return Ok((PolyZq::zero(self.modulus.clone()), PolyZq::zero(self.modulus.clone())));
        }
        let div_degree = divisor.degree().unwrap();
        let self_degree = match self.degree() {
            Some(d) => d,
            None => return Ok((PolyZq::zero(self.modulus.clone()), PolyZq::zero(self.modulus.clone()))),
        };
        if self_degree < div_degree {
            return Ok((PolyZq::zero(self.modulus.clone()), self.clone()));
        }
        let lc_inv = divisor.leading_coeff().unwrap().inverse()?;
        let mut remainder = self.coeffs.clone();
        remainder.resize(self_degree + 1, BigUint::from(0u32));
        let quotient_len = self_degree - div_degree + 1;
        let mut quotient = vec![BigUint::from(0u32); quotient_len];
        for i in (0..quotient_len).rev() {
            let rem_idx = i + div_degree;
            if rem_idx >= remainder.len() {
                continue;
            }
            let coeff = Zq::new(remainder[rem_idx].clone(), self.modulus.clone()) * lc_inv.clone();
            quotient[i] = coeff.value().clone();
            if coeff.is_zero() {
                continue;
            }
            for (j, div_coeff) in divisor.coeffs.iter().enumerate() {
                let term = Zq::new(div_coeff.clone(), self.modulus.clone()) * coeff.clone();
                let rem_val = Zq::new(remainder[i + j].clone(), self.modulus.clone());
                remainder[i + j] = (rem_val - term).value().clone();
            }
        }
        Ok((
            PolyZq::from_coeffs(quotient, self.modulus.clone()),
            PolyZq::from_coeffs(remainder, self.modulus.clone()),
        ))
    }

    /// Remainder only, convenience wrapper around [`PolyZq::div_rem`].
    pub fn rem(&self, divisor: &Self) -> SpolyResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Monic GCD via the Euclidean algorithm, used by the power-of-
    /// generator root finder (C4) to split roots by the `x^{2^{k-1}}
    /// - 1` / `+1` factorization.
    pub fn gcd(&self, other: &Self) -> SpolyResult<Self> {
        debug_assert_eq!(self.modulus, other.modulus, "modulus mismatch");
        let (mut a, mut b) = (self.clone(), other.clone());
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = b;
            b = r;
        }
        if a.is_zero() {
            return Ok(a);
        }
        let lc_inv = a.leading_coeff().unwrap().inverse()?;
        Ok(a.scale(&lc_inv))
    }

    /// Evaluates this polynomial at `x` by Horner's rule.
    pub fn evaluate(&self, x: &Zq) -> Zq {
        debug_assert_eq!(x.modulus(), &self.modulus, "modulus mismatch");
        let mut acc = Zq::zero(self.modulus.clone());
        for coeff in self.coeffs.iter().rev() {
            acc = acc * x.clone() + Zq::new(coeff.clone(), self.modulus.clone());
        }
        acc
    }
}
