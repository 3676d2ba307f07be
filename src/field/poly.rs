//! Dense polynomials over `Z/qZ`, the big-integer generalization of the
//! teacher's `PolyZp`.
//!
//! This is the "dense poly library" `D` that the distilled spec treats
//! as an external collaborator: Berlekamp–Massey (`algorithms::minpoly`),
//! the subproduct tree and transposed Vandermonde solver
//! (`subproduct`), and plain arithmetic (`arithmetic`) all live here.

use crate::field::element::Zq;
use num_bigint::BigUint;

pub mod algorithms;
pub mod arithmetic;
pub mod display;
pub mod subproduct;
#[cfg(test)]
mod tests;

/// A polynomial over `Z/qZ`, stored as coefficients from the constant
/// term up (`coeffs[i]` is the coefficient of `x^i`), with no trailing
/// zero coefficient except for the zero polynomial itself (`coeffs`
/// empty).
#[derive(Clone, PartialEq, Eq)]
pub struct PolyZq {
    coeffs: Vec<BigUint>,
    modulus: BigUint,
}

impl PolyZq {
    /// Builds from a coefficient vector, reducing each entry modulo
    /// `modulus` and trimming trailing zeros.
    pub fn from_coeffs(coeffs: Vec<BigUint>, modulus: BigUint) -> Self {
        let mut reduced: Vec<BigUint> = coeffs.into_iter().map(|c| c % &modulus).collect();
        while reduced.last().map(|c| c == &BigUint::from(0u32)).unwrap_or(false) {
            reduced.pop();
        }
        PolyZq {
            coeffs: reduced,
            modulus,
        }
    }

    pub fn zero(modulus: BigUint) -> Self {
        PolyZq {
            coeffs: Vec::new(),
            modulus,
        }
    }

    pub fn constant(value: Zq) -> Self {
        let modulus = value.modulus().clone();
        if value.is_zero() {
            PolyZq::zero(modulus)
        } else {
            PolyZq {
                coeffs: vec![value.value().clone()],
                modulus,
            }
        }
    }

    /// `x`, as a degree-1 monic polynomial.
    pub fn x(modulus: BigUint) -> Self {
        PolyZq {
            coeffs: vec![BigUint::from(0u32), BigUint::from(1u32)],
            modulus,
        }
    }

    /// `x - a`.
    pub fn x_minus_a(a: &Zq) -> Self {
        let modulus = a.modulus().clone();
        let neg_a = a.negate();
        PolyZq {
            coeffs: vec![neg_a.value().clone(), BigUint::from(1u32)],
            modulus,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    pub fn leading_coeff(&self) -> Option<Zq> {
        self.coeffs
            .last()
            .map(|c| Zq::new(c.clone(), self.modulus.clone()))
    }

    pub fn coeff(&self, i: usize) -> Zq {
        match self.coeffs.get(i) {
            Some(c) => Zq::new(c.clone(), self.modulus.clone()),
            None => Zq::zero(self.modulus.clone()),
        }
    }

    pub fn set_coeff(&mut self, i: usize, value: Zq) {
        if self.coeffs.len() <= i {
            self.coeffs.resize(i + 1, BigUint::from(0u32));
        }
        self.coeffs[i] = value.value().clone();
        while self.coeffs.last().map(|c| c == &BigUint::from(0u32)).unwrap_or(false) {
            self.coeffs.pop();
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn coefficients(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Truncates to the lowest `n` coefficients (degree `< n`).
    pub fn truncate(&self, n: usize) -> Self {
        let mut c = self.coeffs.clone();
        c.truncate(n);
        PolyZq::from_coeffs(c, self.modulus.clone())
    }

    /// Reverses the coefficient order up to degree `n - 1`, padding
    /// with zeros if this polynomial has fewer than `n` coefficients.
    /// Used by the power-series division in `subproduct`.
    pub fn reverse(&self, n: usize) -> Self {
        let mut c = vec![BigUint::from(0u32); n];
        for (i, coeff) in self.coeffs.iter().take(n).enumerate() {
            c[n - 1 - i] = coeff.clone();
        }
        PolyZq::from_coeffs(c, self.modulus.clone())
    }
}
