//! Display and Debug implementations for [`PolyZq`].

use super::PolyZq;
use num_bigint::BigUint;
use std::fmt;

impl fmt::Debug for PolyZq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolyZq({:?}, mod {})", self.coefficients(), self.modulus())
    }
}

impl fmt::Display for PolyZq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, coeff) in self.coefficients().iter().enumerate().rev() {
            if coeff == &BigUint::from(0u32) {
                continue;
            }
            let term = if i == 0 {
                format!("{coeff}")
            } else if i == 1 {
                if coeff == &BigUint::from(1u32) {
                    "x".to_owned()
                } else {
                    format!("{coeff}*x")
                }
            } else if coeff == &BigUint::from(1u32) {
                format!("x^{i}")
            } else {
                format!("{coeff}*x^{i}")
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
