//! A single element of `Z/qZ` for an arbitrary-precision prime `q`.
//!
//! This is the big-integer generalization of the teacher's `Zp` (which
//! stores its value and modulus as `u64`). BP-interpolation primes can
//! be far larger than 64 bits once the claimed coefficient height `H`
//! is (the spec's round-trip scenario uses `H` up to `2^200`), so every
//! field element here carries a `BigUint` value and modulus instead.

use crate::numutil;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{SpolyError, SpolyResult};

/// An element of `Z/qZ`, always kept reduced to `[0, q)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Zq {
    value: BigUint,
    modulus: BigUint,
}

impl Zq {
    /// Builds an element, reducing `value` modulo `modulus`.
    ///
    /// `modulus` is assumed prime by every operation below (inversion
    /// in particular); this is a caller precondition, not something
    /// this constructor checks.
    pub fn new(value: BigUint, modulus: BigUint) -> Self {
        debug_assert!(modulus > BigUint::one(), "modulus must exceed 1");
        Zq {
            value: value % &modulus,
            modulus,
        }
    }

    /// Builds an element from a signed value, wrapping negative inputs
    /// into `[0, q)`.
    pub fn from_signed(value: &BigInt, modulus: BigUint) -> Self {
        let m = BigInt::from(modulus.clone());
        let reduced = ((value % &m) + &m) % &m;
        Zq {
            value: reduced.to_biguint().expect("reduced value is non-negative"),
            modulus,
        }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    pub fn zero(modulus: BigUint) -> Self {
        Zq {
            value: BigUint::zero(),
            modulus,
        }
    }

    pub fn one(modulus: BigUint) -> Self {
        Zq {
            value: BigUint::one(),
            modulus,
        }
    }

    pub fn negate(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Zq {
                value: &self.modulus - &self.value,
                modulus: self.modulus.clone(),
            }
        }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn inverse(&self) -> SpolyResult<Self> {
        if self.is_zero() {
            return Err(SpolyError::InvariantViolated {
                reason: "cannot invert zero".to_string(),
            });
        }
        let a = BigInt::from(self.value.clone());
        let m = BigInt::from(self.modulus.clone());
        let inv = numutil::invmod(&a, &m).ok_or_else(|| SpolyError::InvariantViolated {
            reason: "modulus is not prime relative to this element".to_string(),
        })?;
        Ok(Zq {
            value: inv.to_biguint().expect("invmod result is non-negative"),
            modulus: self.modulus.clone(),
        })
    }

    /// Binary exponentiation, `self^exp mod q`.
    pub fn pow(&self, exp: &BigUint) -> Self {
        Zq {
            value: self.value.modpow(exp, &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// Multiplicative order of this element, assuming it divides `2^k`
    /// (the only case BP interpolation needs: checking a candidate
    /// `2^k`-th root of unity).
    pub fn has_order_exactly(&self, order: &BigUint) -> bool {
        if self.pow(order) != Zq::one(self.modulus.clone()) {
            return false;
        }
        let half = order >> 1u32;
        if half.is_zero() {
            return true;
        }
        self.pow(&half) != Zq::one(self.modulus.clone())
    }

    /// Reduces this element into the symmetric range `(-q/2, q/2]`,
    /// the convention used when lifting a modular coefficient back to
    /// a signed integer.
    pub fn to_symmetric(&self) -> BigInt {
        numutil::to_symmetric(&BigInt::from(self.value.clone()), &BigInt::from(self.modulus.clone()))
    }
}

impl fmt::Debug for Zq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zq({}, mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for Zq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for Zq {
    type Output = Zq;
    fn add(self, rhs: Zq) -> Zq {
        debug_assert_eq!(self.modulus, rhs.modulus, "modulus mismatch");
        Zq::new(self.value + rhs.value, self.modulus)
    }
}

impl Sub for Zq {
    type Output = Zq;
    fn sub(self, rhs: Zq) -> Zq {
        debug_assert_eq!(self.modulus, rhs.modulus, "modulus mismatch");
        let m = self.modulus.clone();
        let diff = (BigInt::from(self.value) - BigInt::from(rhs.value) + BigInt::from(m.clone()))
            % BigInt::from(m.clone());
        Zq {
            value: diff.to_biguint().expect("sub result is non-negative"),
            modulus: m,
        }
    }
}

impl Mul for Zq {
    type Output = Zq;
    fn mul(self, rhs: Zq) -> Zq {
        debug_assert_eq!(self.modulus, rhs.modulus, "modulus mismatch");
        Zq::new(self.value * rhs.value, self.modulus)
    }
}

impl Div for Zq {
    type Output = Zq;
    fn div(self, rhs: Zq) -> Zq {
        debug_assert_eq!(self.modulus, rhs.modulus, "modulus mismatch");
        self * rhs.inverse().expect("division by zero or non-unit")
    }
}

impl Neg for Zq {
    type Output = Zq;
    fn neg(self) -> Zq {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> BigUint {
        BigUint::from(3121u32)
    }

    #[test]
    fn basic_arithmetic() {
        let a = Zq::new(BigUint::from(10u32), m());
        let b = Zq::new(BigUint::from(20u32), m());
        assert_eq!((a.clone() + b.clone()).value(), &BigUint::from(30u32));
        assert_eq!((b.clone() - a.clone()).value(), &BigUint::from(10u32));
        assert_eq!((a.clone() * b.clone()).value(), &BigUint::from(200u32));
    }

    #[test]
    fn inverse_round_trip() {
        let a = Zq::new(BigUint::from(17u32), m());
        let inv = a.inverse().unwrap();
        assert!((a * inv).is_one());
    }

    #[test]
    fn inverse_of_zero_fails() {
        let z = Zq::zero(m());
        assert!(z.inverse().is_err());
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let a = Zq::new(BigUint::from(3u32), m());
        let p = a.pow(&BigUint::from(5u32));
        let mut manual = Zq::one(m());
        for _ in 0..5 {
            manual = manual * a.clone();
        }
        assert_eq!(p, manual);
    }

    #[test]
    fn symmetric_negative_for_upper_half() {
        let q = BigUint::from(11u32);
        let a = Zq::new(BigUint::from(9u32), q);
        assert_eq!(a.to_symmetric(), BigInt::from(-2));
    }

    #[test]
    fn from_signed_wraps_negative() {
        let q = BigUint::from(11u32);
        let a = Zq::from_signed(&BigInt::from(-2), q);
        assert_eq!(a.value(), &BigUint::from(9u32));
    }
}
