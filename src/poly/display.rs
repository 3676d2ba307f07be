use super::SpPoly;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

impl fmt::Display for SpPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut parts = Vec::with_capacity(self.term_count());
        for (c, e) in self.terms() {
            let term = if e.is_zero() {
                format!("{c}")
            } else if e == &BigInt::from(1) {
                format!("{c}*x")
            } else {
                format!("{c}*x^{e}")
            };
            parts.push(term);
        }
        write!(f, "{}", parts.join(" + "))
    }
}
