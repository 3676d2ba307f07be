//! Algorithms on dense polynomials over `Z/qZ` that go beyond plain
//! arithmetic: Berlekamp–Massey minimal-polynomial recovery.
//!
//! The distilled spec assigns Berlekamp–Massey to "C5 — external (from
//! D)", the dense-poly-library collaborator. Since this crate builds
//! `D`'s contract itself (there is no separate dense-poly crate in the
//! corpus this library was grounded on), the routine lives here rather
//! than being an unfulfilled dependency.

use super::PolyZq;
use crate::field::element::Zq;

/// Finds the unique monic polynomial `Λ` of minimal degree such that
/// `Σⱼ Λⱼ · seq[i + j] ≡ 0 (mod q)` for every valid `i`.
///
/// This is the classical Berlekamp–Massey algorithm over a prime
/// field, grounded on the contract FLINT's `fmpz_mod_poly_minpoly`
/// exposes to `fmpz_spoly_bp_interp`: given the BP-basis evaluation
/// sequence, recover the "Prony polynomial" whose roots are the powers
/// of the root of unity corresponding to the unknown polynomial's
/// exponents.
///
/// The recurrence the textbook BM update maintains internally is the
/// backward-looking one (`seq[n] + Σ c_i·seq[n-i] ≡ 0`), satisfied by
/// the LFSR **connection** polynomial `C`, whose roots are the
/// reciprocals `ω^{-eⱼ}` of the exponents this crate actually wants.
/// The Prony polynomial `Λ` the caller needs — the one satisfying the
/// forward recurrence documented above, with roots `ω^{eⱼ}` directly —
/// is `C`'s monic reciprocal, i.e. `C`'s coefficients reversed; that
/// reversal happens once, here, so every caller of `minpoly` gets the
/// Prony form the doc comment promises.
pub fn minpoly(seq: &[Zq], modulus: &num_bigint::BigUint) -> PolyZq {
    let zero = Zq::zero(modulus.clone());
    let one = Zq::one(modulus.clone());

    let mut c = PolyZq::constant(one.clone()); // current candidate connection poly
    let mut b = PolyZq::constant(one.clone()); // last candidate with a discrepancy
    let mut l = 0usize; // current linear complexity
    let mut m = 1usize; // steps since b was last updated
    let mut bdelta = one.clone(); // discrepancy when b was set

    for n in 0..seq.len() {
        // discrepancy = seq[n] + sum_{i=1}^{l} c_i * seq[n-i]
        let mut delta = seq[n].clone();
        for i in 1..=l {
            delta = delta + c.coeff(i) * seq[n - i].clone();
        }

        if delta.is_zero() {
            m += 1;
        } else if 2 * l <= n {
            let t = c.clone();
            let scale = delta.clone() * bdelta.inverse().expect("discrepancy is nonzero unit");
            let shifted = shift_poly(&b, m, modulus);
            c = c.sub(&shifted.scale(&scale));
            l = n + 1 - l;
            b = t;
            bdelta = delta;
            m = 1;
        } else {
            let scale = delta * bdelta.inverse().expect("discrepancy is nonzero unit");
            let shifted = shift_poly(&b, m, modulus);
            c = c.sub(&shifted.scale(&scale));
            m += 1;
        }
        let _ = &zero;
    }

    // Reverse the connection polynomial to its monic reciprocal, the
    // Prony polynomial: if C(z) = prod_j (1 - r_j z) then z^deg(C) *
    // C(1/z) = prod_j (z - r_j), swapping each reciprocal root r_j for
    // its inverse 1/r_j = omega^{e_j}.
    let degree = c.degree().unwrap_or(0);
    c.reverse(degree + 1)
}

/// Multiplies a polynomial by `x^shift`, used to align the "last
/// candidate" term in the Berlekamp–Massey update step.
fn shift_poly(p: &PolyZq, shift: usize, modulus: &num_bigint::BigUint) -> PolyZq {
    let mut coeffs = vec![num_bigint::BigUint::from(0u32); shift];
    coeffs.extend_from_slice(p.coefficients());
    PolyZq::from_coeffs(coeffs, modulus.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn recovers_fibonacci_recurrence() {
        // Fibonacci mod a small prime satisfies b[n] = b[n-1] + b[n-2].
        // Its Prony polynomial is the reversal of 1 - x - x^2, namely
        // x^2 - x - 1: the ordinary characteristic polynomial whose
        // roots are the sequence's actual growth rates.
        let q = BigUint::from(101u32);
        let mut seq = vec![Zq::new(BigUint::from(0u32), q.clone()), Zq::new(BigUint::from(1u32), q.clone())];
        for i in 2..10 {
            let next = seq[i - 1].clone() + seq[i - 2].clone();
            seq.push(next);
        }
        let lambda = minpoly(&seq, &q);
        assert_eq!(lambda.degree(), Some(2));
        // Verify the forward recurrence sum_j lambda_j * seq[i+j] == 0,
        // which only the Prony polynomial (not its connection-poly
        // reciprocal) satisfies.
        let degree = lambda.degree().unwrap();
        for i in 0..seq.len() - degree {
            let mut acc = Zq::zero(q.clone());
            for j in 0..=degree {
                acc = acc + lambda.coeff(j) * seq[i + j].clone();
            }
            assert!(acc.is_zero());
        }
    }
}
