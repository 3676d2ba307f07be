//! Normalization: restoring invariants 1–2 (strictly decreasing
//! exponents, no zero coefficients) after a bulk mutation.
//!
//! FLINT's `_fmpz_spoly_normalise` is an intricate in-place quicksort
//! that coalesces duplicate exponents as it partitions, switching to
//! insertion sort below `QSORT_XOVER` (128) terms purely for constant-
//! factor performance. The externally observable contract is just "sort
//! descending by exponent, combine duplicates, drop zero sums" — this
//! is implemented directly with `sort_by` plus a single combine pass,
//! which is `O(t log t)` either way and far easier to read.

use super::SpPoly;
use num_traits::Zero;
use std::cmp::Ordering;

impl SpPoly {
    pub(super) fn normalise(&mut self) {
        let mut terms: Vec<(num_bigint::BigInt, num_bigint::BigInt)> =
            std::mem::take(&mut self.coeffs)
                .into_iter()
                .zip(std::mem::take(&mut self.expons))
                .collect();

        terms.sort_by(|(_, e1), (_, e2)| e2.cmp(e1));

        let mut combined: Vec<(num_bigint::BigInt, num_bigint::BigInt)> = Vec::with_capacity(terms.len());
        for (c, e) in terms {
            match combined.last_mut() {
                Some((last_c, last_e)) if *last_e == e => {
                    *last_c += c;
                }
                _ => combined.push((c, e)),
            }
        }
        combined.retain(|(c, _)| !c.is_zero());

        for (c, e) in combined {
            self.coeffs.push(c);
            self.expons.push(e);
        }
        debug_assert!(self
            .expons
            .windows(2)
            .all(|w| w[0].cmp(&w[1]) == Ordering::Greater));
    }
}
