//! Arbitrary-precision finite field arithmetic.
//!
//! ## Mathematical Background
//!
//! Every modulus `q` used here is assumed to be an odd prime chosen by
//! [`crate::primes`]; `Zq` and `PolyZq` do not themselves verify
//! primality, since that would mean re-running a probabilistic test on
//! every construction. Instead primality is established once, when a
//! basis is built, and carried as an invariant from there on.
//!
//! ## Module Organization
//!
//! - [`element`] — single elements of `Z/qZ` (`Zq`).
//! - [`poly`] — dense polynomials over `Z/qZ` (`PolyZq`), with
//!   `poly::algorithms` providing Berlekamp–Massey and `poly::subproduct`
//!   providing the subproduct tree / transposed Vandermonde solver.
//!
//! ## References
//!
//! - Kaltofen & Lee, *Early termination in sparse interpolation
//!   algorithms*, J. Symbolic Computation 36 (2003).
//! - Roche, *What can (and can't) we do with sparse polynomials?*,
//!   ISSAC 2018 (the algorithms this module supports are drawn from
//!   the `fmpz_spoly` implementation accompanying that line of work).

pub mod element;
pub mod poly;

pub use element::Zq;
pub use poly::PolyZq;
