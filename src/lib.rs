//! Sparse integer polynomial arithmetic and sparse interpolation.
//!
//! A sparse polynomial is represented by its nonzero `(coefficient,
//! exponent)` terms rather than a dense coefficient vector, so it can
//! have an astronomically large degree as long as it has few nonzero
//! terms. The central problem this crate solves is **sparse
//! interpolation**: given black-box (evaluation) access to an unknown
//! polynomial known to have at most `T` nonzero terms, degree at most
//! `D`, and coefficient magnitude at most `H`, recover it in work
//! roughly proportional to `T` rather than `D`.
//!
//! ## Module map
//!
//! - [`poly`] — the sparse polynomial container, [`poly::SpPoly`] (C1).
//! - [`primes`] — builds the bases both interpolation engines sample
//!   against: a big-prime root-of-unity basis and a small-primes CRT
//!   slot table (C2).
//! - [`field`] — dense polynomial arithmetic over `Z/qZ`, including
//!   the subproduct-tree transposed Vandermonde solver (C3) and
//!   Berlekamp–Massey minimal-polynomial recovery (C5).
//! - [`roots`] — the power-of-generator root finder (C4).
//! - [`bp_interp`] — the big-prime (BP) interpolation engine (C6).
//! - [`sp_interp`] — the small-primes (SP) interpolation engine (C7).
//! - [`sumset`] — the sumset estimator used by `mul_os` (C8).
//! - [`mul_os`] — output-sensitive sparse multiplication (C9).
//! - [`support`] — `rem_cyc`/evaluate/Kronecker helpers and the random
//!   test-polynomial generators (C10).
//! - [`numutil`] — arbitrary-precision primality/CRT helpers standing
//!   in for the parts of the "integer library" contract `num-bigint`
//!   does not ship directly.
//! - [`error`] — the crate-wide [`error::SpolyError`]/[`error::SpolyResult`].
//!
//! ## Example
//!
//! ```
//! use num_bigint::BigInt;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use spoly::poly::SpPoly;
//! use spoly::{bp_interp, primes};
//!
//! let p = SpPoly::from_terms(vec![
//!     (BigInt::from(1), BigInt::from(2)),
//!     (BigInt::from(1), BigInt::from(1)),
//!     (BigInt::from(1), BigInt::from(0)),
//! ]);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(0);
//! let basis = primes::bp_basis_params(3, &num_bigint::BigUint::from(2u32), &num_bigint::BigUint::from(1u32), false, &mut rng);
//! let eval = bp_interp::bp_eval(&basis, &p);
//! let recovered = bp_interp::bp_interp(&basis, &eval).unwrap();
//! assert_eq!(recovered, p);
//! ```

pub mod bp_interp;
pub mod error;
pub mod field;
pub mod mul_os;
pub mod numutil;
pub mod poly;
pub mod primes;
pub mod roots;
pub mod sp_interp;
pub mod sumset;
pub mod support;

pub use error::{SpolyError, SpolyResult};
pub use mul_os::mul_os;
pub use poly::SpPoly;
pub use sumset::sumset;
