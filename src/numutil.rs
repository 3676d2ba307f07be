//! Arbitrary-precision number theory helpers standing in for the parts
//! of the "integer library" contract this crate needs but `num-bigint`
//! does not ship directly: primality testing, random prime search, and
//! two-modulus CRT.
//!
//! The primality test here generalizes the teacher's `u64` trial
//! division check (documented there as "not cryptographic, for debug
//! assertions only") to a Miller–Rabin test over `BigUint`, since the
//! primes this crate searches for can be far larger than a `u64`.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Small trial-division primes used to reject obvious composites
/// before paying for a Miller–Rabin round.
const SMALL_PRIMES: &[u64] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Miller–Rabin primality test with `rounds` random witnesses.
///
/// Returns `true` if `n` is probably prime; false positives occur with
/// probability at most `4^-rounds`.
pub fn is_probable_prime(n: &BigUint, rounds: u32, rng: &mut impl Rng) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }
    for &p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // n - 1 = 2^s * d, d odd
    let n_minus_1 = n - BigUint::one();
    let mut d = n_minus_1.clone();
    let mut s = 0u32;
    while (&d).is_even() {
        d >>= 1;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&BigUint::from(2u32), &(n - BigUint::from(2u32)));
        let mut x = a.modpow(&d, n);
        if x == BigUint::one() || x == n_minus_1 {
            continue;
        }
        for _ in 0..s.saturating_sub(1) {
            x = x.modpow(&BigUint::from(2u32), n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Searches upward from `start` (inclusive) in steps of `step` for a
/// probable prime, as `bp_interp_basis_init.c` does when it walks
/// `q = order*m + 1` looking for a prime `q`.
pub fn next_prime_step(
    start: &BigUint,
    step: &BigUint,
    rounds: u32,
    rng: &mut impl Rng,
) -> BigUint {
    let mut candidate = start.clone();
    loop {
        if is_probable_prime(&candidate, rounds, rng) {
            return candidate;
        }
        candidate += step;
    }
}

/// Random probable prime with exactly `bits` bits set in its binary
/// representation (top bit forced to 1).
pub fn random_prime_bits(bits: u64, rounds: u32, rng: &mut impl Rng) -> BigUint {
    loop {
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, rounds, rng) {
            return candidate;
        }
    }
}

/// Extended Euclidean algorithm over signed big integers, returning
/// `(gcd, x, y)` with `a*x + b*y = gcd`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x1, y1) = extended_gcd(b, &(a % b));
        let y = x1 - (a / b) * &y1;
        (g, y1, y)
    }
}

/// Modular inverse of `a` modulo `m`, or `None` if `gcd(a, m) != 1`.
pub fn invmod(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = extended_gcd(a, m);
    if g != BigInt::one() && g != -BigInt::one() {
        return None;
    }
    let mut inv = (&x % m + m) % m;
    if g == -BigInt::one() {
        inv = (m - inv) % m;
    }
    Some(inv)
}

/// Two-modulus Chinese Remainder Theorem: given `x ≡ r1 (mod m1)` and
/// `x ≡ r2 (mod m2)` with `gcd(m1, m2) = 1`, returns the unique `x` in
/// `[0, m1*m2)`.
///
/// Used by the SP interpolation engine to recover a single exponent or
/// coefficient from its residues across several small-prime slots,
/// in place of FLINT's internal `fmpz_comb` machinery (a bignum-layer
/// performance detail this crate does not reproduce).
pub fn crt2(r1: &BigInt, m1: &BigInt, r2: &BigInt, m2: &BigInt) -> Option<BigInt> {
    let (g, u, v) = extended_gcd(m1, m2);
    if g != BigInt::one() && g != -BigInt::one() {
        return None;
    }
    let m = m1 * m2;
    let x = (r1 * m2 * v + r2 * m1 * u) % &m;
    Some((x + &m) % &m)
}

/// Folds a sequence of `(residue, modulus)` pairs with pairwise coprime
/// moduli into a single `(value, product_of_moduli)` via repeated
/// two-modulus CRT.
pub fn crt_fold(pairs: &[(BigInt, BigInt)]) -> Option<(BigInt, BigInt)> {
    let mut iter = pairs.iter();
    let (r0, m0) = iter.next()?;
    let mut acc_r = r0.clone();
    let mut acc_m = m0.clone();
    for (r, m) in iter {
        acc_r = crt2(&acc_r, &acc_m, r, m)?;
        acc_m *= m;
    }
    Some((acc_r, acc_m))
}

/// Reduces `x` into the symmetric range `(-m/2, m/2]`, the convention
/// this crate uses whenever a CRT-recovered coefficient needs a sign.
pub fn to_symmetric(x: &BigInt, m: &BigInt) -> BigInt {
    let r = ((x % m) + m) % m;
    if &r * 2 > *m {
        r - m
    } else {
        r
    }
}
