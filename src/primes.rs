//! Prime-and-root generator (C2): building the BP-interpolation basis
//! `(q, k, ω)`, the SP-interpolation slot table, and the multi-prime
//! `(p, qᵢ, ωᵢ)` bundles `prim_roots` produces for general-purpose
//! random sparse-interpolation test generation.

use crate::field::element::Zq;
use crate::numutil;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;

/// Number of Miller–Rabin rounds used for every primality check in
/// this module. 40 rounds gives a false-positive probability below
/// `4^-40`, comfortably beyond what any reasonable caller needs.
const MR_ROUNDS: u32 = 40;

/// A big-prime interpolation basis: an order-`2^k` primitive root `ω`
/// modulo an odd prime `q`, together with the number of sample points
/// `L = 2*terms` that will be evaluated.
#[derive(Clone, Debug)]
pub struct BpBasis {
    pub q: BigUint,
    pub k: u32,
    pub omega: Zq,
    pub num_points: usize,
}

/// Builds a BP-interpolation basis for a polynomial with at most
/// `terms` nonzero terms, degree at most `degree`, and coefficient
/// height at most `height`.
///
/// Grounded on `fmpz_spoly/bp_interp_basis_init.c`: `order = 2^k` is
/// chosen large enough for two independent reasons — the root finder
/// (C4) needs every possible exponent `0..=degree` to be recoverable
/// as a discrete log mod `order` (so `order` must exceed `degree`,
/// with the spec's stated margin `2^k >= 2^{bits(degree)+1}`, doubled
/// again when `laurent` shifts negative exponents into the positive
/// half of the residues), and Berlekamp–Massey needs `2*terms`
/// pairwise-distinct consecutive powers of `ω` as sample points (so
/// `order` must also be at least `2*terms`). `k` is the max of the two
/// requirements. Having picked `k`, search upward from the smallest
/// multiple of `order` exceeding `2*height` for a prime `q ≡ 1 (mod
/// order)`; find a primitive `order`-th root of unity by repeated
/// random sampling.
pub fn bp_basis_params(
    terms: usize,
    degree: &BigUint,
    height: &BigUint,
    laurent: bool,
    rng: &mut impl Rng,
) -> BpBasis {
    let terms = terms.max(1);
    let k_points = (2 * terms).next_power_of_two().trailing_zeros().max(1);
    let d_bits = degree.bits().max(1) as u32;
    let k_degree = d_bits + 1 + if laurent { 1 } else { 0 };
    let k = k_points.max(k_degree);
    let order = BigUint::one() << k;

    let two_h = height * BigUint::from(2u32);
    let mut m = two_h.div_ceil(&order);
    if m.is_zero() {
        m = BigUint::one();
    }
    let start = &m * &order + BigUint::one();
    let q = numutil::next_prime_step(&start, &order, MR_ROUNDS, rng);

    let exponent = (&q - BigUint::one()) / &order;
    let omega = loop {
        let candidate = rng.gen_range(2u64..u32::MAX as u64);
        let w = Zq::new(BigUint::from(candidate), q.clone()).pow(&exponent);
        if w.has_order_exactly(&order) {
            break w;
        }
    };

    BpBasis {
        q,
        k,
        omega,
        num_points: 2 * terms,
    }
}

/// One follower slot within an [`SpGroup`]: a coefficient modulus the
/// group's shared exponent positions are additionally reduced into.
/// Followers never diversify (their implicit shift is `1`).
#[derive(Clone, Debug)]
pub struct SpFollower {
    pub coeff_modulus: BigUint,
}

/// One exponent group within a round: a shared exponent modulus (every
/// leader and follower in the group buckets exponents the same way)
/// plus the group's followers.
#[derive(Clone, Debug)]
pub struct SpGroup {
    pub exponent_modulus: BigUint,
    pub followers: Vec<SpFollower>,
}

/// One round of the SP-interpolation basis: several exponent groups
/// sharing a single diversified leader coefficient modulus and shift
/// (so that the leader's "dominant coefficient" signature at a given
/// real exponent is the same integer no matter which group reports
/// it, letting the interpolation engine join candidates across
/// groups), plus the multiplicities required before a candidate
/// exponent or coefficient is trusted.
#[derive(Clone, Debug)]
pub struct SpRound {
    pub groups: Vec<SpGroup>,
    pub leader_coeff_modulus: BigUint,
    pub leader_shift: BigUint,
    pub eimg_needed: usize,
    pub cimg_needed: usize,
}

/// The full SP-interpolation basis: a sequence of rounds, each run
/// (and its residual checked) in order until the polynomial is fully
/// recovered.
#[derive(Clone, Debug)]
pub struct SpBasis {
    pub rounds: Vec<SpRound>,
}

/// Builds an SP-interpolation basis for a polynomial with at most
/// `terms` nonzero terms, coefficient height at most `height`, and
/// degree at most `degree`.
///
/// Grounded on `fmpz_spoly/sp_interp_basis_init.c`'s three regimes:
/// trivial (no terms or zero height), dense (degree small enough that
/// plain dense interpolation beats the sparse machinery), and general
/// (the round/group-leader/follower slot layout this function builds).
/// Within a round, every group's leader shares one coefficient modulus
/// and diversification shift — a deliberate simplification recorded in
/// `DESIGN.md` that keeps the "dominant coefficient" join key directly
/// comparable across groups, rather than reproducing FLINT's
/// per-group leader moduli verbatim.
pub fn sp_basis_params(terms: usize, height: &BigUint, degree: &BigUint, rng: &mut impl Rng) -> SpBasis {
    if terms == 0 || height.is_zero() {
        return SpBasis { rounds: Vec::new() };
    }

    let t_bits = bit_count(terms as u64).max(1) as u64;
    let d_bits = degree.bits().max(1);
    let h_bits = height.bits().max(1);
    const CPBITS: u64 = 62; // one below machine-word width, as FLINT's COEFF_PBITS.

    let (num_rounds, groups_per, coeffs_per, exp_pbits, eimg_needed, cimg_needed);
    if d_bits <= t_bits + 2 {
        // Dense regime: a single round, one group, spans the whole
        // degree range; one follower is enough since there is no
        // cross-group collision risk to guard against.
        num_rounds = 1usize;
        groups_per = 1usize;
        coeffs_per = 1 + div_ceil(h_bits, CPBITS - 1);
        exp_pbits = (d_bits + 8).max(16);
        eimg_needed = 1usize;
        cimg_needed = 1usize;
    } else {
        num_rounds = bit_count(t_bits + 11).max(1) as usize;
        exp_pbits = (t_bits + 2).max(16);
        groups_per = (1 + div_ceil(2 * d_bits, exp_pbits - 1)) as usize;
        coeffs_per = 1 + div_ceil(2 * h_bits + 1, CPBITS - 1);
        eimg_needed = (1 + div_ceil(d_bits.saturating_sub(1), exp_pbits - 1)).max(1) as usize;
        cimg_needed = (1 + div_ceil(h_bits, CPBITS - 1)) as usize;
    }

    let mut rounds = Vec::with_capacity(num_rounds);
    for _ in 0..num_rounds {
        let leader_coeff_modulus = numutil::random_prime_bits(CPBITS.min(48), MR_ROUNDS, rng);
        let max_shift = (&leader_coeff_modulus - BigUint::from(2u32)).max(BigUint::from(2u32));
        let leader_shift = rng.gen_biguint_below(&max_shift) + BigUint::from(2u32);

        let mut groups = Vec::with_capacity(groups_per);
        for _ in 0..groups_per.max(1) {
            let exponent_modulus = numutil::random_prime_bits(exp_pbits, MR_ROUNDS, rng);
            let mut followers = Vec::with_capacity(coeffs_per.saturating_sub(1).max(1));
            for _ in 0..coeffs_per.max(1) {
                let coeff_modulus = numutil::random_prime_bits(CPBITS.min(48), MR_ROUNDS, rng);
                followers.push(SpFollower { coeff_modulus });
            }
            groups.push(SpGroup {
                exponent_modulus,
                followers,
            });
        }

        rounds.push(SpRound {
            groups,
            leader_coeff_modulus,
            leader_shift,
            eimg_needed,
            cimg_needed,
        });
    }

    SpBasis { rounds }
}

fn div_ceil(a: u64, b: u64) -> u64 {
    let b = b.max(1);
    (a + b - 1) / b
}

/// Builds `len` (or fewer, if the target bit-length requires more than
/// `len` primes) `(q, ω)` pairs sharing a single random prime exponent
/// `p`, i.e. `p | q - 1` and `ω` has multiplicative order `p` modulo
/// each `q`.
///
/// Grounded on `fmpz_sparse/prim_roots.c`. Returns `None` if `len` is
/// too small to reach `q_prod_bits` total bits across the primes `q`.
pub fn prim_roots(
    len: usize,
    p_bits: u64,
    q_prod_bits: u64,
    rng: &mut impl Rng,
) -> Option<(BigUint, Vec<(BigUint, Zq)>)> {
    let p = numutil::random_prime_bits(p_bits, MR_ROUNDS, rng);
    let mut result = Vec::with_capacity(len);
    let mut q_prod = BigUint::one();
    let mut a = BigUint::zero();
    let mut q = BigUint::one();

    while result.len() < len && q_prod.bits() < q_prod_bits {
        q += &p * BigUint::from(2u32);
        a += BigUint::from(2u32);

        if numutil::is_probable_prime(&q, MR_ROUNDS, rng) {
            let w = loop {
                let r = rng.gen_biguint_below(&q);
                let cand = r.modpow(&a, &q);
                if cand > BigUint::one() {
                    break cand;
                }
            };
            q_prod *= &q;
            result.push((q.clone(), Zq::new(w, q.clone())));
        }
    }

    if q_prod.bits() >= q_prod_bits {
        Some((p, result))
    } else {
        None
    }
}

fn bit_count(mut n: u64) -> u32 {
    if n == 0 {
        return 0;
    }
    let mut bits = 0;
    while n > 0 {
        bits += 1;
        n >>= 1;
    }
    bits
}

use rand::prelude::Rng as _;
trait RandExt {
    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint;
}
impl<R: Rng + ?Sized> RandExt for R {
    fn gen_biguint_below(&mut self, bound: &BigUint) -> BigUint {
        use num_bigint::RandBigInt;
        self.gen_biguint_range(&BigUint::zero(), bound)
    }
}
