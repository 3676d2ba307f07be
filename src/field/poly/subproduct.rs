//! Subproduct trees and the transposed Vandermonde system solver (C3).
//!
//! Grounded on `fmpz_spoly/transp_vandermonde.c`: a balanced binary
//! tree of monic linear factors supports both fast multipoint
//! evaluation and the transposed Vandermonde solve/inverse-solve pair
//! that the BP interpolation engine (C6) uses to recover coefficients
//! once exponents (as discrete logs of roots) are known.

use super::PolyZq;
use crate::field::element::Zq;
use num_bigint::BigUint;

/// Below this many points, direct evaluation/solving beats building a
/// subproduct tree. Mirrors FLINT's `TVAND_XOVER`.
const TVAND_XOVER: usize = 20;

/// A balanced binary tree whose leaves are `(x - v_i)` for the given
/// points and whose internal nodes are the product of their children.
pub struct SubproductTree {
    /// `levels[0]` holds the leaves; `levels.last()` holds the root
    /// (a single polynomial of degree equal to the number of points).
    levels: Vec<Vec<PolyZq>>,
    modulus: BigUint,
}

impl SubproductTree {
    /// Builds the tree over `points`. `points` must be nonempty.
    pub fn build(points: &[Zq], modulus: BigUint) -> Self {
        let mut level: Vec<PolyZq> = points.iter().map(PolyZq::x_minus_a).collect();
        let mut levels = vec![level.clone()];
        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);
            let mut it = level.chunks(2);
            while let Some(pair) = it.next() {
                if pair.len() == 2 {
                    next.push(pair[0].mul(&pair[1]));
                } else {
                    next.push(pair[0].clone());
                }
            }
            levels.push(next.clone());
            level = next;
        }
        SubproductTree { levels, modulus }
    }

    /// The product of all linear factors, i.e. the tree's root.
    pub fn root(&self) -> &PolyZq {
        &self.levels.last().expect("tree has at least one level")[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }
}

/// Forward transposed Vandermonde map: given `len` points (implicitly,
/// via a prebuilt subproduct tree over their inverses, following the
/// discrete-log/root-of-unity convention C6 uses) and `b` values at
/// `coeffs.len()` of them, returns the length-`len` vector that is the
/// transpose of the Vandermonde matrix applied to `coeffs`.
///
/// Concretely (matching `_fmpz_spoly_transp_vandermonde`): for each
/// output index `i`, `res[i] = Σ_j coeffs[j] * points[j]^i`.
pub fn transp_vandermonde(points: &[Zq], coeffs: &[Zq], len: usize, modulus: &BigUint) -> Vec<Zq> {
    if len == 0 || coeffs.is_empty() {
        return vec![Zq::zero(modulus.clone()); len];
    }

    if coeffs.len() < TVAND_XOVER {
        // Naive O(len * |coeffs|): accumulate powers directly.
        let mut res = vec![Zq::zero(modulus.clone()); len];
        for (c, v) in coeffs.iter().zip(points.iter()) {
            let mut pw = Zq::one(modulus.clone());
            for slot in res.iter_mut() {
                *slot = slot.clone() + c.clone() * pw.clone();
                pw = pw * v.clone();
            }
        }
        return res;
    }

    // Tree-based approach: build the numerator N(x) = Σ_j coeffs[j] *
    // Π_{k != j} (x - points[k]), via the bottom-up cross-product used
    // for fast multipoint interpolation, then divide by the tree root
    // truncated to `len` terms (power-series division), which yields
    // the coefficients of the generating function Σ points[j]^i x^i.
    let inv_points: Vec<Zq> = points
        .iter()
        .map(|p| p.inverse().unwrap_or_else(|_| Zq::zero(modulus.clone())))
        .collect();
    let tree = SubproductTree::build(&inv_points, modulus.clone());
    let numerator = build_numerator(&tree, coeffs, modulus);
    let root_rev = tree.root().reverse(tree.root().coefficients().len() + 1);
    let num_rev = numerator.reverse(numerator.coefficients().len().max(1));
    let quotient = power_series_div(&num_rev, &root_rev, len, modulus);
    (0..len).map(|i| quotient.coeff(i)).collect()
}

/// Builds the numerator polynomial used by the tree-based transposed
/// Vandermonde map, bottom-up: `A[2j] * tree[2j+1] + A[2j+1] * tree[2j]`
/// combined level by level, starting from the constant coefficients at
/// the leaves.
fn build_numerator(tree: &SubproductTree, coeffs: &[Zq], modulus: &BigUint) -> PolyZq {
    let leaf_count = tree.leaf_count();
    let mut a: Vec<PolyZq> = (0..leaf_count)
        .map(|i| {
            if i < coeffs.len() {
                PolyZq::constant(coeffs[i].clone())
            } else {
                PolyZq::zero(modulus.clone())
            }
        })
        .collect();

    for level in &tree.levels[..tree.levels.len() - 1] {
        let mut next = Vec::with_capacity((a.len() + 1) / 2);
        let mut i = 0;
        while i < a.len() {
            if i + 1 < a.len() {
                let combined = a[i].mul(&level[i + 1]).add(&a[i + 1].mul(&level[i]));
                next.push(combined);
                i += 2;
            } else {
                next.push(a[i].clone());
                i += 1;
            }
        }
        a = next;
    }
    a.into_iter().next().unwrap_or_else(|| PolyZq::zero(modulus.clone()))
}

/// Power series division `num / den` truncated to `terms` coefficients,
/// computed via Newton-iteration-free direct coefficient recovery
/// (adequate here since `den`'s constant term is always a unit: it is
/// the reversed tree root, whose constant term is the product of the
/// leading coefficients of the linear factors, all `1`).
fn power_series_div(num: &PolyZq, den: &PolyZq, terms: usize, modulus: &BigUint) -> PolyZq {
    let den_inv_const = den
        .coeff(0)
        .inverse()
        .expect("den constant term is a unit by construction");
    let mut out = vec![num_bigint::BigUint::from(0u32); terms];
    for i in 0..terms {
        let mut acc = num.coeff(i);
        for j in 0..i {
            let out_j = Zq::new(out[j].clone(), modulus.clone());
            acc = acc - den.coeff(i - j) * out_j;
        }
        let q_i = acc * den_inv_const.clone();
        out[i] = q_i.value().clone();
    }
    PolyZq::from_coeffs(out, modulus.clone())
}

/// Inverse transposed Vandermonde map: given `L = points.len()`
/// pairwise-distinct points and a length-`L` residue vector `b`,
/// recovers the length-`L` coefficient vector `x` such that `b_j =
/// Σ_i x_i * points[i]^j` for `j = 0..L`, i.e. the `x` that
/// [`transp_vandermonde`] would reproduce `b` from.
///
/// Grounded on `fmpz_mod_poly/transp_vandermonde_inv.c`'s five-step
/// contract:
///
/// 1. Build the subproduct tree over `points`; its root is `R(x) =
///    Π_i (x - points[i])`.
/// 2. Multiply `R(x)` by `rev(b)` (the degree-`(L-1)` reversal of `b`)
///    and discard the first `L` coefficients — what remains is
///    `Q(x)`, of degree `< L`.
/// 3. Evaluate `Q` at every point.
/// 4. Evaluate `R'(x)` (the formal derivative of the tree root) at
///    every point.
/// 5. `x_i = Q(points[i]) / R'(points[i])`.
///
/// This is the partial-fraction residue identity for the generating
/// function `Σ_i x_i / (1 - points[i] t)`, whose power series is
/// exactly `Σ_j b_j t^j`. Evaluation here is done point-by-point
/// rather than via the tree's batch multipoint-evaluation path (the
/// asymptotic win the tree buys in forward mode); correctness does not
/// depend on which evaluation strategy is used.
pub fn transp_vandermonde_inv(points: &[Zq], b: &[Zq], modulus: &BigUint) -> Vec<Zq> {
    let len = points.len();
    if len == 0 {
        return Vec::new();
    }
    debug_assert_eq!(b.len(), len, "b must have one residue per point");

    let tree = SubproductTree::build(points, modulus.clone());
    let root = tree.root();

    let rev_b = PolyZq::from_coeffs(
        b.iter().rev().map(|v| v.value().clone()).collect(),
        modulus.clone(),
    );
    let product = root.mul(&rev_b);
    let q_coeffs: Vec<BigUint> = (len..product.coefficients().len())
        .map(|i| product.coeff(i).value().clone())
        .collect();
    let q = PolyZq::from_coeffs(q_coeffs, modulus.clone());

    let root_deriv = formal_derivative(root, modulus);

    points
        .iter()
        .map(|v| {
            let numerator = q.evaluate(v);
            let denominator = root_deriv.evaluate(v);
            numerator
                * denominator
                    .inverse()
                    .expect("points are pairwise distinct, so R'(v_i) != 0")
        })
        .collect()
}

/// Formal derivative of a polynomial over `Z/qZ`.
fn formal_derivative(p: &PolyZq, modulus: &BigUint) -> PolyZq {
    if p.degree().unwrap_or(0) == 0 {
        return PolyZq::zero(modulus.clone());
    }
    let mut out = Vec::with_capacity(p.coefficients().len().saturating_sub(1));
    for (i, c) in p.coefficients().iter().enumerate().skip(1) {
        let scaled = Zq::new(c.clone(), modulus.clone()) * Zq::new(BigUint::from(i as u64), modulus.clone());
        out.push(scaled.value().clone());
    }
    PolyZq::from_coeffs(out, modulus.clone())
}
