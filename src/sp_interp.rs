//! Small-primes (SP) interpolation engine (C7).
//!
//! Evaluates a sparse polynomial into many small-prime modular images
//! organized into rounds and, within a round, exponent groups with a
//! diversified group leader and several plain-coefficient followers;
//! recovers the polynomial round by round via "dominant coefficient"
//! matching and two-level CRT. Grounded on `fmpz_spoly/sp_interp.c` and
//! `sp_interp_eval.c`.

use crate::error::{SpolyError, SpolyResult};
use crate::field::element::Zq;
use crate::numutil;
use crate::poly::SpPoly;
use crate::primes::SpBasis;
use crate::support;
use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::BTreeMap;

/// One group's evaluation within a round: the diversified leader image
/// and each follower's plain image, all indexed by exponent mod the
/// group's shared exponent modulus.
#[derive(Clone, Debug)]
pub struct SpGroupEval {
    pub leader: Vec<Zq>,
    pub followers: Vec<Vec<Zq>>,
}

/// One round's evaluation: every group's images.
#[derive(Clone, Debug)]
pub struct SpRoundEval {
    pub groups: Vec<SpGroupEval>,
}

/// The full SP-interpolation evaluation vector.
#[derive(Clone, Debug)]
pub struct SpEval {
    pub rounds: Vec<SpRoundEval>,
}

/// Evaluates `p` against every slot of `basis`.
pub fn sp_eval(basis: &SpBasis, p: &SpPoly) -> SpEval {
    let rounds = basis
        .rounds
        .iter()
        .map(|round| {
            let groups = round
                .groups
                .iter()
                .map(|group| {
                    let leader = support::rem_cyc_mod_diverse(
                        p,
                        &group.exponent_modulus,
                        &round.leader_coeff_modulus,
                        &round.leader_shift,
                    );
                    let followers = group
                        .followers
                        .iter()
                        .map(|f| {
                            support::rem_cyc_mod_diverse(
                                p,
                                &group.exponent_modulus,
                                &f.coeff_modulus,
                                &num_bigint::BigUint::from(1u32),
                            )
                        })
                        .collect();
                    SpGroupEval { leader, followers }
                })
                .collect();
            SpRoundEval { groups }
        })
        .collect();
    SpEval { rounds }
}

/// Recovers the sparse polynomial consistent with `eval`, or
/// [`SpolyError::Incomplete`] if every round runs out without the
/// residual image reaching zero — the caller should retry with a
/// wider basis.
pub fn sp_interp(basis: &SpBasis, eval: &SpEval) -> SpolyResult<SpPoly> {
    if basis.rounds.is_empty() {
        return Ok(SpPoly::zero());
    }

    let mut result = SpPoly::zero();

    for (round_idx, round_plan) in basis.rounds.iter().enumerate() {
        let recovered = sp_eval(basis, &result);
        let residual_round = subtract_round(&eval.rounds[round_idx], &recovered.rounds[round_idx]);

        let round_terms = recover_round(round_plan, &residual_round);
        if !round_terms.is_zero() {
            result = result.scalar_addmul(&BigInt::from(1), &round_terms);
        }

        let check = sp_eval(basis, &result);
        if all_zero(eval, &check) {
            return Ok(result);
        }
    }

    Err(SpolyError::Incomplete)
}

/// Subtracts one round's recovered image from its observed image,
/// element-wise, leader and followers alike.
fn subtract_round(observed: &SpRoundEval, recovered: &SpRoundEval) -> SpRoundEval {
    let groups = observed
        .groups
        .iter()
        .zip(recovered.groups.iter())
        .map(|(o, r)| SpGroupEval {
            leader: subtract_vec(&o.leader, &r.leader),
            followers: o
                .followers
                .iter()
                .zip(r.followers.iter())
                .map(|(of, rf)| subtract_vec(of, rf))
                .collect(),
        })
        .collect();
    SpRoundEval { groups }
}

fn subtract_vec(a: &[Zq], b: &[Zq]) -> Vec<Zq> {
    a.iter().zip(b.iter()).map(|(x, y)| x.clone() - y.clone()).collect()
}

fn all_zero(observed: &SpEval, recovered: &SpEval) -> bool {
    observed
        .rounds
        .iter()
        .zip(recovered.rounds.iter())
        .all(|(o, r)| {
            o.groups.iter().zip(r.groups.iter()).all(|(og, rg)| {
                vecs_equal(&og.leader, &rg.leader)
                    && og
                        .followers
                        .iter()
                        .zip(rg.followers.iter())
                        .all(|(of, rf)| vecs_equal(of, rf))
            })
        })
}

fn vecs_equal(a: &[Zq], b: &[Zq]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// The per-round recovery: gather exponent images from every group's
/// leader and coefficient images from every group's followers, keyed
/// by the leader's (diversified) "dominant coefficient" value, then
/// CRT-combine each key's images once it has accumulated enough of
/// them to trust.
fn recover_round(round: &crate::primes::SpRound, residual: &SpRoundEval) -> SpPoly {
    let mut eimgs: BTreeMap<BigInt, Vec<(BigInt, BigInt)>> = BTreeMap::new();
    let mut cimgs: BTreeMap<BigInt, Vec<(BigInt, BigInt)>> = BTreeMap::new();

    for (group_plan, group_eval) in round.groups.iter().zip(residual.groups.iter()) {
        let em = BigInt::from(group_plan.exponent_modulus.clone());
        for (j, leader_val) in group_eval.leader.iter().enumerate() {
            if leader_val.is_zero() {
                continue;
            }
            let key = leader_val.to_symmetric();
            eimgs.entry(key.clone()).or_default().push((BigInt::from(j as u64), em.clone()));

            for (follower_plan, follower_vals) in group_plan.followers.iter().zip(group_eval.followers.iter()) {
                let cm = BigInt::from(follower_plan.coeff_modulus.clone());
                let residue = BigInt::from(follower_vals[j].value().clone());
                cimgs.entry(key.clone()).or_default().push((residue, cm));
            }
        }
    }

    let mut terms = Vec::new();
    for (key, eimg_list) in eimgs.iter() {
        if eimg_list.len() < round.eimg_needed {
            continue;
        }
        let cimg_list = match cimgs.get(key) {
            Some(l) if l.len() >= round.cimg_needed => l,
            _ => continue,
        };

        let (e, _) = match numutil::crt_fold(eimg_list) {
            Some(r) => r,
            None => continue,
        };
        let (c_raw, c_modulus) = match numutil::crt_fold(cimg_list) {
            Some(r) => r,
            None => continue,
        };
        let c = numutil::to_symmetric(&c_raw, &c_modulus);
        if !c.is_zero() {
            terms.push((c, e));
        }
    }

    SpPoly::from_terms(terms)
}
