use crate::common::defs::*;
use crate::mdps::mdp::Mdp;
use anyhow::{anyhow, Result};
use itertools::zip_eq;

/// Default cap on outer evaluate/improve rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Default cap on value sweeps, for policy evaluation and value iteration.
pub const DEFAULT_MAX_SWEEPS: usize = 1_000;

pub(crate) fn check_gamma(gamma: Continous) -> Result<()> {
    if !(0.0..1.0).contains(&gamma) {
        return Err(anyhow!("Discount factor must be in [0, 1), got {}", gamma));
    }

    Ok(())
}

pub(crate) fn check_sweep_params(theta: Continous, max_iterations: usize) -> Result<()> {
    if !theta.is_finite() || theta <= 0.0 {
        return Err(anyhow!("Tolerance must be positive, got {}", theta));
    }
    if max_iterations == 0 {
        return Err(anyhow!("Iteration cap must be positive"));
    }

    Ok(())
}

/// Expected one-step return of taking `a` in `s` under `v`, accumulated
/// over the full outcome list of `(s, a)`. `None` when the model has no
/// outcome list for the pair.
pub fn q_value(
    transitions: &Transitions,
    v: &[Continous],
    s: Discrete,
    a: Discrete,
    gamma: Continous,
) -> Option<Continous> {
    transitions.get(&(s, a)).map(|ts| {
        ts.iter()
            .map(|t| t.probability * (t.reward + gamma * v[t.next_state as usize]))
            .sum()
    })
}

/// Greedy action for `s` under `v` and its action value. Each action's
/// value is fully accumulated before any comparison; ties go to the lowest
/// action index. Actions without outcomes compete with a zero backup.
pub fn greedy_action(
    transitions: &Transitions,
    v: &[Continous],
    s: Discrete,
    n_a: usize,
    gamma: Continous,
) -> (Discrete, Continous) {
    let mut best = (0, q_value(transitions, v, s, 0, gamma).unwrap_or(0.));
    for a in 1..n_a as Discrete {
        let q = q_value(transitions, v, s, a, gamma).unwrap_or(0.);
        if q > best.1 {
            best = (a, q);
        }
    }

    best
}

pub(crate) fn max_abs_delta(v_new: &[Continous], v_old: &[Continous]) -> Continous {
    zip_eq(v_new, v_old)
        .map(|(n, o)| (n - o).abs())
        .fold(0., Continous::max)
}

/// Iterative policy evaluation. Jacobi sweeps: every backup within a sweep
/// reads only the previous sweep's values, so the sweep is order
/// independent. Stops when the max per-state change drops below `theta` or
/// after `max_sweeps` sweeps; hitting the cap still returns the latest
/// estimate.
pub fn policy_evaluation(
    mdp: &dyn Mdp,
    policy: &[Discrete],
    gamma: Continous,
    max_sweeps: usize,
    theta: Continous,
) -> Result<Vec<Continous>> {
    check_gamma(gamma)?;
    check_sweep_params(theta, max_sweeps)?;
    if policy.len() != mdp.n_s() {
        return Err(anyhow!(
            "Policy has {} entries for {} states",
            policy.len(),
            mdp.n_s()
        ));
    }

    let transitions = mdp.transitions();
    let mut v = vec![0.; mdp.n_s()];
    for _ in 0..max_sweeps {
        let v_new = (0..mdp.n_s())
            .map(|s| q_value(&transitions, &v, s as Discrete, policy[s], gamma).unwrap_or(0.))
            .collect::<Vec<_>>();
        let delta = max_abs_delta(&v_new, &v);
        v = v_new;
        if delta < theta {
            break;
        }
    }

    Ok(v)
}

/// Greedy policy for `v`. A pure function of its inputs.
pub fn policy_improvement(
    mdp: &dyn Mdp,
    v: &[Continous],
    gamma: Continous,
) -> Result<Vec<Discrete>> {
    check_gamma(gamma)?;
    if v.len() != mdp.n_s() {
        return Err(anyhow!(
            "Value function has {} entries for {} states",
            v.len(),
            mdp.n_s()
        ));
    }

    let transitions = mdp.transitions();
    Ok((0..mdp.n_s())
        .map(|s| greedy_action(&transitions, v, s as Discrete, mdp.n_a(), gamma).0)
        .collect())
}
