use super::common::*;
use crate::common::defs::*;
use crate::mdps::{mdp::Mdp, mdp_solver::MdpSolver};
use anyhow::Result;
use std::rc::Rc;

/// Value iteration: synchronous sweeps of the Bellman optimality operator,
/// recording the greedy action next to each backup. The policy is a
/// byproduct of the final sweep rather than a separate improvement step.
#[derive(Clone)]
pub struct ValueIteration {
    mdp: Rc<dyn Mdp>,
    gamma: Continous,
    v: Vec<Continous>,
    pi: Vec<Discrete>,
}

impl ValueIteration {
    pub fn new(mdp: Rc<dyn Mdp>, gamma: Continous) -> Result<Self> {
        check_gamma(gamma)?;

        let n_s = mdp.n_s();
        Ok(Self {
            mdp,
            gamma,
            v: vec![0.; n_s],
            pi: vec![0; n_s],
        })
    }
}

impl MdpSolver<Continous> for ValueIteration {
    fn v_star(&self, s: Discrete) -> Continous {
        self.v[s as usize]
    }

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        q_value(&self.mdp.transitions(), &self.v, s, a, self.gamma)
    }

    fn pi_star(&self, s: Discrete) -> Option<Discrete> {
        self.pi.get(s as usize).copied()
    }

    /// Runs up to `num_iterations` sweeps (default [`DEFAULT_MAX_SWEEPS`]),
    /// stopping once the max per-state change drops below `theta`. Returns
    /// the change achieved by the last sweep and the number of sweeps used.
    fn exec(
        &mut self,
        theta: Continous,
        num_iterations: Option<usize>,
    ) -> Result<(Continous, usize)> {
        let max_sweeps = num_iterations.unwrap_or(DEFAULT_MAX_SWEEPS);
        check_sweep_params(theta, max_sweeps)?;

        let n_s = self.mdp.n_s();
        let n_a = self.mdp.n_a();
        let transitions = self.mdp.transitions();
        self.v = vec![0.; n_s];
        self.pi = vec![0; n_s];

        let mut delta = Continous::INFINITY;
        let mut sweeps = 0;
        while sweeps < max_sweeps && delta >= theta {
            sweeps += 1;
            let mut v_new = Vec::with_capacity(n_s);
            let mut pi_new = Vec::with_capacity(n_s);
            for s in 0..n_s {
                let (a, q) = greedy_action(&transitions, &self.v, s as Discrete, n_a, self.gamma);
                v_new.push(q);
                pi_new.push(a);
            }
            delta = max_abs_delta(&v_new, &self.v);
            self.v = v_new;
            self.pi = pi_new;
        }

        Ok((delta, sweeps))
    }
}
