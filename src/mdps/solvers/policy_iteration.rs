use super::common::*;
use crate::common::defs::*;
use crate::mdps::{mdp::Mdp, mdp_solver::MdpSolver};
use anyhow::Result;
use std::rc::Rc;

/// Howard's policy iteration: evaluate the current policy to tolerance,
/// improve it greedily, stop when the policy array reproduces itself.
/// Every run starts from the all-zero policy.
#[derive(Clone)]
pub struct PolicyIteration {
    mdp: Rc<dyn Mdp>,
    gamma: Continous,
    v: Vec<Continous>,
    pi: Vec<Discrete>,
}

impl PolicyIteration {
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

impl MdpSolver<bool> for PolicyIteration {
    fn v_star(&self, s: Discrete) -> Continous {
        self.v[s as usize]
    }

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        q_value(&self.mdp.transitions(), &self.v, s, a, self.gamma)
    }

    fn pi_star(&self, s: Discrete) -> Option<Discrete> {
        self.pi.get(s as usize).copied()
    }

    /// Runs up to `num_iterations` evaluate/improve rounds (default
    /// [`DEFAULT_MAX_ITERATIONS`]); `theta` is the tolerance of the inner
    /// evaluation sweeps. Returns whether the policy reached a fixed point
    /// and the number of rounds used.
    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> Result<(bool, usize)> {
        let max_rounds = num_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        check_sweep_params(theta, max_rounds)?;

        self.pi = vec![0; self.mdp.n_s()];
        let mut stable = false;
        let mut rounds = 0;
        while rounds < max_rounds && !stable {
            rounds += 1;
            self.v = policy_evaluation(
                self.mdp.as_ref(),
                &self.pi,
                self.gamma,
                DEFAULT_MAX_SWEEPS,
                theta,
            )?;
            let improved = policy_improvement(self.mdp.as_ref(), &self.v, self.gamma)?;
            if improved == self.pi {
                stable = true;
            } else {
                self.pi = improved;
            }
        }

        if !stable {
            // The cap cut the loop right after an improvement; the stored
            // values still describe the policy before it.
            self.v = policy_evaluation(
                self.mdp.as_ref(),
                &self.pi,
                self.gamma,
                DEFAULT_MAX_SWEEPS,
                theta,
            )?;
        }

        Ok((stable, rounds))
    }
}
