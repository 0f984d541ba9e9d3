use super::mdp_solver::*;
use crate::common::defs::*;
use std::rc::Rc;

/// Action selection as seen by the rollout loop driving an environment.
pub trait Policy {
    fn policy(&self, s: &Discrete) -> Discrete;
}

pub struct MdpSolverPolicy<T> {
    pub mdp_solver: Rc<dyn MdpSolver<T>>,
}

impl<T> Policy for MdpSolverPolicy<T> {
    fn policy(&self, s: &Discrete) -> Discrete {
        self.mdp_solver.pi_star(*s).unwrap()
    }
}
