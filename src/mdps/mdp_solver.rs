use crate::common::defs::*;
use anyhow::Result;

/// Uniform surface of the dynamic-programming solvers. `exec` runs the
/// solver to convergence or to its iteration cap; the accessors read the
/// results of the last run.
pub trait MdpSolver<T> {
    fn v_star(&self, s: Discrete) -> Continous;

    /// `None` when the model has no outcome list for `(s, a)`.
    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous>;

    /// `None` for a state outside the model.
    fn pi_star(&self, s: Discrete) -> Option<Discrete>;

    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> Result<(T, usize)>;
}
