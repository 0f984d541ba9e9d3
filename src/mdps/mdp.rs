use crate::common::defs::*;
use anyhow::{anyhow, Result};
use std::rc::Rc;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// The discount factor is not part of the model; every solver call supplies
/// its own.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    fn transitions(&self) -> Rc<Transitions>;
}

/// An MDP owned directly as a transition table, for callers that construct
/// their dynamics in memory rather than adapting an environment.
pub struct TabularMdp {
    n_s: usize,
    n_a: usize,
    transitions: Rc<Transitions>,
}

impl TabularMdp {
    /// Fails on non-positive state/action counts and on any state or action
    /// index outside them. Outcome probabilities are not checked.
    pub fn new(n_s: usize, n_a: usize, transitions: Transitions) -> Result<Self> {
        if n_s == 0 || n_a == 0 {
            return Err(anyhow!(
                "Model must have at least one state and one action, got {}x{}",
                n_s,
                n_a
            ));
        }
        for (&(s, a), ts) in transitions.iter() {
            if s < 0 || s as usize >= n_s || a < 0 || a as usize >= n_a {
                return Err(anyhow!(
                    "Transition key ({}, {}) is outside the {}x{} model",
                    s,
                    a,
                    n_s,
                    n_a
                ));
            }
            for t in ts {
                if t.next_state < 0 || t.next_state as usize >= n_s {
                    return Err(anyhow!(
                        "Next state {} under ({}, {}) is out of range",
                        t.next_state,
                        s,
                        a
                    ));
                }
            }
        }

        Ok(Self {
            n_s,
            n_a,
            transitions: Rc::new(transitions),
        })
    }
}

impl Mdp for TabularMdp {
    fn n_s(&self) -> usize {
        self.n_s
    }

    fn n_a(&self) -> usize {
        self.n_a
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hop(next_state: Discrete) -> Vec<Transition> {
        vec![Transition {
            next_state,
            probability: 1.,
            reward: 0.,
            done: false,
        }]
    }

    #[test]
    fn accepts_well_formed_model() {
        let m = TabularMdp::new(2, 1, Transitions::from([((0, 0), hop(1)), ((1, 0), hop(1))]))
            .unwrap();

        assert_eq!(m.n_s(), 2);
        assert_eq!(m.n_a(), 1);
        assert_eq!(m.transitions().len(), 2);
    }

    #[test]
    fn rejects_empty_state_or_action_space() {
        assert!(TabularMdp::new(0, 1, Transitions::new()).is_err());
        assert!(TabularMdp::new(1, 0, Transitions::new()).is_err());
    }

    #[test]
    fn rejects_out_of_range_indices() {
        assert!(TabularMdp::new(2, 1, Transitions::from([((2, 0), hop(0))])).is_err());
        assert!(TabularMdp::new(2, 1, Transitions::from([((0, 1), hop(0))])).is_err());
        assert!(TabularMdp::new(2, 1, Transitions::from([((0, 0), hop(2))])).is_err());
        assert!(TabularMdp::new(2, 1, Transitions::from([((-1, 0), hop(0))])).is_err());
    }
}
