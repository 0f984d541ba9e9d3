#[cfg(test)]
use crate::common::defs::*;
#[cfg(test)]
use crate::mdps::mdp::Mdp;
#[cfg(test)]
use std::rc::Rc;

/// Three-state golf hole: drive from the fairway to the green, putt into
/// the hole for 10, with a 10% chance of duffing any shot. Laying up from
/// the green is possible but pointless.
/// https://towardsdatascience.com/reinforcement-learning-an-easy-introduction-to-value-iteration-e4cfe0731fd5
#[cfg(test)]
pub struct SimpleGolf {
    transitions: Rc<Transitions>,
}

#[cfg(test)]
impl SimpleGolf {
    pub fn new() -> Self {
        let hit = |next_state, probability, reward, done| Transition {
            next_state,
            probability,
            reward,
            done,
        };
        let transitions = Transitions::from([
            ((0, 0), vec![hit(1, 0.9, 0., false), hit(0, 0.1, 0., false)]),
            ((1, 1), vec![hit(0, 0.9, 0., false), hit(1, 0.1, 0., false)]),
            ((1, 2), vec![hit(2, 0.9, 10., true), hit(1, 0.1, 0., false)]),
        ]);

        Self {
            transitions: Rc::new(transitions),
        }
    }
}

#[cfg(test)]
impl Mdp for SimpleGolf {
    fn n_s(&self) -> usize {
        3
    }

    fn n_a(&self) -> usize {
        3
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}
