#[cfg(test)]
use crate::common::defs::*;
#[cfg(test)]
use crate::mdps::mdp::Mdp;
#[cfg(test)]
use std::rc::Rc;

/// The classic 4x4 lake from gymnasium's FrozenLake-v1, built as an exact
/// transition table. Actions are 0 left, 1 down, 2 right, 3 up; moves into
/// a border stay in place; holes and the goal self-loop with zero reward;
/// reaching the goal pays 1. On slippery ice the intended move happens with
/// probability 1/3, as do the two perpendicular slips.
#[cfg(test)]
pub struct FrozenLake {
    transitions: Rc<Transitions>,
}

#[cfg(test)]
const LAKE_4X4: [&str; 4] = ["SFFF", "FHFH", "FFFH", "HFFG"];

#[cfg(test)]
impl FrozenLake {
    pub fn new(slippery: bool) -> Self {
        let nrow = LAKE_4X4.len();
        let ncol = LAKE_4X4[0].len();
        let tile = |r: usize, c: usize| LAKE_4X4[r].as_bytes()[c];

        let mut transitions = Transitions::new();
        for r in 0..nrow {
            for c in 0..ncol {
                let s = (r * ncol + c) as Discrete;
                for a in 0..4 as Discrete {
                    let ts = if matches!(tile(r, c), b'H' | b'G') {
                        vec![Transition {
                            next_state: s,
                            probability: 1.,
                            reward: 0.,
                            done: true,
                        }]
                    } else {
                        let moves = if slippery {
                            vec![(a + 3) % 4, a, (a + 1) % 4]
                        } else {
                            vec![a]
                        };
                        let probability = 1. / moves.len() as Continous;
                        moves
                            .iter()
                            .map(|&m| {
                                let (nr, nc) = slide(r, c, m, nrow, ncol);
                                Transition {
                                    next_state: (nr * ncol + nc) as Discrete,
                                    probability,
                                    reward: if tile(nr, nc) == b'G' { 1. } else { 0. },
                                    done: matches!(tile(nr, nc), b'H' | b'G'),
                                }
                            })
                            .collect()
                    };
                    transitions.insert((s, a), ts);
                }
            }
        }

        Self {
            transitions: Rc::new(transitions),
        }
    }
}

#[cfg(test)]
fn slide(r: usize, c: usize, a: Discrete, nrow: usize, ncol: usize) -> (usize, usize) {
    match a {
        0 => (r, c.saturating_sub(1)),
        1 => ((r + 1).min(nrow - 1), c),
        2 => (r, (c + 1).min(ncol - 1)),
        _ => (r.saturating_sub(1), c),
    }
}

#[cfg(test)]
impl Mdp for FrozenLake {
    fn n_s(&self) -> usize {
        16
    }

    fn n_a(&self) -> usize {
        4
    }

    fn transitions(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;

    #[test]
    fn covers_every_state_action_pair() {
        assert_eq!(FrozenLake::new(false).transitions().len(), 64);
        assert_eq!(FrozenLake::new(true).transitions().len(), 64);
    }

    #[test]
    fn terminal_tiles_self_loop_for_nothing() {
        let lake = FrozenLake::new(true);
        let transitions = lake.transitions();

        // State 5 is a hole, state 15 the goal.
        for s in [5, 15] {
            for a in 0..4 {
                let ts = &transitions[&(s, a)];
                assert_eq!(ts.len(), 1);
                assert_eq!(ts[0].next_state, s);
                assert_float_eq!(ts[0].reward, 0., abs <= 0.);
                assert!(ts[0].done);
            }
        }
    }

    #[test]
    fn slippery_moves_split_across_three_directions() {
        let lake = FrozenLake::new(true);
        let transitions = lake.transitions();

        // Down from the start slips left, down or right.
        let ts = &transitions[&(0, 1)];
        let mut next = ts.iter().map(|t| t.next_state).collect::<Vec<_>>();
        next.sort();
        assert_eq!(next, vec![0, 1, 4]);
        for t in ts {
            assert_float_eq!(t.probability, 1. / 3., abs <= 0.);
        }
    }

    #[test]
    fn stepping_into_the_goal_is_the_only_reward() {
        let lake = FrozenLake::new(false);
        let transitions = lake.transitions();

        let rewarding = transitions
            .iter()
            .flat_map(|(_, ts)| ts)
            .filter(|t| t.reward > 0.)
            .count();
        // Right from 14 and down from 11; 11 is a hole, so only one.
        assert_eq!(rewarding, 1);
        assert_float_eq!(transitions[&(14, 2)][0].reward, 1., abs <= 0.);
        assert_eq!(transitions[&(14, 2)][0].next_state, 15);
    }
}
