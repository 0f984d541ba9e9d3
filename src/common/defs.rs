use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Discrete = i32;
pub type Continous = f64;

/// One outcome of taking an action in a state. `done` marks entry into a
/// terminal state; it is carried for rollout callers and never read by the
/// Bellman backups.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: Continous,
    pub reward: f64,
    pub done: bool,
}

/// Full dynamics table: `(state, action)` to its outcome list. Multiple
/// entries per key describe a stochastic branch; probabilities of a key are
/// expected to sum to 1 but this is the caller's responsibility.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;
