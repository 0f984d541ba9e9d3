pub mod common;
pub mod envs;
pub mod mdps;
