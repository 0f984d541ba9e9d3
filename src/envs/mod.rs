pub mod frozen_lake;
pub mod simple_golf;
