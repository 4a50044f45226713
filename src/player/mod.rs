//! Players and their move sources: a human typing columns at the console or
//! a computer picking uniformly random legal columns.

mod agent;
mod human;
mod random;

pub use agent::{Agent, Player};
pub use human::HumanAgent;
pub use random::RandomAgent;
