//! Skill knowledge: what each percent costs and how far the player has trained.

mod cost;
mod status;

pub use cost::*;
pub use status::*;
