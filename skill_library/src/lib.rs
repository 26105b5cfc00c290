//! # Skill Library
//!
//! The knowledge store of the goal tracker: everything learned so far about the
//! player's skills and guilds. This crate holds state only; it never looks at
//! raw game output.
//!
//! ## Contents
//!
//! - **names**: normalized skill and guild identifiers
//! - **skills**: training cost tables and trained-percent status
//! - **guilds**: level-gated training ceilings granted by guilds
//! - **store**: the [`KnowledgeStore`] aggregate, the goal, and persistence

pub mod guilds;
pub mod names;
pub mod skills;
pub mod store;

pub use guilds::*;
pub use names::*;
pub use skills::*;
pub use store::*;
