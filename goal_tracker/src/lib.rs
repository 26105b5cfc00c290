//! # Goal Tracker
//!
//! Watches the text of a game session, extracts skill and guild facts from
//! the lines it recognizes, and reports how much experience the player still
//! needs for the next percent of their goal skill.
//!
//! ## Core Components
//!
//! - **matchers**: the line-recognizer seam shared by both pipelines
//! - **output**: recognizers for game output, each yielding a [`Fact`]
//! - **commands**: recognizers for typed commands, each yielding a [`Command`]
//! - **evaluation**: the goal check run on every experience report
//! - **tracker**: the [`GoalTracker`] driver that owns the store and session
//!
//! ## Data Flow
//!
//! - Output lines: game text -> output matchers -> facts -> store -> goal check
//! - Typed lines: command processors -> store and messages -> forward/suppress

pub mod commands;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod facts;
pub mod logging;
pub mod matchers;
pub mod output;
pub mod session;
pub mod tracker;

pub use commands::{Command, Disposition};
pub use config::TrackerConfig;
pub use error::*;
pub use evaluation::{evaluate_goal, GoalError, GoalReport};
pub use facts::*;
pub use matchers::Matcher;
pub use session::SessionContext;
pub use tracker::{GoalTracker, MessageSink};

pub use skill_library::{GuildName, KnowledgeStore, Percent, SkillName};
