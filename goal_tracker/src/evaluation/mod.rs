//! Goal evaluation - can the player afford the next percent of the goal skill?
//!
//! Run on every experience report:
//! 1. **Full**: the goal skill is at 100% or reported `(n/a)`
//! 2. **Library**: the goal skill must have a cost table
//! 3. **Eligibility**: collect guilds whose ceilings let the player, at their
//!    current level there, train the next percent
//! 4. **Needs level**: no guild qualifies
//! 5. **Cost**: look up the cost of the next percent
//! 6. **Compare**: report the deficit, or the guilds to advance in

use skill_library::{GuildName, KnowledgeStore, SkillName};
use std::collections::BTreeSet;
use thiserror::Error;

/// Outcome of a goal check that could be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalReport {
    Full {
        skill: SkillName,
    },
    NeedsLevel {
        skill: SkillName,
    },
    NeedsExperience {
        skill: SkillName,
        cost: u64,
        deficit: u64,
    },
    CanAdvance {
        skill: SkillName,
        cost: u64,
        /// Ascending, no duplicates.
        guilds: Vec<GuildName>,
    },
}

impl std::fmt::Display for GoalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalReport::Full { skill } => write!(f, "Goal {}: full", skill),
            GoalReport::NeedsLevel { skill } => write!(f, "Goal {}: needs level", skill),
            GoalReport::NeedsExperience {
                skill,
                cost,
                deficit,
            } => write!(f, "Goal {}: {} You need: {}", skill, cost, deficit),
            GoalReport::CanAdvance {
                skill,
                cost,
                guilds,
            } => {
                let guilds: Vec<_> = guilds.iter().map(GuildName::as_str).collect();
                write!(
                    f,
                    "Goal {}: {} You have enough to advance in: {}",
                    skill,
                    cost,
                    guilds.join(", ")
                )
            }
        }
    }
}

/// Reasons a goal check produced no report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    #[error("no goal set")]
    NoGoal,

    #[error("Goal {0}: not in library")]
    UnknownSkill(SkillName),

    #[error("Goal {skill}: cost of {percent}% unknown")]
    MissingCost { skill: SkillName, percent: u32 },
}

impl GoalError {
    /// Whether the player should be told about this failure.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, GoalError::NoGoal)
    }
}

/// Check the goal against the experience figure of a fresh report.
pub fn evaluate_goal(store: &KnowledgeStore, experience: u64) -> Result<GoalReport, GoalError> {
    let goal = store.goal().ok_or(GoalError::NoGoal)?;
    let skill = goal.skill.clone();

    let Some(next_percent) = store.current_percent(&skill).next() else {
        return Ok(GoalReport::Full { skill });
    };

    if !store.knows_skill(&skill) {
        return Err(GoalError::UnknownSkill(skill));
    }

    let guilds = eligible_guilds(store, &skill, next_percent);
    if guilds.is_empty() {
        return Ok(GoalReport::NeedsLevel { skill });
    }

    let Some(cost) = store.cost_of(&skill, next_percent) else {
        return Err(GoalError::MissingCost {
            skill,
            percent: next_percent,
        });
    };

    if experience < cost {
        Ok(GoalReport::NeedsExperience {
            skill,
            cost,
            deficit: cost - experience,
        })
    } else {
        Ok(GoalReport::CanAdvance {
            skill,
            cost,
            guilds: guilds.into_iter().collect(),
        })
    }
}

/// Guilds where the player may train `skill` to `percent` at their current
/// guild level.
pub fn eligible_guilds(
    store: &KnowledgeStore,
    skill: &SkillName,
    percent: u32,
) -> BTreeSet<GuildName> {
    store
        .ceilings_for(skill)
        .filter(|ceiling| ceiling.permits(skill, store.guild_level(&ceiling.guild), percent))
        .map(|ceiling| ceiling.guild.clone())
        .collect()
}
