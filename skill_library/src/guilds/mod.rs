//! Guild training ceilings.
//!
//! A guild's info page lists, for each guild level, which skills a member may
//! train and up to what percent. Each such line becomes one [`SkillCeiling`].

use serde::{Deserialize, Serialize};

use crate::names::{GuildName, SkillName};

/// Maximum percent a guild permits for a skill once the member reaches a level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillCeiling {
    pub guild: GuildName,
    pub skill: SkillName,
    /// Guild level at which the ceiling is granted.
    pub level: u32,
    pub max_percent: u32,
}

impl SkillCeiling {
    pub fn new(guild: GuildName, skill: SkillName, level: u32, max_percent: u32) -> Self {
        Self {
            guild,
            skill,
            level,
            max_percent,
        }
    }

    /// Whether this ceiling lets a member at `player_level` train `skill` to
    /// `percent`. A member of unknown level is never permitted.
    pub fn permits(&self, skill: &SkillName, player_level: Option<u32>, percent: u32) -> bool {
        let Some(player_level) = player_level else {
            return false;
        };
        self.skill == *skill && self.level <= player_level && self.max_percent >= percent
    }
}
