//! Per-session ambient context.
//!
//! Several output shapes only make sense relative to something seen earlier:
//! cost rows belong to the last announced table, guild info lines belong to
//! the guild of the last `<guild> info` command and the last level heading.
//! That context lives here, next to the store, for the length of a session.
//! It is not persisted.

use skill_library::{GuildName, SkillName};

use crate::facts::ExperienceReport;

/// Level that guild abilities are granted at until a `Level N:` heading.
pub const JOINING_LEVEL: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Skill whose cost table is being printed.
    pub cost_table_skill: Option<SkillName>,

    /// Guild named by the latest guild info command.
    pub guild: Option<GuildName>,

    /// Level the next training ceilings are granted at.
    pub ability_level: u32,

    pub last_report: Option<ExperienceReport>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            cost_table_skill: None,
            guild: None,
            ability_level: JOINING_LEVEL,
            last_report: None,
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start attributing guild info output to `guild`.
    pub fn enter_guild(&mut self, guild: GuildName) {
        self.guild = Some(guild);
        self.ability_level = JOINING_LEVEL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_guild_resets_level() {
        let mut session = SessionContext::new();
        session.ability_level = 7;

        session.enter_guild(GuildName::new("Ranger"));

        assert_eq!(session.guild, Some(GuildName::new("ranger")));
        assert_eq!(session.ability_level, JOINING_LEVEL);
    }
}
