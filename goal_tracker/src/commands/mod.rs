//! Recognizers for commands the player types.

use skill_library::{GuildName, SkillName};

use crate::matchers::{text, Matcher, Pattern};

const GUILD_INFO: &str = r"(?i)^\s*(.+?)\s+info\s*$";
const LIST_GOALS: &str = r"(?i)^\s*goal\s*$";
const SET_GOAL: &str = r"(?i)^\s*goal\s+(.+?)\s*$";

/// A typed command the tracker acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<guild> info` - following guild info output belongs to `guild`.
    GuildInfo { guild: GuildName },

    /// `goal` - list the skill library, marking the goal.
    ListGoals,

    /// `goal <skill>` - make `skill` the goal.
    SetGoal { skill: SkillName },
}

impl Command {
    /// Whether the command still has to reach the game.
    pub fn disposition(&self) -> Disposition {
        match self {
            Command::GuildInfo { .. } => Disposition::Forward,
            Command::ListGoals | Command::SetGoal { .. } => Disposition::Suppress,
        }
    }
}

/// What the host should do with a typed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// A command was handled and must still be sent to the game unchanged.
    Forward,
    /// A command was handled locally and must not be sent.
    Suppress,
    /// No command recognized; treat the line as ordinary input.
    Unhandled,
}

/// Command processors in the order typed lines are offered to them. The first
/// one that matches decides.
pub fn command_processors() -> Result<Vec<Box<dyn Matcher<Command>>>, regex::Error> {
    let processors: Vec<Box<dyn Matcher<Command>>> = vec![
        Box::new(Pattern::new("guild_info", GUILD_INFO, |caps| {
            let guild = GuildName::new(text(caps, 1)?);
            Some(Command::GuildInfo { guild })
        })?),
        Box::new(Pattern::new("list_goals", LIST_GOALS, |_| Some(Command::ListGoals))?),
        Box::new(Pattern::new("set_goal", SET_GOAL, |caps| {
            let skill = SkillName::new(text(caps, 1)?);
            Some(Command::SetGoal { skill })
        })?),
    ];
    Ok(processors)
}
