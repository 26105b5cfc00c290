//! Facts extracted from single lines of game output.

use skill_library::{Percent, SkillName};

/// Figures from the `Exp: ... Money: ... Bank: ... Exp pool: ...` line.
///
/// Decimal fractions in the text are truncated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceReport {
    pub experience: u64,
    pub money: u64,
    pub bank: u64,
    pub exp_pool: u64,
}

/// One structured fact recognized in a line of game output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fact {
    /// `| Cost of training <skill> |` - following cost rows belong to `skill`.
    CostTableHeader { skill: SkillName },

    /// One or two `N% = M` cells of a cost table row.
    CostRow { entries: Vec<(u32, u64)> },

    /// A row of the train listing.
    SkillStatusRow {
        skill: SkillName,
        current: Percent,
        maximum: Option<u32>,
    },

    /// `You now have '<skill>' at N% without special bonuses.`
    SkillTrained { skill: SkillName, percent: u32 },

    /// `You partially train <skill> which cost you 300000 experience.`
    PartialTraining { skill: SkillName },

    ExperienceReport(ExperienceReport),

    /// `Your level: N` in guild info output.
    GuildLevel { level: u32 },

    /// `Abilities gained when joining:` - ceilings that follow are level 1.
    JoiningAbilities,

    /// `Level N:` - ceilings that follow are granted at level N.
    LevelHeading { level: u32 },

    /// `May train skill <skill> to P%`
    TrainingCeiling { skill: SkillName, max_percent: u32 },
}
