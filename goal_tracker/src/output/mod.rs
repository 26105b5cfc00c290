//! Recognizers for game output lines.
//!
//! Each shape is matched against the whole line, case-insensitively, except
//! cost table rows: a row prints two columns side by side, so every `N% = M`
//! cell in the line is collected.

use regex::{Captures, Regex};
use skill_library::{Percent, SkillName};

use crate::facts::{ExperienceReport, Fact};
use crate::matchers::{number, text, Matcher, Pattern};

const COST_TABLE_HEADER: &str = r"(?i)^\|\s*cost\s+of\s+training\s+([^|]+?)\s*\|$";
const COST_CELL: &str = r"\|\s*(\d+)%\s*=\s*(\d+)";
const SKILL_STATUS_ROW: &str = r"(?i)^\|\s*([^|]*[^|\s])\s*\|\s*(\d+|\(n/a\))\s*\|\s*(\d+|\(n/a\))\s*\|\s*(\d+|\(n/a\))\s*\|\s*(\d+|\(n/a\))\s*\|$";
const SKILL_TRAINED: &str = r"(?i)^You now have '([^']+)' at (\d+)% without special bonuses\.$";
const PARTIAL_TRAINING: &str = r"(?i)^You partially (?:train|study) ([\w\s]+?) which cost you 300000 experience\.$";
const EXPERIENCE_REPORT: &str = r"(?i)^Exp:\s*(\d+)\s+Money:\s*(\d+)(?:\.\d*)?\s+Bank:\s*(\d+)(?:\.\d*)?\s+Exp pool:\s*(\d+)(?:\.\d*)?$";
const GUILD_LEVEL: &str = r"(?i)^\s*Your level:\s*(\d+)$";
const JOINING_ABILITIES: &str = r"(?i)^\s*Abilities gained when joining:$";
const LEVEL_HEADING: &str = r"(?i)^\s*Level\s+(\d+):$";
const TRAINING_CEILING: &str = r"(?i)^\s*May\s+train\s+skill\s+(.+?)\s+to\s+(\d+)%$";

/// Token the game prints where a percent does not apply.
const NOT_APPLICABLE: &str = "(n/a)";

/// Collects every `N% = M` cell of a cost table row.
#[derive(Debug)]
pub struct CostRowMatcher {
    cell: Regex,
}

impl CostRowMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            cell: Regex::new(COST_CELL)?,
        })
    }
}

impl Matcher<Fact> for CostRowMatcher {
    fn name(&self) -> &'static str {
        "cost_row"
    }

    fn try_match(&self, line: &str) -> Option<Fact> {
        let entries: Vec<(u32, u64)> = self
            .cell
            .captures_iter(line)
            .filter_map(|caps| Some((number(&caps, 1)?, number(&caps, 2)?)))
            .collect();

        if entries.is_empty() {
            None
        } else {
            Some(Fact::CostRow { entries })
        }
    }
}

/// The output matchers in the order the pipeline offers lines to them.
pub fn output_matchers() -> Result<Vec<Box<dyn Matcher<Fact>>>, regex::Error> {
    let matchers: Vec<Box<dyn Matcher<Fact>>> = vec![
        Box::new(Pattern::new("cost_table_header", COST_TABLE_HEADER, cost_table_header)?),
        Box::new(CostRowMatcher::new()?),
        Box::new(Pattern::new("skill_status_row", SKILL_STATUS_ROW, skill_status_row)?),
        Box::new(Pattern::new("skill_trained", SKILL_TRAINED, skill_trained)?),
        Box::new(Pattern::new("partial_training", PARTIAL_TRAINING, partial_training)?),
        Box::new(Pattern::new("experience_report", EXPERIENCE_REPORT, experience_report)?),
        Box::new(Pattern::new("guild_level", GUILD_LEVEL, |caps| {
            Some(Fact::GuildLevel {
                level: number(caps, 1)?,
            })
        })?),
        Box::new(Pattern::new("joining_abilities", JOINING_ABILITIES, |_| {
            Some(Fact::JoiningAbilities)
        })?),
        Box::new(Pattern::new("level_heading", LEVEL_HEADING, |caps| {
            Some(Fact::LevelHeading {
                level: number(caps, 1)?,
            })
        })?),
        Box::new(Pattern::new("training_ceiling", TRAINING_CEILING, training_ceiling)?),
    ];
    Ok(matchers)
}

fn skill(caps: &Captures<'_>, index: usize) -> Option<SkillName> {
    let skill = SkillName::new(text(caps, index)?);
    (!skill.is_empty()).then_some(skill)
}

fn percent(caps: &Captures<'_>, index: usize) -> Option<Percent> {
    if text(caps, index)?.eq_ignore_ascii_case(NOT_APPLICABLE) {
        Some(Percent::NotApplicable)
    } else {
        number(caps, index).map(Percent::Value)
    }
}

fn cost_table_header(caps: &Captures<'_>) -> Option<Fact> {
    Some(Fact::CostTableHeader {
        skill: skill(caps, 1)?,
    })
}

// Cells: skill | current | racial | maximum | experience. Racial and
// experience are not kept.
fn skill_status_row(caps: &Captures<'_>) -> Option<Fact> {
    let maximum = percent(caps, 4)?.value();
    Some(Fact::SkillStatusRow {
        skill: skill(caps, 1)?,
        current: percent(caps, 2)?,
        maximum,
    })
}

fn skill_trained(caps: &Captures<'_>) -> Option<Fact> {
    Some(Fact::SkillTrained {
        skill: skill(caps, 1)?,
        percent: number(caps, 2)?,
    })
}

fn partial_training(caps: &Captures<'_>) -> Option<Fact> {
    Some(Fact::PartialTraining {
        skill: skill(caps, 1)?,
    })
}

fn experience_report(caps: &Captures<'_>) -> Option<Fact> {
    Some(Fact::ExperienceReport(ExperienceReport {
        experience: number(caps, 1)?,
        money: number(caps, 2)?,
        bank: number(caps, 3)?,
        exp_pool: number(caps, 4)?,
    }))
}

fn training_ceiling(caps: &Captures<'_>) -> Option<Fact> {
    Some(Fact::TrainingCeiling {
        skill: skill(caps, 1)?,
        max_percent: number(caps, 2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every fact the matcher set produces for `line`.
    fn facts(line: &str) -> Vec<Fact> {
        let matchers = output_matchers().unwrap();
        matchers.iter().filter_map(|m| m.try_match(line)).collect()
    }

    fn only_fact(line: &str) -> Fact {
        let mut found = facts(line);
        assert_eq!(found.len(), 1, "expected exactly one fact for {line:?}: {found:?}");
        found.remove(0)
    }

    #[test]
    fn test_cost_table_header() {
        assert_eq!(
            only_fact("| Cost of training Looting and burning                         |"),
            Fact::CostTableHeader {
                skill: SkillName::new("looting and burning")
            }
        );
    }

    #[test]
    fn test_cost_row_two_columns() {
        assert_eq!(
            only_fact("|    1% =            80  |   51% =          9046  |"),
            Fact::CostRow {
                entries: vec![(1, 80), (51, 9046)]
            }
        );
    }

    #[test]
    fn test_cost_table_decorations_ignored() {
        for line in [
            ",-------------------------------------------------.",
            "|-------------------------------------------------|",
            "| Percent     Exp        | Percent     Exp        |",
            "|=================================================|",
            "|   1% to 86% =         200000000  |",
        ] {
            assert!(facts(line).is_empty(), "unexpected fact for {line:?}");
        }
    }

    #[test]
    fn test_skill_status_row() {
        assert_eq!(
            only_fact("| Attack                      |  1 |  85 | 100 |       22015 |"),
            Fact::SkillStatusRow {
                skill: SkillName::new("attack"),
                current: Percent::Value(1),
                maximum: Some(100),
            }
        );
    }

    #[test]
    fn test_skill_status_row_not_applicable() {
        assert_eq!(
            only_fact("| Attack                      |  100 |  85 | (n/a) |       (n/a) |"),
            Fact::SkillStatusRow {
                skill: SkillName::new("attack"),
                current: Percent::Value(100),
                maximum: None,
            }
        );
        assert_eq!(
            only_fact("| Push |  (N/A) |  85 | 100 |  0 |"),
            Fact::SkillStatusRow {
                skill: SkillName::new("push"),
                current: Percent::NotApplicable,
                maximum: Some(100),
            }
        );
    }

    #[test]
    fn test_train_listing_header_ignored() {
        let header = "| Skills available at level  1  | Cur | Rac | Max | Exp         |";
        assert!(facts(header).is_empty());
    }

    #[test]
    fn test_skill_trained() {
        assert_eq!(
            only_fact("You now have 'Attack' at 100% without special bonuses."),
            Fact::SkillTrained {
                skill: SkillName::new("attack"),
                percent: 100,
            }
        );
    }

    #[test]
    fn test_partial_training() {
        for line in [
            "You partially train Torch creation which cost you 300000 experience.",
            "You partially study Magic missile which cost you 300000 experience.",
        ] {
            assert!(matches!(only_fact(line), Fact::PartialTraining { .. }));
        }
        assert_eq!(
            only_fact("You partially train Torch creation which cost you 300000 experience."),
            Fact::PartialTraining {
                skill: SkillName::new("torch creation")
            }
        );
        assert!(facts("You partially train Attack which cost you 250000 experience.").is_empty());
    }

    #[test]
    fn test_experience_report_truncates_fractions() {
        assert_eq!(
            only_fact("Exp: 135670 Money: 211.10 Bank: 644404.00 Exp pool: 100.0"),
            Fact::ExperienceReport(ExperienceReport {
                experience: 135670,
                money: 211,
                bank: 644404,
                exp_pool: 100,
            })
        );
        assert_eq!(
            only_fact("Exp: 2 Money: 0 Bank: 0 Exp pool: 0"),
            Fact::ExperienceReport(ExperienceReport {
                experience: 2,
                ..ExperienceReport::default()
            })
        );
    }

    #[test]
    fn test_guild_info_lines() {
        assert_eq!(only_fact("Your level: 2"), Fact::GuildLevel { level: 2 });
        assert_eq!(only_fact("Abilities gained when joining:"), Fact::JoiningAbilities);
        assert_eq!(only_fact(" Level 3:"), Fact::LevelHeading { level: 3 });
        assert_eq!(
            only_fact("   May train skill Alcohol tolerance to 3%"),
            Fact::TrainingCeiling {
                skill: SkillName::new("alcohol tolerance"),
                max_percent: 3,
            }
        );
    }

    #[test]
    fn test_guild_info_noise_ignored() {
        for line in [
            "Maximum level: 35",
            "Name: Rangers",
            "Abilities and requirements at each level:",
            "  Abilities:",
            " In the name of Groo wear the shrunken skull necklace with pride.",
        ] {
            assert!(facts(line).is_empty(), "unexpected fact for {line:?}");
        }
    }

    #[test]
    fn test_matching_is_anchored() {
        assert!(facts("She says: Your level: 2").is_empty());
        assert!(facts("Exp: 2 Money: 0 Bank: 0 Exp pool: 0 and more").is_empty());
    }
}
