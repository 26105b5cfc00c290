//! The knowledge store - all facts accumulated during play.

mod error;
mod persistence;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::guilds::SkillCeiling;
use crate::names::{GuildName, SkillName};
use crate::skills::{CostTable, Percent, SkillStatus};

/// The skill the player is working toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub skill: SkillName,

    /// Percent the skill was at when the goal was set. `None` while the skill
    /// is not in the library; filled in once it is registered.
    pub target_step: Option<Percent>,
}

impl Goal {
    /// Whether the goal named a skill the library knew about.
    pub fn is_resolved(&self) -> bool {
        self.target_step.is_some()
    }
}

/// Everything learned about the player's skills and guilds.
///
/// Created empty at session start, optionally replaced by a loaded document,
/// mutated in place while lines are processed, and dumped at session end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStore {
    /// Skill -> cost of each percent. Key set is the skill library.
    #[serde(default)]
    cost_tables: BTreeMap<SkillName, CostTable>,

    #[serde(default)]
    statuses: BTreeMap<SkillName, SkillStatus>,

    /// Guild -> player's level in that guild.
    #[serde(default)]
    guild_levels: BTreeMap<GuildName, u32>,

    /// Append-only; a guild read twice contributes its ceilings twice.
    #[serde(default)]
    ceilings: Vec<SkillCeiling>,

    #[serde(default)]
    goal: Option<Goal>,
}

impl KnowledgeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything learned so far.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // --- Skill library ---

    /// Add a skill to the library, keeping any costs already known for it.
    ///
    /// An unresolved goal naming this skill becomes resolved.
    pub fn register_skill(&mut self, skill: SkillName) -> &mut CostTable {
        if !self.knows_skill(&skill) {
            self.resolve_goal(&skill);
        }
        self.cost_tables.entry(skill).or_default()
    }

    /// Record the cost of reaching `percent` in `skill`.
    pub fn record_cost(&mut self, skill: &SkillName, percent: u32, cost: u64) {
        let table = self.register_skill(skill.clone());
        if let Some(previous) = table.set_cost(percent, cost) {
            if previous != cost {
                debug!(%skill, percent, previous, cost, "cost table entry replaced");
            }
        }
    }

    /// Whether the skill has been seen in a cost listing.
    pub fn knows_skill(&self, skill: &SkillName) -> bool {
        self.cost_tables.contains_key(skill)
    }

    /// The cost table of `skill`, if it is in the library.
    pub fn cost_table(&self, skill: &SkillName) -> Option<&CostTable> {
        self.cost_tables.get(skill)
    }

    /// Cost of reaching `percent` in `skill`, if observed.
    pub fn cost_of(&self, skill: &SkillName, percent: u32) -> Option<u64> {
        self.cost_tables.get(skill)?.cost_of(percent)
    }

    /// All skills in the library, in ascending order.
    pub fn skills(&self) -> impl Iterator<Item = &SkillName> {
        self.cost_tables.keys()
    }

    // --- Skill status ---

    /// Overwrite the current and maximum percent from a train listing row.
    pub fn set_status(&mut self, skill: SkillName, current: Percent, maximum: Option<u32>) {
        let status = self.statuses.entry(skill).or_default();
        status.current = current;
        status.maximum = maximum;
    }

    /// Overwrite only the current percent, leaving the maximum untouched.
    pub fn set_current_percent(&mut self, skill: SkillName, percent: u32) {
        self.statuses.entry(skill).or_default().current = Percent::Value(percent);
    }

    /// Record a partial-training event for `skill`, returning the new count.
    pub fn record_partial_training(&mut self, skill: SkillName) -> u32 {
        self.statuses
            .entry(skill)
            .or_default()
            .record_partial_training()
    }

    /// Trained status of `skill`, if ever observed.
    pub fn status(&self, skill: &SkillName) -> Option<&SkillStatus> {
        self.statuses.get(skill)
    }

    /// Current percent of `skill`; a skill never seen trained is at 0.
    pub fn current_percent(&self, skill: &SkillName) -> Percent {
        self.statuses
            .get(skill)
            .map(|status| status.current)
            .unwrap_or_default()
    }

    /// Experience spent on partial training of `skill`.
    pub fn sunk_experience(&self, skill: &SkillName, cost_per_event: u64) -> u64 {
        self.statuses
            .get(skill)
            .map(|status| status.sunk_experience(cost_per_event))
            .unwrap_or(0)
    }

    // --- Guilds ---

    /// Record the player's level in `guild`, replacing any earlier value.
    pub fn set_guild_level(&mut self, guild: GuildName, level: u32) {
        self.guild_levels.insert(guild, level);
    }

    /// Player's level in `guild`, if its info page has been read.
    pub fn guild_level(&self, guild: &GuildName) -> Option<u32> {
        self.guild_levels.get(guild).copied()
    }

    /// All known guild levels, in ascending guild order.
    pub fn guild_levels(&self) -> impl Iterator<Item = (&GuildName, u32)> {
        self.guild_levels.iter().map(|(guild, level)| (guild, *level))
    }

    /// Append a training ceiling. Duplicates are kept.
    pub fn add_ceiling(&mut self, ceiling: SkillCeiling) {
        self.ceilings.push(ceiling);
    }

    /// Every recorded ceiling, in the order observed.
    pub fn ceilings(&self) -> &[SkillCeiling] {
        &self.ceilings
    }

    /// Ceilings recorded for one skill, duplicates included.
    pub fn ceilings_for<'a>(
        &'a self,
        skill: &'a SkillName,
    ) -> impl Iterator<Item = &'a SkillCeiling> + 'a {
        self.ceilings.iter().filter(move |c| c.skill == *skill)
    }

    // --- Goal ---

    /// Replace the goal with `skill`.
    ///
    /// The goal is replaced even when the skill is not in the library; the new
    /// goal is then unresolved (see [`Goal::is_resolved`]).
    pub fn set_goal(&mut self, skill: SkillName) -> &Goal {
        let target_step = self
            .knows_skill(&skill)
            .then(|| self.current_percent(&skill));
        info!(%skill, resolved = target_step.is_some(), "goal set");
        self.goal.insert(Goal { skill, target_step })
    }

    /// The active goal, resolved or not.
    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Drop the active goal, returning it.
    pub fn clear_goal(&mut self) -> Option<Goal> {
        self.goal.take()
    }

    fn resolve_goal(&mut self, skill: &SkillName) {
        let current = self.current_percent(skill);
        if let Some(goal) = self
            .goal
            .as_mut()
            .filter(|goal| goal.skill == *skill && !goal.is_resolved())
        {
            goal.target_step = Some(current);
            info!(%skill, "goal resolved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attack() -> SkillName {
        SkillName::new("attack")
    }

    #[test]
    fn test_record_cost_builds_library() {
        let mut store = KnowledgeStore::new();
        assert!(!store.knows_skill(&attack()));

        store.record_cost(&attack(), 1, 80);
        store.record_cost(&attack(), 2, 82);
        store.record_cost(&attack(), 2, 82);

        assert!(store.knows_skill(&SkillName::new("ATTACK")));
        assert_eq!(store.cost_of(&attack(), 2), Some(82));
        assert_eq!(store.cost_table(&attack()).map(CostTable::len), Some(2));
    }

    #[test]
    fn test_register_skill_keeps_costs() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);

        store.register_skill(attack());

        assert_eq!(store.cost_of(&attack(), 1), Some(80));
        assert_eq!(store.skills().count(), 1);
    }

    #[test]
    fn test_status_updates() {
        let mut store = KnowledgeStore::new();
        assert_eq!(store.current_percent(&attack()), Percent::Value(0));

        store.set_status(attack(), Percent::Value(1), Some(100));
        store.set_current_percent(attack(), 5);

        let status = store.status(&attack()).unwrap();
        assert_eq!(status.current, Percent::Value(5));
        assert_eq!(status.maximum, Some(100));
    }

    #[test]
    fn test_partial_training_does_not_change_percent() {
        let mut store = KnowledgeStore::new();
        store.set_status(attack(), Percent::Value(30), Some(85));

        store.record_partial_training(attack());
        store.record_partial_training(attack());

        assert_eq!(store.current_percent(&attack()), Percent::Value(30));
        assert_eq!(store.sunk_experience(&attack(), 300_000), 600_000);
        assert_eq!(store.sunk_experience(&SkillName::new("bash"), 300_000), 0);
    }

    #[test]
    fn test_ceilings_tolerate_duplicates() {
        let mut store = KnowledgeStore::new();
        let ceiling = SkillCeiling::new(GuildName::new("ranger"), attack(), 1, 20);

        store.add_ceiling(ceiling.clone());
        store.add_ceiling(ceiling);
        store.add_ceiling(SkillCeiling::new(
            GuildName::new("ranger"),
            SkillName::new("push"),
            1,
            40,
        ));

        let skill = attack();
        assert_eq!(store.ceilings().len(), 3);
        assert_eq!(store.ceilings_for(&skill).count(), 2);
    }

    #[test]
    fn test_set_goal_known_skill() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);
        store.set_status(attack(), Percent::Value(12), None);

        let goal = store.set_goal(SkillName::new("Attack"));

        assert!(goal.is_resolved());
        assert_eq!(goal.target_step, Some(Percent::Value(12)));
    }

    #[test]
    fn test_set_goal_unknown_skill_still_replaces() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);
        store.set_goal(attack());

        let goal = store.set_goal(SkillName::new("looting and burning"));
        assert!(!goal.is_resolved());

        assert_eq!(
            store.goal().map(|g| g.skill.as_str()),
            Some("looting and burning")
        );
    }

    #[test]
    fn test_goal_resolves_when_skill_enters_library() {
        let mut store = KnowledgeStore::new();
        store.set_status(SkillName::new("bash"), Percent::Value(7), None);
        assert!(!store.set_goal(SkillName::new("bash")).is_resolved());

        store.register_skill(SkillName::new("Bash"));

        let goal = store.goal().unwrap();
        assert!(goal.is_resolved());
        assert_eq!(goal.target_step, Some(Percent::Value(7)));
    }

    #[test]
    fn test_resolved_goal_keeps_its_target_step() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);
        store.set_goal(attack());
        store.set_current_percent(attack(), 3);

        store.record_cost(&attack(), 4, 91);

        assert_eq!(store.goal().unwrap().target_step, Some(Percent::Value(0)));
    }

    #[test]
    fn test_clear_goal() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);
        store.set_goal(attack());

        assert_eq!(store.clear_goal().map(|goal| goal.skill), Some(attack()));
        assert!(store.goal().is_none());
        assert!(store.clear_goal().is_none());
    }

    #[test]
    fn test_guild_levels_overwrite() {
        let mut store = KnowledgeStore::new();
        store.set_guild_level(GuildName::new("Ranger"), 1);
        store.set_guild_level(GuildName::new("barbarian"), 1);
        store.set_guild_level(GuildName::new("ranger"), 2);

        let levels: Vec<_> = store
            .guild_levels()
            .map(|(guild, level)| (guild.as_str(), level))
            .collect();
        assert_eq!(levels, vec![("barbarian", 1), ("ranger", 2)]);
    }

    #[test]
    fn test_clear() {
        let mut store = KnowledgeStore::new();
        store.record_cost(&attack(), 1, 80);
        store.set_guild_level(GuildName::new("ranger"), 2);
        store.set_goal(attack());

        store.clear();

        assert_eq!(store, KnowledgeStore::new());
    }
}
