//! The pipeline driver.
//!
//! A [`GoalTracker`] owns the knowledge store, the session context and both
//! matcher chains. The host feeds it every line of game output and every
//! typed line, one at a time; each call runs to completion before returning.

use skill_library::{KnowledgeStore, SkillCeiling, SkillName};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::commands::{command_processors, Command, Disposition};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::evaluation::evaluate_goal;
use crate::facts::Fact;
use crate::logging;
use crate::matchers::Matcher;
use crate::output::output_matchers;
use crate::session::SessionContext;

/// Where the tracker's messages for the player go.
pub trait MessageSink {
    /// Display one line of text.
    fn print(&mut self, message: &str);
}

impl MessageSink for Vec<String> {
    fn print(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Drives both pipelines over one knowledge store for the length of a session.
pub struct GoalTracker {
    store: KnowledgeStore,
    session: SessionContext,
    config: TrackerConfig,
    output_matchers: Vec<Box<dyn Matcher<Fact>>>,
    command_processors: Vec<Box<dyn Matcher<Command>>>,
}

impl GoalTracker {
    /// Create a tracker over an existing store with default configuration.
    pub fn new(store: KnowledgeStore) -> Result<Self> {
        Self::with_config(store, TrackerConfig::default())
    }

    pub fn with_config(store: KnowledgeStore, config: TrackerConfig) -> Result<Self> {
        Ok(Self {
            store,
            session: SessionContext::new(),
            config,
            output_matchers: output_matchers()?,
            command_processors: command_processors()?,
        })
    }

    /// Start a session: build an empty tracker, then load the configured store
    /// if there is one. Load failures are reported to `sink` and the session
    /// continues with an empty store.
    ///
    /// Also installs the tracing subscriber described by `config`, unless the
    /// host already installed one.
    pub fn open(config: TrackerConfig, sink: &mut dyn MessageSink) -> Result<Self> {
        logging::init_from(&config);
        let mut tracker = Self::with_config(KnowledgeStore::new(), config)?;
        if let Some(path) = tracker.config.store_path.clone() {
            tracker.load_store(&path, sink);
        }
        Ok(tracker)
    }

    /// Replace the store with the one persisted at `path`.
    ///
    /// On failure the error is logged and printed, and the store is left
    /// empty. Returns whether the load succeeded.
    pub fn load_store(&mut self, path: &Path, sink: &mut dyn MessageSink) -> bool {
        let (store, err) = KnowledgeStore::load_or_default(path);
        self.replace_store(store);
        match err {
            Some(err) => {
                sink.print(&err.to_string());
                false
            }
            None => true,
        }
    }

    /// Persist the store to the configured path. Without a configured path
    /// this does nothing.
    pub fn save(&self) -> Result<()> {
        match &self.config.store_path {
            Some(path) => Ok(self.store.save_file(path)?),
            None => {
                debug!("no store path configured, not saving");
                Ok(())
            }
        }
    }

    /// The knowledge store, e.g. for dumping at session end.
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// End the session, keeping only the store.
    pub fn into_store(self) -> KnowledgeStore {
        self.store
    }

    /// Swap in a whole new store, returning the old one.
    pub fn replace_store(&mut self, store: KnowledgeStore) -> KnowledgeStore {
        std::mem::replace(&mut self.store, store)
    }

    /// Ambient context picked up from earlier lines.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Configuration the tracker was built with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Experience spent on partial training of `skill` so far.
    pub fn sunk_experience(&self, skill: &SkillName) -> u64 {
        self.store
            .sunk_experience(skill, self.config.partial_training_cost)
    }

    /// Handle one line of game output.
    ///
    /// The line is offered to every output matcher in order, whether or not an
    /// earlier one matched.
    pub fn process_output(&mut self, line: &str, sink: &mut dyn MessageSink) {
        let line = line.trim_end();
        let facts: Vec<Fact> = self
            .output_matchers
            .iter()
            .filter_map(|matcher| {
                let fact = matcher.try_match(line)?;
                debug!(matcher = matcher.name(), ?fact, "recognized output");
                Some(fact)
            })
            .collect();

        for fact in facts {
            self.apply_fact(fact, sink);
        }
    }

    /// Handle one typed line before it is sent to the game.
    pub fn process_command(&mut self, line: &str, sink: &mut dyn MessageSink) -> Disposition {
        let line = line.trim_end();
        let Some(command) = self
            .command_processors
            .iter()
            .find_map(|processor| {
                let command = processor.try_match(line)?;
                debug!(processor = processor.name(), ?command, "recognized command");
                Some(command)
            })
        else {
            return Disposition::Unhandled;
        };

        let disposition = command.disposition();
        self.run_command(command, sink);
        disposition
    }

    fn apply_fact(&mut self, fact: Fact, sink: &mut dyn MessageSink) {
        match fact {
            Fact::CostTableHeader { skill } => {
                self.store.register_skill(skill.clone());
                self.session.cost_table_skill = Some(skill);
            }
            Fact::CostRow { entries } => {
                let Some(skill) = &self.session.cost_table_skill else {
                    debug!("cost row outside a cost table, ignored");
                    return;
                };
                for (percent, cost) in entries {
                    self.store.record_cost(skill, percent, cost);
                }
            }
            Fact::SkillStatusRow {
                skill,
                current,
                maximum,
            } => self.store.set_status(skill, current, maximum),
            Fact::SkillTrained { skill, percent } => {
                self.store.set_current_percent(skill, percent);
            }
            Fact::PartialTraining { skill } => {
                let count = self.store.record_partial_training(skill.clone());
                info!(
                    %skill,
                    count,
                    sunk = self.sunk_experience(&skill),
                    "partial training recorded"
                );
            }
            Fact::ExperienceReport(report) => {
                self.session.last_report = Some(report);
                self.report_goal(report.experience, sink);
            }
            Fact::GuildLevel { level } => {
                let Some(guild) = self.session.guild.clone() else {
                    debug!(level, "guild level without a guild info command, ignored");
                    return;
                };
                self.store.set_guild_level(guild, level);
            }
            Fact::JoiningAbilities => self.session.ability_level = crate::session::JOINING_LEVEL,
            Fact::LevelHeading { level } => self.session.ability_level = level,
            Fact::TrainingCeiling { skill, max_percent } => {
                let Some(guild) = self.session.guild.clone() else {
                    debug!(%skill, "training ceiling without a guild info command, ignored");
                    return;
                };
                let level = self.session.ability_level;
                self.store
                    .add_ceiling(SkillCeiling::new(guild, skill, level, max_percent));
            }
        }
    }

    fn report_goal(&self, experience: u64, sink: &mut dyn MessageSink) {
        match evaluate_goal(&self.store, experience) {
            Ok(report) => sink.print(&report.to_string()),
            Err(err) if err.is_reportable() => {
                warn!(error = %err, "goal could not be evaluated");
                sink.print(&err.to_string());
            }
            Err(err) => debug!(error = %err, "goal not evaluated"),
        }
    }

    fn run_command(&mut self, command: Command, sink: &mut dyn MessageSink) {
        match command {
            Command::GuildInfo { guild } => {
                debug!(%guild, "reading guild info");
                self.session.enter_guild(guild);
            }
            Command::ListGoals => {
                let goal = self.store.goal().map(|goal| &goal.skill);
                for skill in self.store.skills() {
                    if Some(skill) == goal {
                        sink.print(&format!("{} (*)", skill));
                    } else {
                        sink.print(skill.as_str());
                    }
                }
            }
            Command::SetGoal { skill } => {
                let goal = self.store.set_goal(skill);
                if goal.is_resolved() {
                    sink.print(&format!("Next goal: {}", goal.skill));
                } else {
                    sink.print(&format!("{} not in library", goal.skill));
                }
            }
        }
    }
}

impl std::fmt::Debug for GoalTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoalTracker")
            .field("session", &self.session)
            .field("config", &self.config)
            .field("output_matchers", &self.output_matchers.len())
            .field("command_processors", &self.command_processors.len())
            .finish_non_exhaustive()
    }
}
