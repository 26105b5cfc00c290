//! Trained-percent status of a skill.

use serde::{Deserialize, Serialize};

/// Percent at which a skill counts as fully trained.
pub const FULL_PERCENT: u32 = 100;

/// A percent reading from the game, which may be the `(n/a)` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Percent {
    Value(u32),
    /// The game printed `(n/a)`: nothing further can be trained.
    NotApplicable,
}

impl Percent {
    /// The numeric value, unless the reading was `(n/a)`.
    pub fn value(self) -> Option<u32> {
        match self {
            Percent::Value(v) => Some(v),
            Percent::NotApplicable => None,
        }
    }

    /// Fully trained, or reported as not applicable.
    pub fn is_full(self) -> bool {
        match self {
            Percent::Value(v) => v >= FULL_PERCENT,
            Percent::NotApplicable => true,
        }
    }

    /// The next percent to train, if there is one.
    pub fn next(self) -> Option<u32> {
        if self.is_full() {
            return None;
        }
        self.value().map(|v| v + 1)
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::Value(0)
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Percent::Value(v) => write!(f, "{}", v),
            Percent::NotApplicable => f.write_str("(n/a)"),
        }
    }
}

/// What is known about the player's progress in one skill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStatus {
    /// Currently trained percent.
    pub current: Percent,

    /// Maximum the player's race allows, as reported by the train listing.
    /// `None` when never reported or reported as `(n/a)`.
    #[serde(default)]
    pub maximum: Option<u32>,

    /// Partial-training events recorded without a percent increase.
    #[serde(default)]
    pub partial_trainings: u32,
}

impl SkillStatus {
    /// Create a status with the given current percent.
    pub fn new(current: Percent) -> Self {
        Self {
            current,
            maximum: None,
            partial_trainings: 0,
        }
    }

    /// Set the reported maximum.
    pub fn with_maximum(mut self, maximum: Option<u32>) -> Self {
        self.maximum = maximum;
        self
    }

    pub fn is_full(&self) -> bool {
        self.current.is_full()
    }

    /// Record one partial-training event, returning the new count.
    pub fn record_partial_training(&mut self) -> u32 {
        self.partial_trainings = self.partial_trainings.saturating_add(1);
        self.partial_trainings
    }

    /// Experience spent on partial training, given the charge per event.
    pub fn sunk_experience(&self, cost_per_event: u64) -> u64 {
        u64::from(self.partial_trainings).saturating_mul(cost_per_event)
    }
}
