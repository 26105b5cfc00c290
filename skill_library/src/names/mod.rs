//! Normalized identifiers for skills and guilds.
//!
//! Names arrive from typed commands and from several different output formats,
//! with arbitrary case and spacing. Both identifier types normalize on
//! construction, so two values compare equal exactly when their normalized
//! text does.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Collapse whitespace runs to a single space, trim, and lowercase.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Name of a trainable skill or spell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillName(String);

impl SkillName {
    /// Create a skill name, normalizing the given text.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize(name.as_ref()))
    }

    /// The normalized skill name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when normalization left nothing behind.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SkillName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for SkillName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<SkillName> for String {
    fn from(name: SkillName) -> Self {
        name.0
    }
}

impl Borrow<str> for SkillName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SkillName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a guild, as typed in its `<guild> info` command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct GuildName(String);

impl GuildName {
    /// Create a guild name, normalizing the given text.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize(name.as_ref()))
    }

    /// The normalized guild name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GuildName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for GuildName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<GuildName> for String {
    fn from(name: GuildName) -> Self {
        name.0
    }
}

impl Borrow<str> for GuildName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GuildName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
