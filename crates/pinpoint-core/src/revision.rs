use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Number of characters kept when a revision is abbreviated for display.
pub const SHORT_REVISION_LEN: usize = 7;

/// Commit a branch pin resolved to. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchRevision(String);

impl BranchRevision {
    pub fn new(value: impl Into<String>) -> anyhow::Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(anyhow!("branch revision must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First [`SHORT_REVISION_LEN`] characters, or the whole revision when it
    /// is shorter than that.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_REVISION_LEN) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for BranchRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BranchRevision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for BranchRevision {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input)
    }
}

impl TryFrom<String> for BranchRevision {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchRevision> for String {
    fn from(revision: BranchRevision) -> Self {
        revision.0
    }
}
