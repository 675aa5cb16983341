use std::fmt;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::revision::BranchRevision;

/// The concrete source state a dependency was resolved to.
///
/// A resolution is pinned by revision alone, by version (with the revision
/// when the source is VCS-backed), or by branch at a known revision. Only a
/// branch pin requires its revision, and it must not be empty; other revisions
/// are kept exactly as supplied.
///
/// Render with [`Self::short_display`] for terminal output or
/// [`Self::debug_display`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ResolvedIdentity {
    #[serde(rename = "revision")]
    ByRevision { revision: String },
    #[serde(rename = "version")]
    ByVersion {
        version: Version,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        revision: Option<String>,
    },
    #[serde(rename = "branch")]
    ByBranch {
        branch: String,
        revision: BranchRevision,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedKind {
    Revision,
    Version,
    Branch,
}

impl ResolvedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revision => "revision",
            Self::Version => "version",
            Self::Branch => "branch",
        }
    }
}

impl ResolvedIdentity {
    pub fn by_revision(revision: impl Into<String>) -> Self {
        Self::ByRevision {
            revision: revision.into(),
        }
    }

    pub fn by_version(version: Version, revision: Option<String>) -> Self {
        Self::ByVersion { version, revision }
    }

    pub fn by_branch(branch: impl Into<String>, revision: BranchRevision) -> Self {
        Self::ByBranch {
            branch: branch.into(),
            revision,
        }
    }

    pub fn kind(&self) -> ResolvedKind {
        match self {
            Self::ByRevision { .. } => ResolvedKind::Revision,
            Self::ByVersion { .. } => ResolvedKind::Version,
            Self::ByBranch { .. } => ResolvedKind::Branch,
        }
    }

    pub fn revision(&self) -> Option<&str> {
        match self {
            Self::ByRevision { revision } => Some(revision.as_str()),
            Self::ByVersion { revision, .. } => revision.as_deref(),
            Self::ByBranch { revision, .. } => Some(revision.as_str()),
        }
    }

    pub fn branch(&self) -> Option<&str> {
        match self {
            Self::ByBranch { branch, .. } => Some(branch.as_str()),
            Self::ByRevision { .. } | Self::ByVersion { .. } => None,
        }
    }

    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::ByVersion { version, .. } => Some(version),
            Self::ByRevision { .. } | Self::ByBranch { .. } => None,
        }
    }

    /// Compact form for end users: abbreviated branch revisions, no revision
    /// next to a version.
    pub fn short_display(&self) -> ShortDisplay<'_> {
        ShortDisplay { identity: self }
    }

    /// Unambiguous form for logs: full revisions, `unknown` when a version
    /// has none.
    pub fn debug_display(&self) -> DebugDisplay<'_> {
        DebugDisplay { identity: self }
    }

    /// Debug form when `verbose`, short form otherwise.
    pub fn render(&self, verbose: bool) -> String {
        if verbose {
            self.debug_display().to_string()
        } else {
            self.short_display().to_string()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShortDisplay<'a> {
    identity: &'a ResolvedIdentity,
}

impl fmt::Display for ShortDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity {
            ResolvedIdentity::ByRevision { revision } => write!(f, "{revision}"),
            ResolvedIdentity::ByVersion { version, .. } => write!(f, "{version}"),
            ResolvedIdentity::ByBranch { branch, revision } => {
                write!(f, "{branch} ({})", revision.short())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DebugDisplay<'a> {
    identity: &'a ResolvedIdentity,
}

impl fmt::Display for DebugDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.identity {
            ResolvedIdentity::ByRevision { revision } => write!(f, "{revision}"),
            ResolvedIdentity::ByVersion { version, revision } => {
                let revision = revision.as_deref().unwrap_or("unknown");
                write!(f, "{version} ({revision})")
            }
            ResolvedIdentity::ByBranch { branch, revision } => write!(f, "{branch} ({revision})"),
        }
    }
}
