use std::collections::{BTreeMap, BTreeSet};

use crate::identity::ResolvedIdentity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinChange {
    Added {
        name: String,
        identity: ResolvedIdentity,
    },
    Removed {
        name: String,
        identity: ResolvedIdentity,
    },
    Changed {
        name: String,
        from: ResolvedIdentity,
        to: ResolvedIdentity,
    },
}

impl PinChange {
    pub fn name(&self) -> &str {
        match self {
            Self::Added { name, .. } | Self::Removed { name, .. } | Self::Changed { name, .. } => {
                name
            }
        }
    }

    pub fn render_line(&self, verbose: bool) -> String {
        match self {
            Self::Added { name, identity } => format!("+ {name} {}", identity.render(verbose)),
            Self::Removed { name, identity } => format!("- {name} {}", identity.render(verbose)),
            Self::Changed { name, from, to } => {
                format!("~ {name} {} -> {}", from.render(verbose), to.render(verbose))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinChangeSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl PinChangeSummary {
    pub fn from_changes(changes: &[PinChange]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change {
                PinChange::Added { .. } => summary.added += 1,
                PinChange::Removed { .. } => summary.removed += 1,
                PinChange::Changed { .. } => summary.changed += 1,
            }
        }
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.changed == 0
    }
}

/// Compares two resolutions package by package. Packages whose identities
/// are structurally equal are left out; the result is ordered by name.
pub fn diff_resolutions(
    before: &BTreeMap<String, ResolvedIdentity>,
    after: &BTreeMap<String, ResolvedIdentity>,
) -> Vec<PinChange> {
    let names: BTreeSet<&String> = before.keys().chain(after.keys()).collect();

    names
        .into_iter()
        .filter_map(|name| match (before.get(name), after.get(name)) {
            (None, Some(identity)) => Some(PinChange::Added {
                name: name.clone(),
                identity: identity.clone(),
            }),
            (Some(identity), None) => Some(PinChange::Removed {
                name: name.clone(),
                identity: identity.clone(),
            }),
            (Some(from), Some(to)) if from != to => Some(PinChange::Changed {
                name: name.clone(),
                from: from.clone(),
                to: to.clone(),
            }),
            _ => None,
        })
        .collect()
}
