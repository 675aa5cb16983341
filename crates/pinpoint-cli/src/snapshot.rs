use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use pinpoint_core::ResolvedIdentity;
use serde::Deserialize;

/// Package name to resolved pin, as read from a `[pins]` TOML table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct ResolutionSnapshot {
    #[serde(default)]
    pub(crate) pins: BTreeMap<String, ResolvedIdentity>,
}

impl ResolutionSnapshot {
    pub(crate) fn from_toml_str(input: &str) -> Result<Self> {
        let snapshot: Self =
            toml::from_str(input).context("failed to parse resolution snapshot")?;
        for name in snapshot.pins.keys() {
            if name.trim().is_empty() {
                return Err(anyhow!("package name must not be empty"));
            }
        }
        Ok(snapshot)
    }
}

pub(crate) fn load_snapshot(path: &Path) -> Result<ResolutionSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read resolution snapshot: {}", path.display()))?;
    ResolutionSnapshot::from_toml_str(&raw)
        .with_context(|| format!("invalid resolution snapshot: {}", path.display()))
}
