use anyhow::{Context, Result};
use pinpoint_core::{diff_resolutions, PinChange, PinChangeSummary};
use serde::Serialize;

use crate::render::{
    added_style, changed_style, colorize, package_style, removed_style, render_status_line,
    OutputStyle,
};
use crate::snapshot::ResolutionSnapshot;

#[derive(Debug, Serialize)]
struct DescribeEntry<'a> {
    name: &'a str,
    kind: &'static str,
    display: String,
    revision: Option<&'a str>,
    branch: Option<&'a str>,
    version: Option<String>,
}

/// Lines printed by `describe`: the JSON document, a warning for an empty
/// snapshot, or one line per package.
pub(crate) fn format_describe_output(
    snapshot: &ResolutionSnapshot,
    verbose: bool,
    json: bool,
    style: OutputStyle,
) -> Result<Vec<String>> {
    if json {
        return Ok(vec![format_describe_json(snapshot)?]);
    }
    if snapshot.pins.is_empty() {
        return Ok(vec![render_status_line(
            style,
            "warn",
            "No resolved packages",
        )]);
    }
    Ok(format_describe_lines(snapshot, verbose, style))
}

pub(crate) fn format_describe_lines(
    snapshot: &ResolutionSnapshot,
    verbose: bool,
    style: OutputStyle,
) -> Vec<String> {
    snapshot
        .pins
        .iter()
        .map(|(name, identity)| {
            format!(
                "{} {}",
                colorize(style, package_style(), name),
                identity.render(verbose)
            )
        })
        .collect()
}

pub(crate) fn format_describe_json(snapshot: &ResolutionSnapshot) -> Result<String> {
    let entries = snapshot
        .pins
        .iter()
        .map(|(name, identity)| DescribeEntry {
            name,
            kind: identity.kind().as_str(),
            display: identity.short_display().to_string(),
            revision: identity.revision(),
            branch: identity.branch(),
            version: identity.version().map(ToString::to_string),
        })
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&entries).context("failed to serialize describe output")
}

pub(crate) fn format_diff_lines(
    before: &ResolutionSnapshot,
    after: &ResolutionSnapshot,
    verbose: bool,
    style: OutputStyle,
) -> Vec<String> {
    let changes = diff_resolutions(&before.pins, &after.pins);
    let summary = PinChangeSummary::from_changes(&changes);
    if summary.is_empty() {
        return vec![render_status_line(style, "ok", "No pin changes")];
    }

    let mut lines = changes
        .iter()
        .map(|change| {
            let paint = match change {
                PinChange::Added { .. } => added_style(),
                PinChange::Removed { .. } => removed_style(),
                PinChange::Changed { .. } => changed_style(),
            };
            colorize(style, paint, &change.render_line(verbose))
        })
        .collect::<Vec<_>>();
    lines.push(format_diff_summary_line(summary));
    lines
}

fn format_diff_summary_line(summary: PinChangeSummary) -> String {
    format!(
        "added={} removed={} changed={}",
        summary.added, summary.removed, summary.changed
    )
}
