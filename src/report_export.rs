use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::state::{HeadToHeadSummary, MatchRecord, ScheduleFacets, StandingsTable};

/// Everything the page-shaped views render, bundled for downstream tooling.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub standings: StandingsTable,
    pub facets: ScheduleFacets,
    pub matches: Vec<MatchRecord>,
    pub summary: HeadToHeadSummary,
}

/// Write the report as pretty JSON, atomically (tmp file then rename) so a
/// half-written file never lands at the target path.
pub fn export_report(path: &Path, report: &LeagueReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write report {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap report into {}", path.display()))?;
    Ok(())
}
