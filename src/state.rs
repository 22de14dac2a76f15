use chrono::NaiveDate;
use serde::Serialize;

use crate::csv_ingest;
use crate::schedule;
use crate::standings;

/// One played or scheduled game from the head-to-head schedule source.
/// Immutable once ingested; both team fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    /// Date cell exactly as it appeared in the CSV, kept for display.
    pub raw_date: String,
    /// Parsed date; `None` when the raw cell was unparseable.
    pub date: Option<NaiveDate>,
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
    /// Free-form category ("Season", "Playoff", ...); may be empty.
    pub game_type: String,
}

/// Filter configuration for the head-to-head view. `None` means "all" for the
/// team/year/type clauses; all non-`None` clauses are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub year: Option<i32>,
    pub game_type: Option<String>,
    /// Case-insensitive substring match against team names and game type.
    /// Empty matches everything.
    pub search_text: String,
}

/// Distinct filter options derived from the full match collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleFacets {
    /// Ascending.
    pub teams: Vec<String>,
    /// Descending (most recent season first).
    pub years: Vec<i32>,
    /// Ascending; empty game types are not offered as options.
    pub game_types: Vec<String>,
}

/// Derived statistics for a filtered match set.
#[derive(Debug, Clone, Serialize)]
pub struct HeadToHeadSummary {
    pub total_games: usize,
    pub most_recent: Option<NaiveDate>,
    /// `None` when neither side of the pair is a concrete team.
    pub pair: Option<PairStats>,
}

/// Per-side wins and points-for. The B-side fields are `None` ("N/A") when
/// team B is unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairStats {
    pub wins_a: u32,
    pub points_for_a: u32,
    pub wins_b: Option<u32>,
    pub points_for_b: Option<u32>,
}

/// One row of the standings source: a match with both teams' divisions
/// attached. Scores here may be fractional.
#[derive(Debug, Clone, Serialize)]
pub struct DivisionMatchRow {
    pub team1: String,
    pub team2: String,
    pub score1: f64,
    pub score2: f64,
    pub division1: String,
    pub division2: String,
}

/// Divisions the standings presentation partitions by. Labels in the source
/// data match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Division {
    East,
    Central,
    West,
}

impl Division {
    pub const ALL: [Division; 3] = [Division::East, Division::Central, Division::West];

    pub fn from_label(label: &str) -> Option<Division> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("east") {
            Some(Division::East)
        } else if trimmed.eq_ignore_ascii_case("central") {
            Some(Division::Central)
        } else if trimmed.eq_ignore_ascii_case("west") {
            Some(Division::West)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Division::East => "East",
            Division::Central => "Central",
            Division::West => "West",
        }
    }
}

/// Aggregated record for one team. Recomputed from scratch on every
/// aggregation call, never incrementally updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub points_for: f64,
    /// First-seen division label, verbatim from the source.
    pub division: String,
    /// True for the globally top-ranked teams (playoff highlight).
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionGroup {
    pub division: Division,
    /// Global rank order, not re-ranked within the division.
    pub teams: Vec<TeamStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsTable {
    pub groups: Vec<DivisionGroup>,
}

/// Per-load aggregation context: owns everything parsed from the two CSV
/// sources and answers all queries against that snapshot. Built once per data
/// load; re-fetching means building a fresh one.
#[derive(Debug, Clone, Default)]
pub struct LeagueData {
    pub matches: Vec<MatchRecord>,
    pub standings_rows: Vec<DivisionMatchRow>,
}

impl LeagueData {
    /// Build the context from the raw text of the schedule and standings
    /// sources. Either input may be empty (e.g. after a failed fetch); the
    /// corresponding views simply come out empty.
    pub fn from_sources(schedule_csv: &str, standings_csv: &str) -> Self {
        let rows = csv_ingest::parse_csv_to_rows(schedule_csv);
        let matches = csv_ingest::schedule_rows_to_matches(&rows);
        let standings_rows =
            standings::rows_from_cells(&csv_ingest::parse_csv_positional(standings_csv));
        Self {
            matches,
            standings_rows,
        }
    }

    pub fn facets(&self) -> ScheduleFacets {
        schedule::build_facets(&self.matches)
    }

    /// Filter the match list and derive its summary. The returned matches are
    /// sorted most-recent-first with undated matches last.
    pub fn query(&self, criteria: &FilterCriteria) -> (Vec<MatchRecord>, HeadToHeadSummary) {
        let filtered = schedule::filter(&self.matches, criteria);
        let summary = schedule::summarize(
            &filtered,
            criteria.team_a.as_deref(),
            criteria.team_b.as_deref(),
        );
        (filtered, summary)
    }

    pub fn standings(&self, highlight_top: usize) -> StandingsTable {
        standings::aggregate(&self.standings_rows, highlight_top)
    }
}
