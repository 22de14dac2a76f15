use std::collections::BTreeSet;

use chrono::Datelike;

use crate::state::{FilterCriteria, HeadToHeadSummary, MatchRecord, PairStats, ScheduleFacets};

/// Derive the distinct filter options offered for the head-to-head view.
pub fn build_facets(matches: &[MatchRecord]) -> ScheduleFacets {
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut game_types: BTreeSet<&str> = BTreeSet::new();

    for record in matches {
        teams.insert(&record.team1);
        teams.insert(&record.team2);
        if let Some(date) = record.date {
            years.insert(date.year());
        }
        if !record.game_type.is_empty() {
            game_types.insert(&record.game_type);
        }
    }

    ScheduleFacets {
        teams: teams.into_iter().map(str::to_string).collect(),
        years: years.into_iter().rev().collect(),
        game_types: game_types.into_iter().map(str::to_string).collect(),
    }
}

/// Apply the criteria conjunctively and sort the survivors most-recent-first.
/// Undated matches sort last; equal dates keep their ingest order (the sort is
/// stable with no secondary key).
pub fn filter(matches: &[MatchRecord], criteria: &FilterCriteria) -> Vec<MatchRecord> {
    let search = criteria.search_text.trim().to_lowercase();
    let mut filtered: Vec<MatchRecord> = matches
        .iter()
        .filter(|record| matches_criteria(record, criteria, &search))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

fn matches_criteria(record: &MatchRecord, criteria: &FilterCriteria, search: &str) -> bool {
    // Team clauses are symmetric: a selected team may be on either side.
    if let Some(team_a) = criteria.team_a.as_deref() {
        if record.team1 != team_a && record.team2 != team_a {
            return false;
        }
    }
    if let Some(team_b) = criteria.team_b.as_deref() {
        if record.team1 != team_b && record.team2 != team_b {
            return false;
        }
    }
    // An undated match never satisfies a concrete year filter.
    if let Some(year) = criteria.year {
        if record.date.map(|date| date.year()) != Some(year) {
            return false;
        }
    }
    if let Some(game_type) = criteria.game_type.as_deref() {
        if record.game_type != game_type {
            return false;
        }
    }
    if !search.is_empty() {
        let hit = record.team1.to_lowercase().contains(search)
            || record.team2.to_lowercase().contains(search)
            || record.game_type.to_lowercase().contains(search);
        if !hit {
            return false;
        }
    }
    true
}

/// Derive the summary card values for an already-filtered, already-sorted
/// match set. With neither team selected only the overall counters are
/// produced; otherwise per-side wins and points-for accumulate from whichever
/// side of each record the team appears on.
pub fn summarize(
    filtered: &[MatchRecord],
    team_a: Option<&str>,
    team_b: Option<&str>,
) -> HeadToHeadSummary {
    let total_games = filtered.len();
    let most_recent = filtered.first().and_then(|record| record.date);

    if team_a.is_none() && team_b.is_none() {
        return HeadToHeadSummary {
            total_games,
            most_recent,
            pair: None,
        };
    }

    let mut wins_a = 0u32;
    let mut wins_b = 0u32;
    let mut points_for_a = 0u32;
    let mut points_for_b = 0u32;

    for record in filtered {
        if let Some(team) = team_a {
            if record.team1 == team {
                points_for_a += record.score1;
            }
            if record.team2 == team {
                points_for_a += record.score2;
            }
        }
        if let Some(team) = team_b {
            if record.team1 == team {
                points_for_b += record.score1;
            }
            if record.team2 == team {
                points_for_b += record.score2;
            }
        }

        // Ties credit neither side.
        if record.score1 > record.score2 {
            if team_a == Some(record.team1.as_str()) {
                wins_a += 1;
            }
            if team_b == Some(record.team1.as_str()) {
                wins_b += 1;
            }
        } else if record.score2 > record.score1 {
            if team_a == Some(record.team2.as_str()) {
                wins_a += 1;
            }
            if team_b == Some(record.team2.as_str()) {
                wins_b += 1;
            }
        }
    }

    HeadToHeadSummary {
        total_games,
        most_recent,
        pair: Some(PairStats {
            wins_a,
            points_for_a,
            wins_b: team_b.map(|_| wins_b),
            points_for_b: team_b.map(|_| points_for_b),
        }),
    }
}
