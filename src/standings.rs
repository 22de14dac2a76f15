use std::collections::HashMap;

use crate::csv_ingest;
use crate::state::{Division, DivisionGroup, DivisionMatchRow, StandingsTable, TeamStanding};

/// Highlight cutoff for the standings tables (playoff field size). Overridable
/// by callers; `main` reads `HIGHLIGHT_TOP_N` from the environment.
pub const DEFAULT_HIGHLIGHT_TOP: usize = 7;

/// Map positional standings cells (`team1, team2, score1, score2, division1,
/// division2`) to rows. Rows missing a team name on either side are dropped;
/// scores default to 0.
pub fn rows_from_cells(rows: &[Vec<String>]) -> Vec<DivisionMatchRow> {
    rows.iter()
        .filter_map(|cells| {
            let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
            let team1 = cell(0).to_string();
            let team2 = cell(1).to_string();
            if team1.is_empty() || team2.is_empty() {
                return None;
            }
            Some(DivisionMatchRow {
                team1,
                team2,
                score1: csv_ingest::parse_points(cell(2)),
                score2: csv_ingest::parse_points(cell(3)),
                division1: cell(4).to_string(),
                division2: cell(5).to_string(),
            })
        })
        .collect()
}

/// Fold match rows into ranked, division-partitioned standings.
///
/// Each team keeps the division it was first seen with. Points-for accumulates
/// unconditionally; the higher score takes a win and the lower a loss, ties
/// credit neither. Teams are ranked globally by (wins, points-for) descending
/// with first-seen order breaking full ties, and the top `highlight_top` of
/// that global ranking are marked before partitioning, so a team outside the
/// three known divisions still consumes a highlight slot even though it is
/// dropped from the output groups. Group order preserves the global ranking.
pub fn aggregate(rows: &[DivisionMatchRow], highlight_top: usize) -> StandingsTable {
    let mut first_seen: Vec<String> = Vec::new();
    let mut table: HashMap<String, TeamStanding> = HashMap::new();

    for row in rows {
        for (team, division) in [(&row.team1, &row.division1), (&row.team2, &row.division2)] {
            if !table.contains_key(team) {
                first_seen.push(team.clone());
                table.insert(
                    team.clone(),
                    TeamStanding {
                        team: team.clone(),
                        wins: 0,
                        losses: 0,
                        points_for: 0.0,
                        division: division.trim().to_string(),
                        highlighted: false,
                    },
                );
            }
        }

        if let Some(entry) = table.get_mut(&row.team1) {
            entry.points_for += row.score1;
        }
        if let Some(entry) = table.get_mut(&row.team2) {
            entry.points_for += row.score2;
        }

        let (winner, loser) = if row.score1 > row.score2 {
            (&row.team1, &row.team2)
        } else if row.score2 > row.score1 {
            (&row.team2, &row.team1)
        } else {
            continue;
        };
        if let Some(entry) = table.get_mut(winner) {
            entry.wins += 1;
        }
        if let Some(entry) = table.get_mut(loser) {
            entry.losses += 1;
        }
    }

    // First-seen order is the baseline the stable sort preserves through ties.
    let mut ranked: Vec<TeamStanding> = first_seen
        .iter()
        .filter_map(|team| table.remove(team))
        .collect();
    ranked.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.points_for.total_cmp(&a.points_for))
    });
    for standing in ranked.iter_mut().take(highlight_top) {
        standing.highlighted = true;
    }

    let groups = Division::ALL
        .iter()
        .map(|&division| DivisionGroup {
            division,
            teams: ranked
                .iter()
                .filter(|standing| Division::from_label(&standing.division) == Some(division))
                .cloned()
                .collect(),
        })
        .collect();

    StandingsTable { groups }
}
