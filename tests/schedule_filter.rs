use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use big12_terminal::csv_ingest::{parse_csv_to_rows, schedule_rows_to_matches};
use big12_terminal::schedule::{build_facets, filter, summarize};
use big12_terminal::state::{FilterCriteria, LeagueData, MatchRecord};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_matches() -> Vec<MatchRecord> {
    schedule_rows_to_matches(&parse_csv_to_rows(&read_fixture("head2head.csv")))
}

fn record(
    date: Option<&str>,
    team1: &str,
    team2: &str,
    score1: u32,
    score2: u32,
    game_type: &str,
) -> MatchRecord {
    MatchRecord {
        raw_date: date.unwrap_or("").to_string(),
        date: date.and_then(|raw| big12_terminal::csv_ingest::parse_date_mdy(raw)),
        team1: team1.to_string(),
        team2: team2.to_string(),
        score1,
        score2,
        game_type: game_type.to_string(),
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

#[test]
fn facets_are_distinct_and_ordered() {
    let facets = build_facets(&fixture_matches());
    assert_eq!(
        facets.teams,
        vec!["Cyclones", "Jayhawks", "Longhorns", "Sooners", "Wildcats"]
    );
    assert_eq!(facets.years, vec![2025, 2024]);
    assert_eq!(facets.game_types, vec!["Exhibition", "Playoff", "Season"]);
}

#[test]
fn default_criteria_return_everything_most_recent_first() {
    let matches = fixture_matches();
    let filtered = filter(&matches, &FilterCriteria::default());
    assert_eq!(filtered.len(), matches.len());
    assert_eq!(filtered[0].date, Some(ymd(2025, 1, 4)));
    assert_eq!(filtered[1].date, Some(ymd(2024, 12, 7)));

    // Undated records sort strictly last, keeping their ingest order.
    let tail: Vec<&str> = filtered[filtered.len() - 2..]
        .iter()
        .map(|m| m.team1.as_str())
        .collect();
    assert_eq!(tail, vec!["Cyclones", "Jayhawks"]);
}

#[test]
fn team_clause_matches_either_side() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        team_a: Some("Wildcats".to_string()),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert_eq!(filtered.len(), 3);
    assert!(
        filtered
            .iter()
            .all(|m| m.team1 == "Wildcats" || m.team2 == "Wildcats")
    );
}

#[test]
fn year_clause_never_matches_undated_records() {
    let matches = vec![
        record(Some("6/1/24"), "A", "B", 10, 7, "Season"),
        record(None, "A", "B", 3, 0, "Season"),
        record(Some("bad"), "A", "B", 3, 0, "Season"),
    ];
    let criteria = FilterCriteria {
        year: Some(2024),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, Some(ymd(2024, 6, 1)));
}

#[test]
fn game_type_clause_is_exact() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        game_type: Some("Playoff".to_string()),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|m| m.game_type == "Playoff"));

    let criteria = FilterCriteria {
        game_type: Some("playoff".to_string()),
        ..FilterCriteria::default()
    };
    assert!(filter(&matches, &criteria).is_empty());
}

#[test]
fn search_is_case_insensitive_and_covers_game_type() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        search_text: "  EXHIBITION ".to_string(),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].team1, "Jayhawks");

    let criteria = FilterCriteria {
        search_text: "horn".to_string(),
        ..FilterCriteria::default()
    };
    assert_eq!(filter(&matches, &criteria).len(), 5);
}

#[test]
fn clauses_combine_conjunctively() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        team_a: Some("Longhorns".to_string()),
        team_b: Some("Sooners".to_string()),
        year: Some(2024),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].date, Some(ymd(2024, 9, 7)));
}

#[test]
fn empty_result_is_a_valid_state() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        team_a: Some("Nobody".to_string()),
        ..FilterCriteria::default()
    };
    let filtered = filter(&matches, &criteria);
    assert!(filtered.is_empty());

    let summary = summarize(&filtered, Some("Nobody"), None);
    assert_eq!(summary.total_games, 0);
    assert_eq!(summary.most_recent, None);
}

#[test]
fn pair_summary_attributes_wins_and_points() {
    // A beat B 21-14, then beat them again 17-10 from the other side.
    let matches = vec![
        record(Some("9/7/24"), "A", "B", 21, 14, "Season"),
        record(Some("1/4/25"), "B", "A", 10, 17, "Playoff"),
    ];
    let filtered = filter(&matches, &FilterCriteria::default());
    let summary = summarize(&filtered, Some("A"), Some("B"));

    assert_eq!(summary.total_games, 2);
    assert_eq!(summary.most_recent, Some(ymd(2025, 1, 4)));
    let pair = summary.pair.expect("pair stats for a concrete pair");
    assert_eq!(pair.wins_a, 2);
    assert_eq!(pair.wins_b, Some(0));
    assert_eq!(pair.points_for_a, 38);
    assert_eq!(pair.points_for_b, Some(24));
}

#[test]
fn overall_summary_has_no_pair_stats() {
    let matches = fixture_matches();
    let filtered = filter(&matches, &FilterCriteria::default());
    let summary = summarize(&filtered, None, None);
    assert_eq!(summary.total_games, 7);
    assert_eq!(summary.most_recent, Some(ymd(2025, 1, 4)));
    assert!(summary.pair.is_none());
}

#[test]
fn one_sided_summary_reports_b_as_not_applicable() {
    let matches = fixture_matches();
    let criteria = FilterCriteria {
        team_a: Some("Longhorns".to_string()),
        ..FilterCriteria::default()
    };
    let (filtered, summary) = LeagueData {
        matches,
        standings_rows: Vec::new(),
    }
    .query(&criteria);

    assert_eq!(filtered.len(), 5);
    let pair = summary.pair.expect("pair stats when one team is concrete");
    // Wins: 21-14, 30-27, 17-10, 9-3; the 17-17 tie credits nobody.
    assert_eq!(pair.wins_a, 4);
    assert_eq!(pair.points_for_a, 21 + 17 + 30 + 9 + 17);
    assert_eq!(pair.wins_b, None);
    assert_eq!(pair.points_for_b, None);
}

#[test]
fn ties_credit_neither_side() {
    let matches = vec![record(Some("10/12/24"), "A", "B", 17, 17, "Season")];
    let summary = summarize(&matches, Some("A"), Some("B"));
    let pair = summary.pair.expect("pair stats");
    assert_eq!(pair.wins_a, 0);
    assert_eq!(pair.wins_b, Some(0));
    assert_eq!(pair.points_for_a, 17);
    assert_eq!(pair.points_for_b, Some(17));
}

#[test]
fn most_recent_is_none_when_all_dates_are_missing() {
    let matches = vec![record(None, "A", "B", 1, 0, "")];
    let filtered = filter(&matches, &FilterCriteria::default());
    let summary = summarize(&filtered, None, None);
    assert_eq!(summary.total_games, 1);
    assert_eq!(summary.most_recent, None);
}
