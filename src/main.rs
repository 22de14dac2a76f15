use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use big12_terminal::report_export::{self, LeagueReport};
use big12_terminal::source_fetch;
use big12_terminal::standings::DEFAULT_HIGHLIGHT_TOP;
use big12_terminal::state::{
    FilterCriteria, HeadToHeadSummary, LeagueData, MatchRecord, ScheduleFacets, StandingsTable,
};

struct Options {
    criteria: FilterCriteria,
    export: Option<PathBuf>,
    schedule_file: Option<PathBuf>,
    standings_file: Option<PathBuf>,
    limit: Option<usize>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let opts = parse_args()?;

    let schedule_csv = load_source(
        opts.schedule_file.as_deref(),
        source_fetch::fetch_schedule_csv,
        "match",
    );
    let standings_csv = load_source(
        opts.standings_file.as_deref(),
        source_fetch::fetch_standings_csv,
        "standings",
    );

    let data = LeagueData::from_sources(&schedule_csv, &standings_csv);
    let table = data.standings(env_highlight_top());
    let facets = data.facets();
    let (filtered, summary) = data.query(&opts.criteria);

    print_standings(&table);
    print_facets(&facets);
    print_matches(&filtered, opts.limit);
    print_summary(&summary, &opts.criteria, filtered.is_empty());

    if let Some(path) = &opts.export {
        let report = LeagueReport {
            standings: table,
            facets,
            matches: filtered,
            summary,
        };
        report_export::export_report(path, &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Read a source from disk when a file override was given, otherwise fetch it.
/// A load failure is reported once and degrades to empty input; every view
/// downstream handles an empty dataset.
fn load_source(path: Option<&Path>, fetch: fn() -> Result<String>, label: &str) -> String {
    let result = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => fetch(),
    };
    match result {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error loading {label} data.");
            eprintln!("  {err:#}");
            String::new()
        }
    }
}

fn env_highlight_top() -> usize {
    std::env::var("HIGHLIGHT_TOP_N")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(DEFAULT_HIGHLIGHT_TOP)
}

fn print_standings(table: &StandingsTable) {
    println!("League standings (* = playoff position)");
    for group in &table.groups {
        println!();
        println!("-- {} --", group.division.label());
        if group.teams.is_empty() {
            println!("  (no teams)");
            continue;
        }
        for standing in &group.teams {
            let marker = if standing.highlighted { '*' } else { ' ' };
            println!(
                " {marker} {:<24} {:>3}-{:<3} {:>8.1} PF",
                standing.team, standing.wins, standing.losses, standing.points_for
            );
        }
    }
    println!();
}

fn print_facets(facets: &ScheduleFacets) {
    println!("Teams: {}", facets.teams.len());
    let years = facets
        .years
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("Years: {}", if years.is_empty() { "n/a".into() } else { years });
    println!("Game types: {}", facets.game_types.join(", "));
    println!();
}

fn print_matches(filtered: &[MatchRecord], limit: Option<usize>) {
    if filtered.is_empty() {
        println!("No matches found.");
        return;
    }
    let shown = limit.unwrap_or(filtered.len()).min(filtered.len());
    for record in &filtered[..shown] {
        let winner1 = if record.score1 > record.score2 { "*" } else { "" };
        let winner2 = if record.score2 > record.score1 { "*" } else { "" };
        println!(
            "{:<10} {:<21} {:<21} {:>3} - {:<3} {}",
            display_date(record),
            format!("{}{winner1}", record.team1),
            format!("{}{winner2}", record.team2),
            record.score1,
            record.score2,
            record.game_type
        );
    }
    if shown < filtered.len() {
        println!("... {} more", filtered.len() - shown);
    }
    println!();
}

fn print_summary(summary: &HeadToHeadSummary, criteria: &FilterCriteria, empty: bool) {
    if empty {
        return;
    }
    println!("{} games", summary.total_games);
    if let Some(date) = summary.most_recent {
        println!("Most recent: {}", date.format("%-m/%-d/%Y"));
    }
    let Some(pair) = &summary.pair else {
        return;
    };

    let label_a = criteria.team_a.as_deref().unwrap_or("All Teams");
    match (pair.wins_b, pair.points_for_b) {
        (Some(wins_b), Some(points_for_b)) => {
            let label_b = criteria.team_b.as_deref().unwrap_or("All Teams");
            println!("{label_a}: {} - {wins_b}, {} PF", pair.wins_a, pair.points_for_a);
            println!("{label_b}: {wins_b} - {}, {points_for_b} PF", pair.wins_a);
        }
        _ => {
            println!("{label_a}: {} wins, {} PF", pair.wins_a, pair.points_for_a);
        }
    }
}

fn display_date(record: &MatchRecord) -> String {
    match record.date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => record.raw_date.clone(),
    }
}

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        criteria: FilterCriteria::default(),
        export: None,
        schedule_file: None,
        standings_file: None,
        limit: None,
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value.to_string())),
            None => (arg.as_str(), None),
        };
        let mut value = || -> Result<String> {
            if let Some(inline) = inline.clone() {
                return Ok(inline);
            }
            idx += 1;
            args.get(idx)
                .cloned()
                .ok_or_else(|| anyhow!("missing value for {flag}"))
        };

        match flag {
            "--team-a" => opts.criteria.team_a = Some(value()?),
            "--team-b" => opts.criteria.team_b = Some(value()?),
            "--year" => {
                let raw = value()?;
                let year = raw
                    .trim()
                    .parse::<i32>()
                    .with_context(|| format!("invalid year: {raw}"))?;
                opts.criteria.year = Some(year);
            }
            "--game-type" => opts.criteria.game_type = Some(value()?),
            "--search" => opts.criteria.search_text = value()?,
            "--export" => opts.export = Some(PathBuf::from(value()?)),
            "--schedule-file" => opts.schedule_file = Some(PathBuf::from(value()?)),
            "--standings-file" => opts.standings_file = Some(PathBuf::from(value()?)),
            "--limit" => {
                let raw = value()?;
                let limit = raw
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid limit: {raw}"))?;
                opts.limit = Some(limit);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(anyhow!("unknown flag: {other}")),
        }
        idx += 1;
    }

    Ok(opts)
}

fn print_usage() {
    println!("big12_terminal — league standings and head-to-head viewer");
    println!();
    println!("  --team-a NAME         restrict matches to ones involving NAME");
    println!("  --team-b NAME         second side of the head-to-head pair");
    println!("  --year YYYY           only matches from that year");
    println!("  --game-type TYPE      exact game type (e.g. Season, Playoff)");
    println!("  --search TEXT         case-insensitive text filter");
    println!("  --limit N             cap the printed match table at N rows");
    println!("  --export PATH         write the full report as JSON");
    println!("  --schedule-file PATH  read the schedule CSV from disk");
    println!("  --standings-file PATH read the standings CSV from disk");
    println!();
    println!("Env: SCHEDULE_CSV_URL, STANDINGS_CSV_URL, HIGHLIGHT_TOP_N");
}
