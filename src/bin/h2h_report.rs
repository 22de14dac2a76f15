use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use big12_terminal::source_fetch;
use big12_terminal::state::{FilterCriteria, LeagueData};

/// Quick head-to-head report for one team (or a pair) straight from the
/// schedule source, without the standings fetch.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut team_a: Option<String> = None;
    let mut team_b: Option<String> = None;
    let mut schedule_file: Option<PathBuf> = None;

    for arg in &args {
        if let Some(path) = arg.strip_prefix("--schedule-file=") {
            schedule_file = Some(PathBuf::from(path));
        } else if arg.starts_with("--") {
            return Err(anyhow!("unknown flag: {arg}"));
        } else if team_a.is_none() {
            team_a = Some(arg.clone());
        } else if team_b.is_none() {
            team_b = Some(arg.clone());
        } else {
            return Err(anyhow!("unexpected argument: {arg}"));
        }
    }

    let Some(team_a) = team_a else {
        return Err(anyhow!(
            "usage: h2h_report TEAM_A [TEAM_B] [--schedule-file=PATH]"
        ));
    };

    let schedule_csv = match &schedule_file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => source_fetch::fetch_schedule_csv()?,
    };

    let data = LeagueData::from_sources(&schedule_csv, "");
    let criteria = FilterCriteria {
        team_a: Some(team_a.clone()),
        team_b: team_b.clone(),
        ..FilterCriteria::default()
    };
    let (filtered, summary) = data.query(&criteria);

    match &team_b {
        Some(team_b) => println!("{team_a} vs {team_b}: {} games", summary.total_games),
        None => println!("{team_a}: {} games", summary.total_games),
    }
    if let Some(date) = summary.most_recent {
        println!("Most recent: {}", date.format("%-m/%-d/%Y"));
    }
    if let Some(pair) = &summary.pair {
        match (pair.wins_b, pair.points_for_b) {
            (Some(wins_b), Some(points_for_b)) => {
                println!("Record: {} - {wins_b}", pair.wins_a);
                println!("Points for: {} / {points_for_b}", pair.points_for_a);
            }
            _ => {
                println!("Record: {} wins", pair.wins_a);
                println!("Points for: {}", pair.points_for_a);
            }
        }
    }

    println!();
    for record in filtered.iter().take(10) {
        let date = match record.date {
            Some(date) => date.format("%-m/%-d/%Y").to_string(),
            None => record.raw_date.clone(),
        };
        println!(
            "{date:<10} {} {} - {} {} {}",
            record.team1, record.score1, record.score2, record.team2, record.game_type
        );
    }
    if filtered.len() > 10 {
        println!("... {} more", filtered.len() - 10);
    }

    Ok(())
}
