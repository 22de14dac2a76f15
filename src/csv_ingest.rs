use std::collections::HashMap;

use chrono::{Days, Months, NaiveDate};

use crate::state::MatchRecord;

/// Split raw CSV text into one header-keyed map per non-empty data line.
///
/// The first non-empty line is the header; header names are trimmed and define
/// the column order. Cells are split on `','` with no quoting support (fields
/// containing literal commas will misalign; accepted limitation of the source
/// format). Missing trailing cells map to the empty string, extra cells beyond
/// the header are ignored. Empty or garbage input yields an empty vec.
pub fn parse_csv_to_rows(raw: &str) -> Vec<HashMap<String, String>> {
    let mut lines = raw.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    lines
        .map(|line| {
            let cells: Vec<&str> = line.split(',').collect();
            headers
                .iter()
                .enumerate()
                .map(|(idx, name)| {
                    let value = cells.get(idx).copied().unwrap_or("");
                    (name.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}

/// Positional variant for sources whose header row carries no usable names:
/// the first non-empty line is discarded unconditionally and every remaining
/// line becomes a vec of trimmed cells.
pub fn parse_csv_positional(raw: &str) -> Vec<Vec<String>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .skip(1)
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

/// Parse `m/d/y` or `m/d/yy` into a date. Two-digit years land in the 2000s.
/// Anything that is not three numeric parts yields `None`. Out-of-range months
/// and days roll forward arithmetically (`2/31/24` is 2024-03-02), matching
/// the source data's historical handling; day-of-month validation is not this
/// layer's job.
pub fn parse_date_mdy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let month: u32 = parts[0].trim().parse().ok()?;
    let day: u32 = parts[1].trim().parse().ok()?;
    let mut year: i32 = parts[2].trim().parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    NaiveDate::from_ymd_opt(year, 1, 1)?
        .checked_add_months(Months::new(month.saturating_sub(1)))?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

/// Lenient integer score parse: leading digit run, 0 when missing or
/// non-numeric.
pub fn parse_score(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Lenient fractional points parse for the standings source, which allows
/// fractional scores. Leading numeric prefix, 0.0 on anything else.
pub fn parse_points(raw: &str) -> f64 {
    let prefix: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    prefix.parse().unwrap_or(0.0)
}

/// Map header-keyed schedule rows to `MatchRecord`s. Header aliases are probed
/// in order; rows missing a team name on either side are dropped.
pub fn schedule_rows_to_matches(rows: &[HashMap<String, String>]) -> Vec<MatchRecord> {
    rows.iter()
        .filter_map(|row| {
            let raw_date = pick_field(row, &["Date", "date"]).trim().to_string();
            let team1 = pick_field(row, &["Team 1", "Team1", "team1"])
                .trim()
                .to_string();
            let team2 = pick_field(row, &["Team 2", "Team2", "team2"])
                .trim()
                .to_string();
            if team1.is_empty() || team2.is_empty() {
                return None;
            }
            Some(MatchRecord {
                date: parse_date_mdy(&raw_date),
                raw_date,
                team1,
                team2,
                score1: parse_score(pick_field(row, &["Team 1 Score", "Score1"])),
                score2: parse_score(pick_field(row, &["Team 2 Score", "Score2"])),
                game_type: pick_field(row, &["Game Type", "Type"]).trim().to_string(),
            })
        })
        .collect()
}

fn pick_field<'a>(row: &'a HashMap<String, String>, keys: &[&str]) -> &'a str {
    for key in keys {
        if let Some(value) = row.get(*key) {
            if !value.trim().is_empty() {
                return value;
            }
        }
    }
    ""
}
