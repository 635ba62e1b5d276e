use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;
use chrono::{Datelike, NaiveDate};

use lawdesk_cal::{
    calendar::{date_utils::first_of_month, DayStatus},
    storage::config::Config,
    sync::{
        availability_api::{HttpAvailabilityClient, MonthKey},
        month_sync::fetch_snapshot,
    },
    ui::month_view::{build_month_grid, GridRequest, MonthGrid},
};

pub const USAGE: &str = "Usage: lawdesk-cal [--month [YYYY-MM]] [--resource ID]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Interactive { resource_id: Option<String> },
    PrintMonth(MonthKey),
    Help,
}

pub fn parse_cli_mode(today: NaiveDate) -> Result<CliMode, String> {
    parse_args(env::args().skip(1), today)
}

pub fn parse_args<I>(args: I, today: NaiveDate) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut resource_id = None;
    let mut month = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--month" => {
                let key = match args.next_if(|next| !next.starts_with("--")) {
                    Some(value) => parse_month(&value)?,
                    None => MonthKey::containing(today),
                };
                month = Some(key);
            }
            "--resource" => {
                let value = args
                    .next_if(|next| !next.starts_with("--"))
                    .ok_or_else(|| "--resource requires an id".to_string())?;
                resource_id = Some(value);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(match month {
        Some(key) => CliMode::PrintMonth(key.with_resource(resource_id)),
        None => CliMode::Interactive { resource_id },
    })
}

fn parse_month(value: &str) -> Result<MonthKey, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map(MonthKey::containing)
        .map_err(|_| format!("Invalid month '{}'. Use YYYY-MM.", value))
}

pub async fn run_month_mode(config: &Config, key: MonthKey, today: NaiveDate) -> anyhow::Result<()> {
    let options = config.grid_options().context("invalid calendar configuration")?;
    let client = HttpAvailabilityClient::new(config.api.base_url.clone()).with_token(config.token());

    let snapshot = fetch_snapshot(&client, key.clone()).await;
    if snapshot.is_none() {
        eprintln!("Availability could not be loaded; showing default opening hours.");
    }

    let grid = build_month_grid(
        &GridRequest::new(key.year, key.month, today)
            .with_snapshot(snapshot.as_ref())
            .with_options(options),
    );

    let text = format_month_text(&grid, key.resource_id.as_deref());
    display_with_pager(&text).context("failed to display month")
}

fn marker(status: DayStatus) -> char {
    match status {
        DayStatus::Padding => ' ',
        DayStatus::Holiday => 'x',
        DayStatus::Past => '-',
        DayStatus::Today => '*',
        DayStatus::Available => '+',
        DayStatus::Mixed => '~',
        DayStatus::Booked => '#',
    }
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Padding => "",
        DayStatus::Holiday => "closed",
        DayStatus::Past => "past",
        DayStatus::Today => "today",
        DayStatus::Available => "open",
        DayStatus::Mixed => "partly booked",
        DayStatus::Booked => "full",
    }
}

pub fn format_month_text(grid: &MonthGrid, resource_id: Option<&str>) -> String {
    let mut lines = Vec::new();
    let title = first_of_month(grid.year, grid.month).format("%B %Y").to_string();
    match resource_id {
        Some(resource) => lines.push(format!("Availability - {} ({})", title, resource)),
        None => lines.push(format!("Availability - {}", title)),
    }
    lines.push(String::new());
    lines.push(" Sun  Mon  Tue  Wed  Thu  Fri  Sat".to_string());

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| {
                if cell.belongs_to_displayed_month {
                    format!("  {:>2}{}", cell.date.day(), marker(cell.status()))
                } else {
                    "     ".to_string()
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    lines.push("+ open  ~ partly booked  # full  x closed  - past  * today".to_string());
    lines.push(String::new());

    for cell in grid.month_cells() {
        lines.push(format!(
            "{}  {:<13} {} open / {} booked",
            cell.iso_key,
            status_label(cell.status()),
            cell.available_count,
            cell.booked_count
        ));
    }

    lines.join("\n")
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let Ok(pager_value) = env::var("PAGER") else {
        println!("{text}");
        return Ok(());
    };
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawdesk_cal::calendar::{CalendarMonthSnapshot, DaySnapshot};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn no_arguments_starts_interactive_view() {
        let mode = parse_args(args(&[]), date(2024, 6, 5)).unwrap();

        assert_eq!(mode, CliMode::Interactive { resource_id: None });
    }

    #[test]
    fn month_without_value_uses_current_month() {
        let mode = parse_args(args(&["--month"]), date(2024, 6, 5)).unwrap();

        assert_eq!(mode, CliMode::PrintMonth(MonthKey::new(2024, 6)));
    }

    #[test]
    fn month_and_resource_are_combined() {
        let mode = parse_args(args(&["--month", "2025-02", "--resource", "17"]), date(2024, 6, 5)).unwrap();

        assert_eq!(
            mode,
            CliMode::PrintMonth(MonthKey::new(2025, 2).with_resource(Some("17".to_string())))
        );
    }

    #[test]
    fn month_flag_followed_by_flag_uses_current_month() {
        let mode = parse_args(args(&["--month", "--resource", "3"]), date(2024, 6, 5)).unwrap();

        assert_eq!(
            mode,
            CliMode::PrintMonth(MonthKey::new(2024, 6).with_resource(Some("3".to_string())))
        );
    }

    #[test]
    fn invalid_month_is_reported() {
        let result = parse_args(args(&["--month", "2025-13"]), date(2024, 6, 5));

        assert!(result.unwrap_err().contains("2025-13"));
    }

    #[test]
    fn resource_requires_value() {
        assert!(parse_args(args(&["--resource"]), date(2024, 6, 5)).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(parse_args(args(&["--agenda"]), date(2024, 6, 5)).is_err());
    }

    #[test]
    fn month_text_marks_days_by_status() {
        let snapshot = CalendarMonthSnapshot::new()
            .with_day("2024-06-10", DaySnapshot::new(2, 4))
            .with_day("2024-06-11", DaySnapshot::new(0, 6));
        let grid = build_month_grid(
            &GridRequest::new(2024, 6, date(2024, 6, 5)).with_snapshot(Some(&snapshot)),
        );

        let text = format_month_text(&grid, Some("17"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Availability - June 2024 (17)");
        assert_eq!(lines[3], format!("{}1-", " ".repeat(33)));
        assert!(text.contains("  5*"));
        assert!(text.contains("  7x"));
        assert!(text.contains(" 10~"));
        assert!(text.contains(" 11#"));
        assert!(text.contains("2024-06-10  partly booked 2 open / 4 booked"));
        assert!(text.contains("2024-06-03  past          0 open / 0 booked"));
    }
}
