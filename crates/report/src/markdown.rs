//! Markdown text report.

use std::fmt::Write;

use otr_common::error::OtrResult;
use otr_swing_model::{
    BatSpeedReport, ExitVelocityReport, MetricOutcome, Section, SessionReport, ZoneGrid,
};

use crate::layout::zone_rows;
use crate::ReportRenderer;

const CELL_WIDTH: usize = 9;

/// Renders the text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &SessionReport) -> OtrResult<String> {
        Ok(render_markdown(report))
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn name(&self) -> &str {
        "markdown"
    }
}

/// Render a session report as Markdown.
pub fn render_markdown(report: &SessionReport) -> String {
    let mut out = String::new();

    out.push_str("# OTR Baseball Metrics Report\n\n");
    let player = report.player_name.as_deref().unwrap_or("Not provided");
    let _ = writeln!(out, "**Player Name:** {player}  ");
    match report.date_range {
        Some(range) => {
            let _ = writeln!(out, "**Date Range:** {} to {}  ", range.start, range.end);
        }
        None => out.push_str("**Date Range:** Date range not available  \n"),
    }
    let _ = writeln!(out, "**Generated:** {}\n", report.generated_at.to_rfc3339());

    out.push_str("## Calculated Metrics\n");

    if report.bat_speed.is_none() && report.exit_velocity.is_none() {
        out.push_str("\nNo session data supplied.\n");
    }

    if let Some(section) = &report.bat_speed {
        out.push_str("\n### Bat Speed Metrics\n");
        match section {
            Section::Ready(bat_speed) => write_bat_speed(&mut out, bat_speed),
            Section::InsufficientData { reason } => write_insufficient(&mut out, reason),
            Section::Failed { error } => write_failed(&mut out, error),
        }
    }

    if let Some(section) = &report.exit_velocity {
        out.push_str("\n### Exit Velocity Metrics\n");
        match section {
            Section::Ready(exit_velocity) => write_exit_velocity(&mut out, exit_velocity),
            Section::InsufficientData { reason } => write_insufficient(&mut out, reason),
            Section::Failed { error } => write_failed(&mut out, error),
        }
    }

    out
}

fn write_insufficient(out: &mut String, reason: &str) {
    let _ = writeln!(out, "_Insufficient data: {reason}._");
}

fn write_failed(out: &mut String, error: &str) {
    let _ = writeln!(out, "_Not computed: {error}._");
}

fn write_bat_speed(out: &mut String, report: &BatSpeedReport) {
    let _ = writeln!(
        out,
        "_Level: {} | Swings: {} | Top 10% swings: {}_\n",
        report.level, report.swing_count, report.top_swing_count
    );
    for outcome in &report.metrics {
        write_metric(out, outcome);
    }
    if report.low_sample {
        out.push_str("\n> Low sample: the top 10% cut is based on a single swing.\n");
    }
}

fn write_exit_velocity(out: &mut String, report: &ExitVelocityReport) {
    let _ = writeln!(
        out,
        "_Level: {} | Batted balls: {} | Excluded (no contact): {} | Top 8% balls: {}_\n",
        report.level, report.batted_ball_count, report.excluded_count, report.top_swing_count
    );
    for outcome in &report.metrics {
        write_metric(out, outcome);
    }
    if report.low_sample {
        out.push_str("\n> Low sample: the top 8% cut is based on a single batted ball.\n");
    }

    out.push_str("\n### Strike Zone Top 8% Exit Velocities\n\n");
    write_zone_grid(out, &report.zone_grid);
}

fn write_metric(out: &mut String, outcome: &MetricOutcome) {
    let result = match outcome {
        MetricOutcome::Measured(result) => result,
        MetricOutcome::InsufficientData { metric, reason } => {
            let _ = writeln!(out, "- **{}:** insufficient data ({reason})", metric.label());
            return;
        }
    };

    let metric = result.metric;
    let suffix = metric.unit().suffix();
    let _ = write!(
        out,
        "- **{}:** {:.*}{suffix}",
        metric.label(),
        metric.precision(),
        result.measured
    );
    if let Some(benchmark) = result.benchmark {
        let _ = write!(out, " (Benchmark: {}{suffix})", benchmark_value(benchmark));
    }
    out.push('\n');
    if let Some(grade) = result.grade {
        let _ = writeln!(out, "  - Player Grade: {grade}");
    }
}

/// Benchmarks print as published: "62.4", "0.163", "78.0".
fn benchmark_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn write_zone_grid(out: &mut String, grid: &ZoneGrid) {
    let rule = "-".repeat(CELL_WIDTH);
    let border = format!("+{rule}+{rule}+{rule}+");

    out.push_str("```text\n");
    out.push_str(&border);
    out.push('\n');
    for row in zone_rows(grid) {
        out.push('|');
        for cell in row {
            let text = match cell {
                Some(cell) if cell.count > 0 => format!("{}: {}", cell.zone, cell.count),
                Some(cell) => format!("{}: -", cell.zone),
                None => String::new(),
            };
            let _ = write!(out, "{text:^width$}|", width = CELL_WIDTH);
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out.push_str("```\n");
    let _ = writeln!(
        out,
        "\nCounts are top 8% exit velocity balls per zone (busiest zone: {}).",
        grid.max_count
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use otr_swing_model::{
        BatSpeedLevel, DateRange, ExitVelocityLevel, Grade, MetricName, MetricResult, ZoneId,
    };

    fn measured(metric: MetricName, measured: f64, benchmark: Option<f64>, grade: Option<Grade>) -> MetricOutcome {
        MetricOutcome::Measured(MetricResult {
            metric,
            measured,
            benchmark,
            grade,
        })
    }

    fn empty_report() -> SessionReport {
        SessionReport {
            generated_at: Utc.with_ymd_and_hms(2025, 3, 4, 9, 30, 0).unwrap(),
            player_name: None,
            date_range: None,
            bat_speed: None,
            exit_velocity: None,
        }
    }

    #[test]
    fn header_without_player_or_dates() {
        let text = render_markdown(&empty_report());
        assert!(text.contains("**Player Name:** Not provided"));
        assert!(text.contains("Date range not available"));
        assert!(text.contains("2025-03-04T09:30:00+00:00"));
        assert!(text.contains("No session data supplied."));
    }

    #[test]
    fn bat_speed_lines_use_metric_precision() {
        let mut report = empty_report();
        report.player_name = Some("Jordan Reyes".into());
        report.date_range = Some(DateRange {
            start: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end: chrono::NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        });
        report.bat_speed = Some(Section::Ready(BatSpeedReport {
            level: BatSpeedLevel::HighSchool,
            swing_count: 10,
            top_swing_count: 1,
            low_sample: false,
            metrics: vec![
                measured(MetricName::AvgBatSpeed, 69.0, Some(62.4), Some(Grade::AboveAverage)),
                measured(MetricName::AvgTimeToContact, 0.16166, Some(0.163), Some(Grade::AboveAverage)),
                MetricOutcome::InsufficientData {
                    metric: MetricName::AvgAttackAngleTop10,
                    reason: "no attack angle readings".into(),
                },
            ],
        }));

        let text = render_markdown(&report);
        assert!(text.contains("**Date Range:** 2025-03-01 to 2025-03-03"));
        assert!(text.contains("- **Player Average Bat Speed:** 69.00 mph (Benchmark: 62.4 mph)\n  - Player Grade: Above Average"));
        assert!(text.contains("- **Average Time to Contact:** 0.162 sec (Benchmark: 0.163 sec)"));
        assert!(text.contains(
            "- **Average Attack Angle (Top 10% Bat Speed Swings):** insufficient data (no attack angle readings)"
        ));
        assert!(text.contains("_Level: High School | Swings: 10 | Top 10% swings: 1_"));
    }

    #[test]
    fn exit_velocity_section_with_grid() {
        let mut report = empty_report();
        report.exit_velocity = Some(Section::Ready(ExitVelocityReport {
            level: ExitVelocityLevel::Varsity18u,
            batted_ball_count: 12,
            excluded_count: 2,
            top_swing_count: 1,
            low_sample: false,
            metrics: vec![
                measured(MetricName::AvgExitVelocity, 81.0, Some(78.0), Some(Grade::AboveAverage)),
                measured(MetricName::AvgLaunchAngleTop8, 22.0, Some(11.47), Some(Grade::AboveAverage)),
                measured(MetricName::AvgDistanceTop8, 345.0, None, None),
            ],
            zone_grid: ZoneGrid::from_counts([(ZoneId::new(5).unwrap(), 1)]),
        }));

        let text = render_markdown(&report);
        assert!(text.contains("**Average Exit Velocity:** 81.00 mph (Benchmark: 78.0 mph)"));
        assert!(text.contains("22.00° (Benchmark: 11.47°)"));
        assert!(text.contains("- **Average Distance (8% swings):** 345.00 ft\n"));
        assert!(!text.contains("345.00 ft (Benchmark"));
        assert!(text.contains("### Strike Zone Top 8% Exit Velocities"));
        assert!(text.contains("  5: 1  "));
        assert!(text.contains(" 10: -  "));
    }

    #[test]
    fn insufficient_section_is_explicit() {
        let mut report = empty_report();
        report.exit_velocity = Some(Section::InsufficientData {
            reason: "no batted balls with a positive exit velocity".into(),
        });
        let text = render_markdown(&report);
        assert!(text.contains("### Exit Velocity Metrics\n_Insufficient data: no batted balls with a positive exit velocity._"));
        assert!(!text.contains("Strike Zone"));
    }

    #[test]
    fn failed_section_does_not_hide_the_other() {
        let mut report = empty_report();
        report.bat_speed = Some(Section::Failed {
            error: "No benchmark for avg_bat_speed at level 'Youth' in the bat_speed table".into(),
        });
        report.exit_velocity = Some(Section::InsufficientData {
            reason: "no batted balls".into(),
        });
        let text = render_markdown(&report);
        assert!(text.contains(
            "### Bat Speed Metrics\n_Not computed: No benchmark for avg_bat_speed at level 'Youth' in the bat_speed table._"
        ));
        assert!(text.contains("### Exit Velocity Metrics"));
    }

    #[test]
    fn benchmark_values_print_as_published() {
        assert_eq!(benchmark_value(78.0), "78.0");
        assert_eq!(benchmark_value(62.4), "62.4");
        assert_eq!(benchmark_value(0.147), "0.147");
    }
}
