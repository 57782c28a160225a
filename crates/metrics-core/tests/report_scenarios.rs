use chrono::{TimeZone, Utc};

use otr_common::error::OtrError;
use otr_metrics_core::benchmark::BenchmarkTable;
use otr_metrics_core::report::{ReportBuilder, ReportRequest};
use otr_swing_model::{
    BatSpeedLevel, ExitVelocityLevel, Grade, LevelSelection, MetricName, MetricOutcome, Section,
    SessionKind, SwingRecord, ZoneId,
};

fn ten_swings() -> Vec<SwingRecord> {
    [60.0, 62.0, 64.0, 66.0, 68.0, 70.0, 72.0, 74.0, 76.0, 78.0]
        .iter()
        .enumerate()
        .map(|(i, &speed)| SwingRecord::bat_speed(Some(speed), Some(i as f64 * 1.5), Some(0.15)))
        .collect()
}

fn batted_balls() -> Vec<SwingRecord> {
    let zones = [5, 5, 2, 8, 5, 11, 4, 6, 1, 13, 5, 2, 3, 9, 7, 10, 12, 5, 8, 2, 6, 5, 11, 5, 2];
    zones
        .iter()
        .enumerate()
        .map(|(i, &zone)| {
            SwingRecord::batted_ball(
                Some(72.0 + i as f64),
                Some(4.0 + i as f64 * 0.8),
                Some(180.0 + i as f64 * 8.0),
                ZoneId::new(zone),
            )
        })
        .collect()
}

#[test]
fn top_ten_percent_attack_angle_comes_from_single_fastest_swing() {
    let table = BenchmarkTable::standard();
    let rows = ten_swings();
    let section = ReportBuilder::new(&table)
        .bat_speed(BatSpeedLevel::College, &rows)
        .unwrap();
    let report = section.ready().expect("bat speed section");

    let p90 = report
        .get(MetricName::P90BatSpeed)
        .and_then(MetricOutcome::result)
        .unwrap();
    assert!((p90.measured - 76.2).abs() < 1e-9);
    assert_eq!(report.top_swing_count, 1);

    let attack = report
        .get(MetricName::AvgAttackAngleTop10)
        .and_then(MetricOutcome::result)
        .unwrap();
    // The 78 mph swing is the tenth row.
    assert!((attack.measured - 13.5).abs() < 1e-9);
}

#[test]
fn zero_exit_velocity_rows_do_not_move_any_statistic() {
    let table = BenchmarkTable::standard();
    let builder = ReportBuilder::new(&table);

    let clean = batted_balls();
    let mut padded = clean.clone();
    for _ in 0..10 {
        padded.push(SwingRecord::batted_ball(
            Some(0.0),
            Some(0.0),
            Some(0.0),
            ZoneId::new(5),
        ));
    }

    let a = builder
        .exit_velocity(ExitVelocityLevel::Varsity18u, &clean)
        .unwrap();
    let b = builder
        .exit_velocity(ExitVelocityLevel::Varsity18u, &padded)
        .unwrap();
    let (a, b) = (a.ready().unwrap(), b.ready().unwrap());

    assert_eq!(a.metrics, b.metrics);
    assert_eq!(a.zone_grid, b.zone_grid);
    assert_eq!(b.excluded_count, 10);
}

#[test]
fn heatmap_counts_cover_the_top_eight_percent() {
    let table = BenchmarkTable::standard();
    let rows = batted_balls();
    let section = ReportBuilder::new(&table)
        .exit_velocity(ExitVelocityLevel::College, &rows)
        .unwrap();
    let report = section.ready().unwrap();

    // 25 balls: index 0.92 * 24 = 22.08, so the top two balls qualify.
    assert_eq!(report.top_swing_count, 2);
    assert_eq!(report.zone_grid.total(), 2);
    assert_eq!(report.zone_grid.count(ZoneId::new(5).unwrap()), 1);
    assert_eq!(report.zone_grid.count(ZoneId::new(2).unwrap()), 1);
    assert_eq!(report.zone_grid.count(ZoneId::new(11).unwrap()), 0);
    assert_eq!(report.zone_grid.max_count, 1);
}

#[test]
fn exit_velocity_grades_use_tolerance_band() {
    let table = BenchmarkTable::standard();
    let benchmark = table
        .exit_velocity(ExitVelocityLevel::U14, MetricName::AvgExitVelocity)
        .unwrap();
    // Every ball 2 mph under the benchmark: inside the 3 mph band.
    let rows = vec![SwingRecord::batted_ball(Some(benchmark - 2.0), Some(10.0), Some(200.0), None); 12];
    let section = ReportBuilder::new(&table)
        .exit_velocity(ExitVelocityLevel::U14, &rows)
        .unwrap();
    let avg = section
        .ready()
        .unwrap()
        .get(MetricName::AvgExitVelocity)
        .and_then(MetricOutcome::result)
        .unwrap()
        .clone();
    assert_eq!(avg.grade, Some(Grade::Average));
}

#[test]
fn all_zero_exit_velocity_session_reports_insufficient_data() {
    let table = BenchmarkTable::standard();
    let rows = vec![SwingRecord::batted_ball(Some(0.0), None, None, ZoneId::new(3)); 8];
    let report = ReportBuilder::new(&table)
        .session(ReportRequest {
            levels: LevelSelection::parse("Indy", "Indy").unwrap(),
            bat_speed_rows: Some(&ten_swings()),
            exit_velocity_rows: Some(&rows),
            player_name: None,
            date_range: None,
            generated_at: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        });

    assert!(report.bat_speed.as_ref().unwrap().is_ready());
    assert!(matches!(
        report.exit_velocity,
        Some(Section::InsufficientData { .. })
    ));
}

#[test]
fn unknown_level_fails_only_its_own_section() {
    let table = BenchmarkTable::standard();
    let err = table
        .lookup(SessionKind::ExitVelocity, "Pro", MetricName::AvgExitVelocity)
        .unwrap_err();
    assert!(matches!(err, OtrError::MissingBenchmark { .. }));

    let custom = BenchmarkTable::from_json(
        r#"{
            "bat_speed": {},
            "exit_velocity": { "10u": {
                "avg_exit_velocity": 50.0, "p92_exit_velocity": 58.0,
                "avg_launch_angle_top8": 12.0, "total_avg_launch_angle": 10.0
            } }
        }"#,
    )
    .unwrap();
    let balls = batted_balls();
    let report = ReportBuilder::new(&custom).session(ReportRequest {
        levels: LevelSelection::parse("Youth", "10u").unwrap(),
        bat_speed_rows: Some(&ten_swings()),
        exit_velocity_rows: Some(&balls),
        player_name: None,
        date_range: None,
        generated_at: Utc::now(),
    });

    // No partial bat-speed section: the whole section is marked failed.
    let failures = report.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, SessionKind::BatSpeed);
    assert!(failures[0].1.contains("Youth"));
    assert!(report.bat_speed.as_ref().unwrap().ready().is_none());

    let exit_velocity = report.exit_velocity.as_ref().unwrap().ready().unwrap();
    assert_eq!(exit_velocity.metrics.len(), 5);
    assert_eq!(exit_velocity.zone_grid.total(), 2);
    let avg = exit_velocity
        .get(MetricName::AvgExitVelocity)
        .and_then(MetricOutcome::result)
        .unwrap();
    assert_eq!(avg.benchmark, Some(50.0));
    assert_eq!(avg.grade, Some(Grade::AboveAverage));
}

#[test]
fn missing_time_to_contact_is_reported_not_fabricated() {
    let table = BenchmarkTable::standard();
    let rows: Vec<_> = ten_swings()
        .into_iter()
        .map(|r| SwingRecord {
            time_to_contact: None,
            ..r
        })
        .collect();
    let section = ReportBuilder::new(&table)
        .bat_speed(BatSpeedLevel::Youth, &rows)
        .unwrap();
    let outcome = section
        .ready()
        .unwrap()
        .get(MetricName::AvgTimeToContact)
        .unwrap()
        .clone();
    assert!(matches!(outcome, MetricOutcome::InsufficientData { .. }));
}
