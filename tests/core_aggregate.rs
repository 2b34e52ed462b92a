mod common;

use chrono::NaiveDate;
use wellplan::core::aggregate::{active_minutes, average, mean, today_steps};
use wellplan::models::plan::{Intensity, ItemKind};
use wellplan::models::{MetricType, PlanItem, PlanStatus};

fn today() -> NaiveDate {
    common::date(2026, 3, 2)
}

// ── today_steps ─────────────────────────────────────────────────────────────

#[test]
fn test_today_steps_empty_is_zero() {
    assert_eq!(today_steps(&[], today()), 0);
}

#[test]
fn test_today_steps_excludes_other_days_and_types() {
    let samples = vec![
        common::make_sample(MetricType::Steps, 1200.0, today()),
        common::make_sample(MetricType::Steps, 800.0, today()),
        common::make_sample(MetricType::Steps, 5000.0, common::date(2026, 3, 1)),
        common::make_sample(MetricType::Steps, 5000.0, common::date(2026, 3, 3)),
        common::make_sample(MetricType::HeartRate, 72.0, today()),
    ];
    assert_eq!(today_steps(&samples, today()), 2000);
}

#[test]
fn test_today_steps_uses_day_key_of_daily_total() {
    // Stamped late on the previous day in UTC but keyed to today
    let mut s = common::make_sample(MetricType::Steps, 4321.0, common::date(2026, 3, 1));
    s.day = Some(today());
    assert_eq!(today_steps(&[s], today()), 4321);
}

#[test]
fn test_today_steps_ignores_non_finite_values() {
    let samples = vec![
        common::make_sample(MetricType::Steps, f64::NAN, today()),
        common::make_sample(MetricType::Steps, 100.0, today()),
    ];
    assert_eq!(today_steps(&samples, today()), 100);
}

// ── average ─────────────────────────────────────────────────────────────────

#[test]
fn test_average_empty_is_zero_for_every_type() {
    for t in [
        MetricType::Steps,
        MetricType::HeartRate,
        MetricType::SleepScore,
        MetricType::Other("weight".into()),
    ] {
        assert_eq!(average(&[], &t), 0);
    }
}

#[test]
fn test_average_with_no_matching_type_is_zero() {
    let samples = vec![common::make_sample(MetricType::Steps, 100.0, today())];
    assert_eq!(average(&samples, &MetricType::SleepScore), 0);
}

#[test]
fn test_average_rounds_to_nearest() {
    let samples = vec![
        common::make_sample(MetricType::HeartRate, 70.0, today()),
        common::make_sample(MetricType::HeartRate, 71.0, today()),
        common::make_sample(MetricType::HeartRate, 72.0, today()),
        common::make_sample(MetricType::HeartRate, 72.0, today()),
    ];
    // 71.25
    assert_eq!(average(&samples, &MetricType::HeartRate), 71);

    let samples = vec![
        common::make_sample(MetricType::SleepScore, 80.0, today()),
        common::make_sample(MetricType::SleepScore, 81.0, today()),
    ];
    // 80.5
    assert_eq!(average(&samples, &MetricType::SleepScore), 81);
}

#[test]
fn test_average_is_not_windowed_by_date() {
    let samples = vec![
        common::make_sample(MetricType::SleepScore, 60.0, common::date(2025, 1, 1)),
        common::make_sample(MetricType::SleepScore, 90.0, today()),
    ];
    assert_eq!(average(&samples, &MetricType::SleepScore), 75);
}

#[test]
fn test_mean_of_nothing_is_none() {
    assert_eq!(mean(Vec::<f64>::new()), None);
    assert_eq!(mean([2.0, 4.0]), Some(3.0));
}

// ── active_minutes ──────────────────────────────────────────────────────────

#[test]
fn test_active_minutes_counts_only_workouts() {
    let plan = common::make_plan(
        today(),
        vec![common::workout(20), common::meal()],
        PlanStatus::Scheduled,
    );
    assert_eq!(active_minutes(Some(&plan)), 20);
}

#[test]
fn test_active_minutes_sums_multiple_workouts() {
    let plan = common::make_plan(
        today(),
        vec![
            common::workout(20),
            PlanItem::new(ItemKind::Recovery, Intensity::Low, 10, ""),
            PlanItem::new(ItemKind::Workout, Intensity::High, 25, "intervals"),
        ],
        PlanStatus::Completed,
    );
    assert_eq!(active_minutes(Some(&plan)), 45);
}

#[test]
fn test_active_minutes_absent_or_empty_plan_is_zero() {
    assert_eq!(active_minutes(None), 0);
    let plan = common::make_plan(today(), vec![common::meal()], PlanStatus::Scheduled);
    assert_eq!(active_minutes(Some(&plan)), 0);
}
