#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tempfile::TempDir;
use wellplan::db::Database;
use wellplan::models::plan::{Intensity, ItemKind};
use wellplan::models::{MetricSample, MetricType, Plan, PlanItem, PlanStatus, UserContext};

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn user() -> UserContext {
    UserContext::new("U123")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn noon(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()))
}

/// Create a sample stamped at noon UTC on `date`.
pub fn make_sample(metric_type: MetricType, value: f64, date: NaiveDate) -> MetricSample {
    let mut s = MetricSample::new(metric_type, value);
    s.timestamp = noon(date);
    s
}

pub fn workout(minutes: u32) -> PlanItem {
    PlanItem::new(ItemKind::Workout, Intensity::Moderate, minutes, "")
}

pub fn meal() -> PlanItem {
    PlanItem::new(ItemKind::Meal, Intensity::Low, 0, "")
}

pub fn make_plan(date: NaiveDate, items: Vec<PlanItem>, status: PlanStatus) -> Plan {
    let mut p = Plan::new(date, items);
    p.status = status;
    p
}
