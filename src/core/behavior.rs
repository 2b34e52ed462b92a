use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use super::aggregate::mean;
use super::error::WellnessResult;
use super::store::{MetricStore, PlanStore};
use crate::models::plan::Intensity;
use crate::models::{MetricSample, MetricType, Plan, PlanStatus, UserContext};

pub const DEFAULT_HR_BASELINE: f64 = 75.0;
pub const DEFAULT_SLEEP_BASELINE: f64 = 70.0;
/// Adherence reported when there is no plan history to judge.
pub const NEUTRAL_ADHERENCE: f64 = 0.5;

const ADHERENCE_DAYS: i64 = 7;
const BASELINE_HOURS: i64 = 24 * 14;
const RECENT_HR_HOURS: i64 = 24;
const RECENT_SLEEP_HOURS: i64 = 24 * 7;
const RECENT_SLEEP_SAMPLES: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub readiness: f64,
    pub adherence: f64,
    pub intensity: Intensity,
}

/// Fraction of plans dated within the last week that were completed.
/// Plans after `today` are not yet due and do not count.
pub fn adherence_score(plans: &[Plan], today: NaiveDate) -> f64 {
    let since = today - Duration::days(ADHERENCE_DAYS);
    let recent: Vec<&Plan> = plans
        .iter()
        .filter(|p| p.date >= since && p.date <= today)
        .collect();
    if recent.is_empty() {
        return NEUTRAL_ADHERENCE;
    }
    let completed = recent
        .iter()
        .filter(|p| p.status == PlanStatus::Completed)
        .count();
    completed as f64 / recent.len() as f64
}

/// Physiological readiness in `[0.1, 1.0]` from heart rate and sleep score.
///
/// Recent heart rate is compared to a two-week baseline: every 20 bpm below
/// baseline adds 0.5. Sleep uses the latest three scores of the past week.
pub fn readiness_score(samples: &[MetricSample], now: DateTime<Utc>) -> f64 {
    let hr_base = mean(values_since(samples, &MetricType::HeartRate, now, BASELINE_HOURS))
        .unwrap_or(DEFAULT_HR_BASELINE);
    let sleep_base = mean(values_since(samples, &MetricType::SleepScore, now, BASELINE_HOURS))
        .unwrap_or(DEFAULT_SLEEP_BASELINE);

    let hr_recent = mean(values_since(samples, &MetricType::HeartRate, now, RECENT_HR_HOURS))
        .unwrap_or(hr_base);

    let mut recent_sleep = window(samples, &MetricType::SleepScore, now, RECENT_SLEEP_HOURS);
    recent_sleep.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let sleep_recent = mean(
        recent_sleep
            .iter()
            .take(RECENT_SLEEP_SAMPLES)
            .map(|s| s.value),
    )
    .unwrap_or(sleep_base);

    let hr_score = clamp_unit(0.5 + (hr_base - hr_recent) / 20.0);
    let sleep_score = clamp_unit(sleep_recent / 100.0);
    let readiness = 0.4 * hr_score + 0.6 * sleep_score;
    (readiness * 100.0).round() / 100.0
}

/// Intensity for the next plan. A jump of two levels from the last planned
/// workout is damped to `Moderate`.
pub fn next_best_intensity(readiness: f64, adherence: f64, last: Option<Intensity>) -> Intensity {
    let target = if readiness > 0.8 && adherence >= 0.6 {
        Intensity::High
    } else if readiness >= 0.6 {
        Intensity::Moderate
    } else {
        Intensity::Low
    };

    match last {
        Some(prev) if (target.level() - prev.level()).abs() > 1 => Intensity::Moderate,
        _ => target,
    }
}

/// Gather history from both stores and assess the user's next intensity.
pub fn assess<P, M>(
    plans: &P,
    metrics: &M,
    user: &UserContext,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> WellnessResult<Assessment>
where
    P: PlanStore + ?Sized,
    M: MetricStore + ?Sized,
{
    let history = plans.range(user, today - Duration::days(ADHERENCE_DAYS), today)?;
    let samples = metrics.list(user, None)?;
    let last = plans.latest(user)?.and_then(|p| p.workout_intensity());

    let adherence = adherence_score(&history, today);
    let readiness = readiness_score(&samples, now);
    let intensity = next_best_intensity(readiness, adherence, last);
    debug!(
        user = %user.user_id,
        readiness,
        adherence,
        %intensity,
        "assessed next intensity"
    );
    Ok(Assessment {
        readiness,
        adherence,
        intensity,
    })
}

fn window<'a>(
    samples: &'a [MetricSample],
    metric_type: &MetricType,
    now: DateTime<Utc>,
    hours: i64,
) -> Vec<&'a MetricSample> {
    let since = now - Duration::hours(hours);
    samples
        .iter()
        .filter(|s| &s.metric_type == metric_type && s.timestamp >= since)
        .filter(|s| s.value.is_finite())
        .collect()
}

fn values_since(
    samples: &[MetricSample],
    metric_type: &MetricType,
    now: DateTime<Utc>,
    hours: i64,
) -> Vec<f64> {
    window(samples, metric_type, now, hours)
        .into_iter()
        .map(|s| s.value)
        .collect()
}

fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.1, 1.0)
}
