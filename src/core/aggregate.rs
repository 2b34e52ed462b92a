use chrono::NaiveDate;

use crate::models::plan::ItemKind;
use crate::models::{MetricSample, MetricType, Plan};

/// Total steps recorded on `today`. Samples from other days are ignored.
pub fn today_steps(samples: &[MetricSample], today: NaiveDate) -> i64 {
    let total: f64 = samples
        .iter()
        .filter(|s| s.metric_type == MetricType::Steps && s.date() == today)
        .map(|s| finite_or_zero(s.value))
        .sum();
    total.round() as i64
}

/// Mean value of every sample of `metric_type`, rounded to the nearest
/// integer. An empty selection averages to 0.
pub fn average(samples: &[MetricSample], metric_type: &MetricType) -> i64 {
    mean(
        samples
            .iter()
            .filter(|s| &s.metric_type == metric_type)
            .map(|s| finite_or_zero(s.value)),
    )
    .map(|m| m.round() as i64)
    .unwrap_or(0)
}

/// Minutes of workout scheduled in the plan.
pub fn active_minutes(plan: Option<&Plan>) -> u32 {
    plan.map(|p| {
        p.items
            .iter()
            .filter(|i| i.kind == ItemKind::Workout)
            .map(|i| i.duration_min)
            .sum::<u32>()
    })
    .unwrap_or(0)
}

/// Arithmetic mean, or `None` for an empty iterator.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
