use anyhow::Result;
use serde::Serialize;
use tracing::info;

use super::aggregate::mean;
use super::error::WellnessError;
use super::store::MetricStore;
use crate::db::Database;
use crate::models::coach::{Feedback, Recommendation};
use crate::models::config::Coach;
use crate::models::{MetricSample, MetricType, UserContext};

const NUDGE_WINDOW: usize = 6;
const RECOMMENDATION_LIMIT: u32 = 20;
pub const NUDGE_CONTEXT: &str = "nudge";

#[derive(Debug, Serialize)]
pub struct Nudge {
    pub message: &'static str,
    pub avg_steps: i64,
}

/// Pick a nudge from the mean of the six most recent step samples.
pub fn pick_nudge(samples: &[MetricSample], thresholds: &Coach) -> Nudge {
    let mut steps: Vec<&MetricSample> = samples
        .iter()
        .filter(|s| s.metric_type == MetricType::Steps && s.value.is_finite())
        .collect();
    steps.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    let avg_steps = mean(steps.iter().take(NUDGE_WINDOW).map(|s| s.value))
        .map(|m| m.trunc() as i64)
        .unwrap_or(0);

    let message = if avg_steps < thresholds.low_step_threshold as i64 {
        "Quick win: 10-minute brisk walk to boost your step count."
    } else if avg_steps < thresholds.moderate_step_threshold as i64 {
        "Great start! Add another short walk to hit your daily goal."
    } else {
        "Nice pace! Add a 5-minute stretch break to stay loose."
    };
    Nudge { message, avg_steps }
}

/// Generate a nudge from recent steps and keep it as a recommendation.
pub fn nudge(db: &Database, user: &UserContext, thresholds: &Coach) -> Result<Recommendation> {
    let samples = db.list(user, None)?;
    let picked = pick_nudge(&samples, thresholds);
    let rec = Recommendation::new(picked.message, NUDGE_CONTEXT);
    db.insert_recommendation(user, &rec)?;
    info!(user = %user.user_id, avg_steps = picked.avg_steps, "nudge recorded");
    Ok(rec)
}

/// Most recent recommendations, newest first.
pub fn recommendations(db: &Database, user: &UserContext) -> Result<Vec<Recommendation>> {
    db.list_recommendations(user, RECOMMENDATION_LIMIT)
}

pub struct FeedbackInput<'a> {
    pub rpe: Option<u8>,
    pub mood: Option<&'a str>,
    pub pain: Option<&'a str>,
    pub notes: Option<&'a str>,
}

/// Record post-session feedback. RPE is on the 0-10 Borg CR10 scale.
pub fn record_feedback(
    db: &Database,
    user: &UserContext,
    input: FeedbackInput<'_>,
) -> Result<Feedback> {
    if let Some(rpe) = input.rpe
        && rpe > 10
    {
        return Err(WellnessError::invalid(format!("rpe must be 0-10, got {}", rpe)).into());
    }
    let mut fb = Feedback::new(input.rpe, input.mood.map(String::from));
    if let Some(p) = input.pain {
        fb.pain = p.to_string();
    }
    if let Some(n) = input.notes {
        fb.notes = n.to_string();
    }
    db.insert_feedback(user, &fb)?;
    Ok(fb)
}
