use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::aggregate;
use super::error::WellnessResult;
use super::score::{self, ScoreBand};
use super::store::{MetricStore, PlanStore};
use crate::models::{MetricType, Plan, UserContext};

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub plan: Option<Plan>,
    pub today_steps: i64,
    pub heart_rate_avg: i64,
    pub sleep_avg: i64,
    pub active_minutes: u32,
    pub score: u8,
    pub band: ScoreBand,
    pub caption: &'static str,
}

/// Fetch today's plan and all samples, then derive the day's metrics and
/// wellness score. A missing plan counts as zero active minutes.
pub fn refresh<P, M>(
    plans: &P,
    metrics: &M,
    user: &UserContext,
    today: NaiveDate,
) -> WellnessResult<Dashboard>
where
    P: PlanStore + ?Sized,
    M: MetricStore + ?Sized,
{
    let plan = plans.get(user, today)?;
    let samples = metrics.list(user, None)?;
    debug!(user = %user.user_id, samples = samples.len(), has_plan = plan.is_some(), "refreshing dashboard");

    let today_steps = aggregate::today_steps(&samples, today);
    let heart_rate_avg = aggregate::average(&samples, &MetricType::HeartRate);
    let sleep_avg = aggregate::average(&samples, &MetricType::SleepScore);
    let active_minutes = aggregate::active_minutes(plan.as_ref());

    let score = score::wellness_score(today_steps, active_minutes as i64, sleep_avg as f64);
    let band = ScoreBand::for_score(score);

    Ok(Dashboard {
        date: today,
        plan,
        today_steps,
        heart_rate_avg,
        sleep_avg,
        active_minutes,
        score,
        band,
        caption: band.caption(),
    })
}
