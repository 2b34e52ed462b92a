use chrono::{Duration, NaiveDate};

use super::error::WellnessResult;
use crate::models::{MetricSample, Plan, PlanItem, PlanStatus, UserContext};

/// Per-date plan documents, keyed by `(user, date)`.
///
/// Writes are last-write-wins; there is no version check between a read and
/// a following `set_status`.
pub trait PlanStore {
    fn get(&self, user: &UserContext, date: NaiveDate) -> WellnessResult<Option<Plan>>;

    /// Plans with `from <= date <= to`, ascending by date.
    fn range(&self, user: &UserContext, from: NaiveDate, to: NaiveDate)
    -> WellnessResult<Vec<Plan>>;

    /// Most recent plan by date, regardless of status.
    fn latest(&self, user: &UserContext) -> WellnessResult<Option<Plan>>;

    /// Set the status of an existing plan and return the stored result.
    fn set_status(
        &self,
        user: &UserContext,
        date: NaiveDate,
        status: PlanStatus,
    ) -> WellnessResult<Plan>;

    /// Replace the items of the plan on `date`, creating it as `Scheduled`
    /// if absent. The status of an existing plan is left alone.
    fn put_items(
        &self,
        user: &UserContext,
        date: NaiveDate,
        items: &[PlanItem],
    ) -> WellnessResult<Plan>;

    /// The plans stored for the seven dates starting at `start`.
    fn get_week(&self, user: &UserContext, start: NaiveDate) -> WellnessResult<Vec<Plan>> {
        self.range(user, start, start + Duration::days(6))
    }

    /// Replace the items of all seven days starting at `start` in one pass.
    fn regenerate_week(
        &self,
        user: &UserContext,
        week: &[(NaiveDate, Vec<PlanItem>)],
    ) -> WellnessResult<Vec<Plan>> {
        week.iter()
            .map(|(date, items)| self.put_items(user, *date, items))
            .collect()
    }
}

/// Append-only biometric samples.
pub trait MetricStore {
    fn append(&self, user: &UserContext, sample: &MetricSample) -> WellnessResult<()>;

    /// All samples for the user, newest first, capped at `limit` when given.
    fn list(&self, user: &UserContext, limit: Option<u32>) -> WellnessResult<Vec<MetricSample>>;

    /// Upsert the single Steps record for `day`.
    fn set_daily_steps(
        &self,
        user: &UserContext,
        day: NaiveDate,
        value: u32,
    ) -> WellnessResult<MetricSample>;
}
