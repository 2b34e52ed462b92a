use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, info};

use super::behavior::{self, Assessment};
use super::error::{WellnessError, WellnessResult};
use super::generate::plan_items;
use super::store::{MetricStore, PlanStore};
use crate::models::plan::{DaySlot, WeeklyWindow};
use crate::models::{Plan, PlanStatus, UserContext};

/// Today's plan. Plans are never created implicitly here.
pub fn get_today<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    today: NaiveDate,
) -> WellnessResult<Plan> {
    get_on_date(store, user, today)
}

pub fn get_on_date<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    date: NaiveDate,
) -> WellnessResult<Plan> {
    debug!(user = %user.user_id, %date, "fetching plan");
    store
        .get(user, date)?
        .ok_or(WellnessError::NotFound { date })
}

/// The seven days starting at `today`, ascending. Dates the store has no
/// plan for come back as empty slots.
pub fn get_week<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    today: NaiveDate,
) -> WellnessResult<WeeklyWindow> {
    let mut stored = store.get_week(user, today)?;
    Ok(WeeklyWindow {
        start: today,
        days: week_dates(today)
            .map(|date| {
                let plan = stored
                    .iter()
                    .position(|p| p.date == date)
                    .map(|i| stored.swap_remove(i));
                DaySlot { date, plan }
            })
            .collect(),
    })
}

pub fn start_today<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    today: NaiveDate,
) -> WellnessResult<Plan> {
    start_on_date(store, user, today)
}

/// Move a `Scheduled` plan to `InProgress`. Repeating the call, or calling it
/// on a completed plan, leaves the plan as it is.
pub fn start_on_date<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    date: NaiveDate,
) -> WellnessResult<Plan> {
    let plan = get_on_date(store, user, date)?;
    if plan.status != PlanStatus::Scheduled {
        debug!(user = %user.user_id, %date, status = %plan.status, "start is a no-op");
        return Ok(plan);
    }
    let plan = store.set_status(user, date, PlanStatus::InProgress)?;
    info!(user = %user.user_id, %date, "plan started");
    Ok(plan)
}

pub fn complete_today<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    today: NaiveDate,
) -> WellnessResult<Plan> {
    complete_on_date(store, user, today)
}

/// Mark a plan `Completed` from any status, including `Scheduled`.
pub fn complete_on_date<S: PlanStore + ?Sized>(
    store: &S,
    user: &UserContext,
    date: NaiveDate,
) -> WellnessResult<Plan> {
    let plan = get_on_date(store, user, date)?;
    if plan.status == PlanStatus::Completed {
        debug!(user = %user.user_id, %date, "complete is a no-op");
        return Ok(plan);
    }
    let previous = plan.status;
    let plan = store.set_status(user, date, PlanStatus::Completed)?;
    info!(user = %user.user_id, %date, from = %previous, "plan completed");
    Ok(plan)
}

/// Build items for `date` from the user's assessed intensity and store them.
pub fn generate<P, M>(
    plans: &P,
    metrics: &M,
    user: &UserContext,
    date: NaiveDate,
    now: DateTime<Utc>,
) -> WellnessResult<(Plan, Assessment)>
where
    P: PlanStore + ?Sized,
    M: MetricStore + ?Sized,
{
    let assessment = behavior::assess(plans, metrics, user, date, now)?;
    let plan = plans.put_items(user, date, &plan_items(assessment.intensity))?;
    info!(
        user = %user.user_id,
        %date,
        intensity = %assessment.intensity,
        "generated plan"
    );
    Ok((plan, assessment))
}

/// Replace the items of all seven days starting at `today`.
///
/// Days without a plan are created as `Scheduled`; existing plans keep
/// their status. The returned window reflects the store after the write.
pub fn regenerate_week<P, M>(
    plans: &P,
    metrics: &M,
    user: &UserContext,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> WellnessResult<(WeeklyWindow, Assessment)>
where
    P: PlanStore + ?Sized,
    M: MetricStore + ?Sized,
{
    let assessment = behavior::assess(plans, metrics, user, today, now)?;
    let items = plan_items(assessment.intensity);
    let week: Vec<_> = week_dates(today).map(|d| (d, items.clone())).collect();
    plans.regenerate_week(user, &week)?;
    info!(
        user = %user.user_id,
        start = %today,
        intensity = %assessment.intensity,
        "regenerated week"
    );
    Ok((get_week(plans, user, today)?, assessment))
}

fn week_dates(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..WeeklyWindow::DAYS).map(move |i| start + Duration::days(i))
}
