use chrono::{NaiveDate, Utc};
use rusqlite::{OptionalExtension, params};
use tracing::warn;

use crate::core::error::{WellnessError, WellnessResult};
use crate::core::store::PlanStore;
use crate::models::{Plan, PlanItem, PlanStatus, UserContext};

use super::{Database, ts_from_sql, ts_to_sql};

const SELECT_COLS: &str = "date, items, status, updated_at";

struct PlanRow {
    date: String,
    items: String,
    status: String,
    updated_at: String,
}

macro_rules! map_row {
    ($row:expr) => {
        Ok(PlanRow {
            date: $row.get(0)?,
            items: $row.get(1)?,
            status: $row.get(2)?,
            updated_at: $row.get(3)?,
        })
    };
}

fn row_to_plan(r: PlanRow) -> WellnessResult<Plan> {
    decode_plan(r).inspect_err(|e| warn!(error = %e, "undecodable plan row"))
}

fn decode_plan(r: PlanRow) -> WellnessResult<Plan> {
    let date: NaiveDate = r
        .date
        .parse()
        .map_err(|e| WellnessError::CorruptRecord(format!("bad plan date '{}': {}", r.date, e)))?;
    let items: Vec<PlanItem> = serde_json::from_str(&r.items)
        .map_err(|e| WellnessError::CorruptRecord(format!("plan {} items: {}", date, e)))?;
    let status: PlanStatus = r
        .status
        .parse()
        .map_err(|e: anyhow::Error| WellnessError::CorruptRecord(e.to_string()))?;
    Ok(Plan {
        date,
        items,
        status,
        updated_at: ts_from_sql(&r.updated_at)?,
    })
}

fn items_json(items: &[PlanItem]) -> WellnessResult<String> {
    serde_json::to_string(items).map_err(|e| WellnessError::CorruptRecord(e.to_string()))
}

impl PlanStore for Database {
    fn get(&self, user: &UserContext, date: NaiveDate) -> WellnessResult<Option<Plan>> {
        let sql = format!("SELECT {SELECT_COLS} FROM plans WHERE user_id = ?1 AND date = ?2");
        let row = self
            .conn
            .query_row(&sql, params![user.user_id, date.to_string()], |row| {
                map_row!(row)
            })
            .optional()?;
        row.map(row_to_plan).transpose()
    }

    fn range(
        &self,
        user: &UserContext,
        from: NaiveDate,
        to: NaiveDate,
    ) -> WellnessResult<Vec<Plan>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM plans
             WHERE user_id = ?1 AND date >= ?2 AND date <= ?3 ORDER BY date ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(
            params![user.user_id, from.to_string(), to.to_string()],
            |row| map_row!(row),
        )?;

        let mut plans = Vec::new();
        for row in rows {
            plans.push(row_to_plan(row?)?);
        }
        Ok(plans)
    }

    fn latest(&self, user: &UserContext) -> WellnessResult<Option<Plan>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM plans WHERE user_id = ?1 ORDER BY date DESC LIMIT 1"
        );
        let row = self
            .conn
            .query_row(&sql, params![user.user_id], |row| map_row!(row))
            .optional()?;
        row.map(row_to_plan).transpose()
    }

    fn set_status(
        &self,
        user: &UserContext,
        date: NaiveDate,
        status: PlanStatus,
    ) -> WellnessResult<Plan> {
        let count = self.conn.execute(
            "UPDATE plans SET status = ?1, updated_at = ?2 WHERE user_id = ?3 AND date = ?4",
            params![
                status.to_string(),
                ts_to_sql(&Utc::now()),
                user.user_id,
                date.to_string()
            ],
        )?;
        if count == 0 {
            return Err(WellnessError::NotFound { date });
        }
        self.get(user, date)?.ok_or(WellnessError::NotFound { date })
    }

    fn put_items(
        &self,
        user: &UserContext,
        date: NaiveDate,
        items: &[PlanItem],
    ) -> WellnessResult<Plan> {
        self.conn.execute(
            "INSERT INTO plans (user_id, date, items, status, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(user_id, date) DO UPDATE SET
                items = excluded.items,
                updated_at = excluded.updated_at",
            params![
                user.user_id,
                date.to_string(),
                items_json(items)?,
                PlanStatus::Scheduled.to_string(),
                ts_to_sql(&Utc::now()),
            ],
        )?;
        self.get(user, date)?.ok_or(WellnessError::NotFound { date })
    }

    fn regenerate_week(
        &self,
        user: &UserContext,
        week: &[(NaiveDate, Vec<PlanItem>)],
    ) -> WellnessResult<Vec<Plan>> {
        let tx = self.conn.unchecked_transaction()?;
        let mut plans = Vec::with_capacity(week.len());
        for (date, items) in week {
            plans.push(self.put_items(user, *date, items)?);
        }
        tx.commit()?;
        Ok(plans)
    }
}
