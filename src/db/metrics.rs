use chrono::{Local, NaiveDate, TimeZone, Utc};
use rusqlite::params;
use tracing::warn;

use crate::core::error::{WellnessError, WellnessResult};
use crate::core::store::MetricStore;
use crate::models::{MetricSample, MetricType, UserContext};

use super::{Database, ts_from_sql, ts_to_sql};

const SELECT_COLS: &str = "id, metric_type, value, ts, device_id, day";

struct SampleRow {
    id: String,
    metric_type: String,
    value: f64,
    ts: String,
    device_id: String,
    day: Option<String>,
}

macro_rules! map_row {
    ($row:expr) => {
        Ok(SampleRow {
            id: $row.get(0)?,
            metric_type: $row.get(1)?,
            value: $row.get(2)?,
            ts: $row.get(3)?,
            device_id: $row.get(4)?,
            day: $row.get(5)?,
        })
    };
}

fn row_to_sample(r: SampleRow) -> WellnessResult<MetricSample> {
    decode_sample(r).inspect_err(|e| warn!(error = %e, "undecodable sample row"))
}

fn decode_sample(r: SampleRow) -> WellnessResult<MetricSample> {
    let day = match r.day {
        Some(ref d) => Some(d.parse::<NaiveDate>().map_err(|e| {
            WellnessError::CorruptRecord(format!("bad sample day '{}': {}", d, e))
        })?),
        None => None,
    };
    Ok(MetricSample {
        id: r.id,
        metric_type: MetricType::from(r.metric_type),
        value: r.value,
        timestamp: ts_from_sql(&r.ts)?,
        device_id: r.device_id,
        day,
    })
}

impl MetricStore for Database {
    fn append(&self, user: &UserContext, sample: &MetricSample) -> WellnessResult<()> {
        self.conn.execute(
            "INSERT INTO samples (id, user_id, metric_type, value, ts, device_id, day)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                sample.id,
                user.user_id,
                sample.metric_type.as_str(),
                sample.value,
                ts_to_sql(&sample.timestamp),
                sample.device_id,
                sample.day.map(|d| d.to_string()),
            ],
        )?;
        Ok(())
    }

    fn list(&self, user: &UserContext, limit: Option<u32>) -> WellnessResult<Vec<MetricSample>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM samples WHERE user_id = ?1
             ORDER BY ts DESC LIMIT ?2"
        );
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map(i64::from).unwrap_or(-1);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user.user_id, limit], |row| map_row!(row))?;

        let mut samples = Vec::new();
        for row in rows {
            samples.push(row_to_sample(row?)?);
        }
        Ok(samples)
    }

    fn set_daily_steps(
        &self,
        user: &UserContext,
        day: NaiveDate,
        value: u32,
    ) -> WellnessResult<MetricSample> {
        // Stamp past or future days at noon so the timestamp agrees with the day key.
        let now = Utc::now();
        let timestamp = if Local::now().date_naive() == day {
            now
        } else {
            day.and_hms_opt(12, 0, 0)
                .map(|dt| Utc.from_utc_datetime(&dt))
                .unwrap_or(now)
        };
        let mut sample = MetricSample::new(MetricType::Steps, f64::from(value));
        sample.timestamp = timestamp;
        sample.day = Some(day);

        self.conn.execute(
            "INSERT INTO samples (id, user_id, metric_type, value, ts, device_id, day)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id, metric_type, day) WHERE day IS NOT NULL DO UPDATE SET
                value = excluded.value,
                ts = excluded.ts,
                device_id = excluded.device_id",
            params![
                sample.id,
                user.user_id,
                sample.metric_type.as_str(),
                sample.value,
                ts_to_sql(&sample.timestamp),
                sample.device_id,
                day.to_string(),
            ],
        )?;

        let sql = format!(
            "SELECT {SELECT_COLS} FROM samples
             WHERE user_id = ?1 AND metric_type = ?2 AND day = ?3"
        );
        let row = self.conn.query_row(
            &sql,
            params![user.user_id, MetricType::Steps.as_str(), day.to_string()],
            |row| map_row!(row),
        )?;
        row_to_sample(row)
    }
}
