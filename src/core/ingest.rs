use chrono::{NaiveDate, TimeZone, Utc};
use regex::Regex;
use serde_json::Value;
use tracing::info;

use super::error::{WellnessError, WellnessResult};
use super::store::MetricStore;
use crate::models::{MetricSample, MetricType, UserContext};

/// A single reading to record.
pub struct LogEntry<'a> {
    pub metric_type: &'a str,
    pub value: f64,
    pub device_id: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

/// Reject readings the aggregator cannot use.
pub fn validate(metric_type: &MetricType, value: f64) -> WellnessResult<()> {
    if !value.is_finite() {
        return Err(WellnessError::invalid(format!(
            "{} value must be a finite number, got {}",
            metric_type, value
        )));
    }
    if *metric_type == MetricType::Steps && value < 0.0 {
        return Err(WellnessError::invalid(format!(
            "Steps must be >= 0, got {}",
            value
        )));
    }
    Ok(())
}

fn build_sample(entry: &LogEntry<'_>) -> WellnessResult<MetricSample> {
    if entry.metric_type.trim().is_empty() {
        return Err(WellnessError::invalid("metric type must not be empty"));
    }
    let metric_type: MetricType = entry.metric_type.into();
    validate(&metric_type, entry.value)?;
    let mut sample = MetricSample::new(metric_type, entry.value);
    if let Some(d) = entry.device_id {
        sample.device_id = d.to_string();
    }
    if let Some(d) = entry.date
        && let Some(dt) = d.and_hms_opt(12, 0, 0)
    {
        sample.timestamp = Utc.from_utc_datetime(&dt);
    }
    Ok(sample)
}

/// Record one reading. Returns the stored sample.
pub fn log_metric<S: MetricStore + ?Sized>(
    store: &S,
    user: &UserContext,
    entry: LogEntry<'_>,
) -> WellnessResult<MetricSample> {
    let sample = build_sample(&entry)?;
    store.append(user, &sample)?;
    info!(user = %user.user_id, metric = %sample.metric_type, value = sample.value, "sample appended");
    Ok(sample)
}

/// Record a batch of readings from a JSON array of
/// `{"metricType": .., "value": ..}` objects (`type` is accepted for
/// `metricType`). Nothing is written unless every entry is valid.
pub fn log_batch<S: MetricStore + ?Sized>(
    store: &S,
    user: &UserContext,
    batch_json: &str,
    date: Option<NaiveDate>,
) -> WellnessResult<Vec<MetricSample>> {
    let entries: Vec<Value> = serde_json::from_str(batch_json)
        .map_err(|e| WellnessError::invalid(format!("batch is not a JSON array: {}", e)))?;

    let mut samples = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let metric_type = entry["metricType"]
            .as_str()
            .or_else(|| entry["type"].as_str())
            .ok_or_else(|| WellnessError::invalid(format!("entry {}: missing 'metricType'", i)))?;
        let value = numeric(&entry["value"])
            .ok_or_else(|| WellnessError::invalid(format!("entry {}: missing or non-numeric 'value'", i)))?;
        samples.push(build_sample(&LogEntry {
            metric_type,
            value,
            device_id: entry["deviceId"].as_str(),
            date,
        })?);
    }

    for s in &samples {
        store.append(user, s)?;
    }
    info!(user = %user.user_id, count = samples.len(), "batch appended");
    Ok(samples)
}

/// Convert `steps:5000,hr:72` into the JSON array form `log_batch` reads.
pub fn parse_simple_batch(input: &str) -> WellnessResult<String> {
    let re = Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*:\s*(\S+)\s*$")
        .map_err(|e| WellnessError::invalid(e.to_string()))?;

    let mut entries = Vec::new();
    for part in input.split(',').filter(|p| !p.trim().is_empty()) {
        let caps = re.captures(part).ok_or_else(|| {
            WellnessError::invalid(format!("expected TYPE:VALUE, got '{}'", part.trim()))
        })?;
        let value: f64 = caps[2]
            .parse()
            .map_err(|_| WellnessError::invalid(format!("invalid value: {}", &caps[2])))?;
        entries.push(serde_json::json!({ "metricType": &caps[1], "value": value }));
    }
    if entries.is_empty() {
        return Err(WellnessError::invalid("batch is empty"));
    }
    Ok(Value::Array(entries).to_string())
}

/// Overwrite the day's step total.
pub fn set_daily_steps<S: MetricStore + ?Sized>(
    store: &S,
    user: &UserContext,
    day: NaiveDate,
    value: i64,
) -> WellnessResult<MetricSample> {
    let steps = u32::try_from(value)
        .map_err(|_| WellnessError::invalid(format!("Steps must be >= 0, got {}", value)))?;
    let sample = store.set_daily_steps(user, day, steps)?;
    info!(user = %user.user_id, %day, steps, "daily steps set");
    Ok(sample)
}

fn numeric(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
