use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of biometric reading. Unknown names are carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricType {
    Steps,
    HeartRate,
    SleepScore,
    Other(String),
}

impl MetricType {
    /// Canonical name as stored and exchanged over the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Steps => "Steps",
            Self::HeartRate => "HR",
            Self::SleepScore => "SleepScore",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for MetricType {
    fn from(s: &str) -> Self {
        match s.trim() {
            "Steps" | "steps" => Self::Steps,
            "HR" | "hr" | "HeartRate" | "heart_rate" => Self::HeartRate,
            "SleepScore" | "sleep_score" | "sleep" => Self::SleepScore,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for MetricType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for MetricType {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::from(s))
    }
}

impl From<MetricType> for String {
    fn from(t: MetricType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for MetricType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display unit for a metric type.
pub fn default_unit(metric_type: &MetricType) -> &'static str {
    match metric_type {
        MetricType::Steps => "steps",
        MetricType::HeartRate => "bpm",
        MetricType::SleepScore => "0-100",
        MetricType::Other(_) => "",
    }
}

/// One timestamped biometric reading. Samples are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub id: String,
    pub metric_type: MetricType,
    pub value: f64,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
    pub device_id: String,
    /// Day key for once-per-day records such as daily step totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
}

impl MetricSample {
    pub fn new(metric_type: MetricType, value: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            metric_type,
            value,
            timestamp: Utc::now(),
            device_id: "DEV1".to_string(),
            day: None,
        }
    }

    /// Calendar date the sample counts toward: the day key if set, else the
    /// local date of the timestamp, matching how the CLI resolves "today".
    pub fn date(&self) -> NaiveDate {
        self.day
            .unwrap_or_else(|| self.timestamp.with_timezone(&Local).date_naive())
    }
}
