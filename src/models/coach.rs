use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub message: String,
    pub context: String,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            context: context.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Post-session feedback: perceived exertion, mood and pain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub pain: String,
    pub notes: String,
    #[serde(rename = "ts")]
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    pub fn new(rpe: Option<u8>, mood: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            rpe,
            mood,
            pain: "none".to_string(),
            notes: String::new(),
            timestamp: Utc::now(),
        }
    }
}
