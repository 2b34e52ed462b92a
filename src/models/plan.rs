use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "Scheduled"),
            Self::InProgress => write!(f, "InProgress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for PlanStatus {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "Scheduled" | "scheduled" | "Proposed" => Ok(Self::Scheduled),
            "InProgress" | "in_progress" => Ok(Self::InProgress),
            "Completed" | "completed" => Ok(Self::Completed),
            _ => anyhow::bail!(
                "invalid plan status: {} (expected Scheduled/InProgress/Completed)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

impl Intensity {
    /// Position on the Low..High scale, used to measure jumps between levels.
    pub fn level(self) -> i8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

impl FromStr for Intensity {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => anyhow::bail!("invalid intensity: {} (expected low/moderate/high)", s),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ItemKind {
    Workout,
    Meal,
    Habit,
    Recovery,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workout => write!(f, "Workout"),
            Self::Meal => write!(f, "Meal"),
            Self::Habit => write!(f, "Habit"),
            Self::Recovery => write!(f, "Recovery"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration_min: u32,
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
}

impl PlanItem {
    pub fn new(kind: ItemKind, intensity: Intensity, duration_min: u32, notes: &str) -> Self {
        Self {
            kind,
            name: format!("{} ({})", kind, intensity),
            duration_min,
            intensity,
            notes: notes.to_string(),
        }
    }
}

/// One user's plan for a single calendar date. The date is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub date: NaiveDate,
    pub items: Vec<PlanItem>,
    pub status: PlanStatus,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(date: NaiveDate, items: Vec<PlanItem>) -> Self {
        Self {
            date,
            items,
            status: PlanStatus::Scheduled,
            updated_at: Utc::now(),
        }
    }

    /// Intensity of the first workout item, if the plan has one.
    pub fn workout_intensity(&self) -> Option<Intensity> {
        self.items
            .iter()
            .find(|i| i.kind == ItemKind::Workout)
            .map(|i| i.intensity)
    }
}

/// A derived, non-persisted view of seven consecutive dates.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyWindow {
    pub start: NaiveDate,
    pub days: Vec<DaySlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub plan: Option<Plan>,
}

impl WeeklyWindow {
    pub const DAYS: i64 = 7;

    /// Plans present in the window, in ascending date order.
    pub fn plans(&self) -> impl Iterator<Item = &Plan> {
        self.days.iter().filter_map(|d| d.plan.as_ref())
    }

    pub fn missing_dates(&self) -> Vec<NaiveDate> {
        self.days
            .iter()
            .filter(|d| d.plan.is_none())
            .map(|d| d.date)
            .collect()
    }
}
