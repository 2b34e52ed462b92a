use serde::Serialize;

const STEPS_WEIGHT: f64 = 0.30;
const ACTIVE_WEIGHT: f64 = 0.20;
const SLEEP_WEIGHT: f64 = 0.50;

/// Composite daily wellness score in `[0, 100]`.
///
/// 10,000 steps, 50 active minutes and a sleep average of 100 each saturate
/// their component. Out-of-range and negative inputs are clamped, so the
/// result is always within bounds.
pub fn wellness_score(today_steps: i64, active_minutes: i64, sleep_average: f64) -> u8 {
    let steps = (today_steps as f64 / 100.0).clamp(0.0, 100.0);
    let active = (active_minutes as f64 * 2.0).clamp(0.0, 100.0);
    let sleep = if sleep_average.is_nan() {
        0.0
    } else {
        sleep_average.clamp(0.0, 100.0)
    };
    let score = STEPS_WEIGHT * steps + ACTIVE_WEIGHT * active + SLEEP_WEIGHT * sleep;
    score.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    GoodMomentum,
    BuildingConsistency,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::GoodMomentum,
            _ => Self::BuildingConsistency,
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::GoodMomentum => "good momentum",
            Self::BuildingConsistency => "building consistency",
        }
    }
}

/// Caption for a score: `>= 80` excellent, `>= 60` good momentum.
pub fn caption(score: u8) -> &'static str {
    ScoreBand::for_score(score).caption()
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.caption())
    }
}
