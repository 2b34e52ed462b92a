use crate::models::PlanItem;
use crate::models::plan::{Intensity, ItemKind};

/// Rule-based daily template for an intensity level.
pub fn plan_items(intensity: Intensity) -> Vec<PlanItem> {
    use ItemKind::{Meal, Recovery, Workout};
    use Intensity::{High, Low, Moderate};

    match intensity {
        Low => vec![
            PlanItem::new(Workout, Low, 20, "Light mobility + walk"),
            PlanItem::new(Meal, Low, 5, "Hydrate: +1L"),
            PlanItem::new(Recovery, Low, 10, "Stretch + sleep target 8h"),
        ],
        Moderate => vec![
            PlanItem::new(Workout, Moderate, 35, "Bodyweight circuit + brisk walk"),
            PlanItem::new(Meal, Low, 5, "2L water + protein target"),
            PlanItem::new(Recovery, Low, 10, "Cooldown + mindfulness 5m"),
        ],
        High => vec![
            PlanItem::new(Workout, High, 45, "Intervals + strength"),
            PlanItem::new(Meal, Low, 5, "Macros check + 2.5L water"),
            PlanItem::new(Recovery, Low, 15, "Mobility + sleep hygiene"),
        ],
    }
}
