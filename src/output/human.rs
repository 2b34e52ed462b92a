use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

use crate::core::dashboard::Dashboard;
use crate::core::score::ScoreBand;
use crate::models::coach::Recommendation;
use crate::models::metric::default_unit;
use crate::models::plan::WeeklyWindow;
use crate::models::{MetricSample, Plan};

/// Pretty-print a single sample.
pub fn format_sample(s: &MetricSample) -> String {
    let ts = s.timestamp.format("%Y-%m-%d %H:%M");
    let unit = default_unit(&s.metric_type);
    let mut line = format!("{} | {} = {}", ts, s.metric_type, s.value);
    if !unit.is_empty() {
        line.push_str(&format!(" {}", unit));
    }
    if let Some(day) = s.day {
        line.push_str(&format!("  (daily total for {})", day));
    }
    line
}

/// Pretty-print a plan with one line per item.
pub fn format_plan(p: &Plan) -> String {
    let mut out = format!("Plan for {} [{}]", p.date, p.status);
    if p.items.is_empty() {
        out.push_str("\n  (no items)");
    }
    for item in &p.items {
        out.push_str(&format!(
            "\n  - {} {} min ({})",
            item.kind, item.duration_min, item.intensity
        ));
        if !item.notes.is_empty() {
            out.push_str(&format!(": {}", item.notes));
        }
    }
    out
}

pub fn format_week(w: &WeeklyWindow) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Date", "Status", "Workout", "Items"]);
    for day in &w.days {
        match &day.plan {
            Some(p) => {
                let workout = p
                    .items
                    .iter()
                    .find(|i| i.kind == crate::models::plan::ItemKind::Workout)
                    .map(|i| format!("{} min {}", i.duration_min, i.intensity))
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(vec![
                    day.date.to_string(),
                    p.status.to_string(),
                    workout,
                    p.items.len().to_string(),
                ]);
            }
            None => {
                table.add_row(vec![
                    day.date.to_string(),
                    "no plan".to_string(),
                    "-".to_string(),
                    "0".to_string(),
                ]);
            }
        }
    }
    table.to_string()
}

pub fn format_dashboard(d: &Dashboard) -> String {
    let caption = match d.band {
        ScoreBand::Excellent => d.caption.green().bold(),
        ScoreBand::GoodMomentum => d.caption.yellow(),
        ScoreBand::BuildingConsistency => d.caption.normal(),
    };
    let mut out = format!("=== Wellness: {} ===\n\n", d.date);
    out.push_str(&format!("Score: {}/100 ({})\n", d.score, caption));
    out.push_str(&format!("Steps today: {}\n", d.today_steps));
    out.push_str(&format!("Active minutes: {}\n", d.active_minutes));
    out.push_str(&format!("Avg heart rate: {} bpm\n", d.heart_rate_avg));
    out.push_str(&format!("Avg sleep score: {}", d.sleep_avg));
    match &d.plan {
        Some(p) => out.push_str(&format!("\nPlan: {}", p.status)),
        None => out.push_str("\nPlan: none for today"),
    }
    out
}

pub fn format_recommendation(r: &Recommendation) -> String {
    format!(
        "{} | {}  [{}]",
        r.timestamp.format("%Y-%m-%d %H:%M"),
        r.message,
        r.context
    )
}
