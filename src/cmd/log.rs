use anyhow::Result;
use serde_json::json;

use wellplan::core::MetricStore;
use wellplan::core::ingest::{self, LogEntry};
use wellplan::output::human;

use super::{Context, print_json};

pub fn run(ctx: &Context, metric_type: &str, value: f64, device: Option<&str>) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let sample = ingest::log_metric(
        &db,
        &user,
        LogEntry {
            metric_type,
            value,
            device_id: device,
            date: ctx.date,
        },
    )?;
    if ctx.human {
        println!("Logged: {}", human::format_sample(&sample));
        Ok(())
    } else {
        print_json("log", json!({ "entry": sample }))
    }
}

pub fn run_batch(ctx: &Context, batch_input: &str) -> Result<()> {
    let (_, db, user) = ctx.open()?;

    // JSON arrays start with '[', anything else is the TYPE:VALUE form
    let batch_json = if batch_input.trim_start().starts_with('[') {
        batch_input.to_string()
    } else {
        ingest::parse_simple_batch(batch_input)?
    };
    let samples = ingest::log_batch(&db, &user, &batch_json, ctx.date)?;

    if ctx.human {
        for s in &samples {
            println!("Logged: {}", human::format_sample(s));
        }
        Ok(())
    } else {
        print_json("log", json!({ "ingested": samples.len(), "entries": samples }))
    }
}

pub fn run_steps(ctx: &Context, value: i64) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let day = ctx.today();
    let sample = ingest::set_daily_steps(&db, &user, day, value)?;
    if ctx.human {
        println!("Steps for {}: {}", day, sample.value);
        Ok(())
    } else {
        print_json(
            "steps",
            json!({ "ok": true, "steps": sample.value as i64, "date": day }),
        )
    }
}

pub fn run_list(ctx: &Context, last: u32) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let samples = db.list(&user, Some(last))?;
    if ctx.human {
        if samples.is_empty() {
            println!("No samples recorded.");
        }
        for s in &samples {
            println!("{}", human::format_sample(s));
        }
        Ok(())
    } else {
        print_json("metrics", json!({ "samples": samples }))
    }
}
