use anyhow::Result;
use chrono::Utc;
use serde_json::json;

use wellplan::core::lifecycle;
use wellplan::output::human;

use super::{Context, print_json};

pub fn run_today(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let plan = lifecycle::get_today(&db, &user, ctx.today())?;
    if ctx.human {
        println!("{}", human::format_plan(&plan));
        Ok(())
    } else {
        print_json("plan", json!({ "plan": plan }))
    }
}

pub fn run_week(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let week = lifecycle::get_week(&db, &user, ctx.today())?;
    if ctx.human {
        println!("{}", human::format_week(&week));
        Ok(())
    } else {
        print_json("plan", json!({ "week": week }))
    }
}

pub fn run_start(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let plan = lifecycle::start_on_date(&db, &user, ctx.today())?;
    if ctx.human {
        println!("Plan for {}: {}", plan.date, plan.status);
        Ok(())
    } else {
        print_json("plan", json!({ "date": plan.date, "status": plan.status }))
    }
}

pub fn run_complete(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let plan = lifecycle::complete_on_date(&db, &user, ctx.today())?;
    if ctx.human {
        println!("Plan for {}: {}", plan.date, plan.status);
        Ok(())
    } else {
        print_json("plan", json!({ "date": plan.date, "status": plan.status }))
    }
}

pub fn run_generate(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let (plan, assessment) = lifecycle::generate(&db, &db, &user, ctx.today(), Utc::now())?;
    if ctx.human {
        println!(
            "Generated {} plan (readiness {:.2}, adherence {:.2})\n{}",
            assessment.intensity,
            assessment.readiness,
            assessment.adherence,
            human::format_plan(&plan)
        );
        Ok(())
    } else {
        print_json("plan", json!({ "plan": plan, "assessment": assessment }))
    }
}

pub fn run_regenerate(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let (week, assessment) = lifecycle::regenerate_week(&db, &db, &user, ctx.today(), Utc::now())?;
    if ctx.human {
        println!("Regenerated week at {} intensity", assessment.intensity);
        println!("{}", human::format_week(&week));
        Ok(())
    } else {
        print_json("plan", json!({ "week": week, "assessment": assessment }))
    }
}
