use anyhow::Result;
use serde_json::json;

use wellplan::core::coach::{self, FeedbackInput};
use wellplan::output::human;

use super::{Context, print_json};

pub fn run_nudge(ctx: &Context) -> Result<()> {
    let (config, db, user) = ctx.open()?;
    let rec = coach::nudge(&db, &user, &config.coach)?;
    if ctx.human {
        println!("{}", rec.message);
        Ok(())
    } else {
        print_json("nudge", json!({ "message": rec.message, "ts": rec.timestamp }))
    }
}

pub fn run_list(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let recs = coach::recommendations(&db, &user)?;
    if ctx.human {
        if recs.is_empty() {
            println!("No recommendations yet.");
        }
        for r in &recs {
            println!("{}", human::format_recommendation(r));
        }
        Ok(())
    } else {
        print_json("recommendations", json!({ "recommendations": recs }))
    }
}

pub fn run_feedback(
    ctx: &Context,
    rpe: Option<u8>,
    mood: Option<&str>,
    pain: Option<&str>,
    notes: Option<&str>,
) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let fb = coach::record_feedback(
        &db,
        &user,
        FeedbackInput {
            rpe,
            mood,
            pain,
            notes,
        },
    )?;
    if ctx.human {
        println!("Feedback recorded.");
        Ok(())
    } else {
        print_json("feedback", json!({ "ok": true, "feedback": fb }))
    }
}
