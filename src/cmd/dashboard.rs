use anyhow::Result;

use wellplan::core::dashboard;
use wellplan::output::human;

use super::{Context, print_json};

pub fn run(ctx: &Context) -> Result<()> {
    let (_, db, user) = ctx.open()?;
    let d = dashboard::refresh(&db, &db, &user, ctx.today())?;
    if ctx.human {
        println!("{}", human::format_dashboard(&d));
        Ok(())
    } else {
        print_json("dashboard", serde_json::to_value(&d)?)
    }
}
