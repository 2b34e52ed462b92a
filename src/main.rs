mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, PlanAction};
use std::process;
use tracing_subscriber::EnvFilter;
use wellplan::output;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("WELLPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let ctx = cmd::Context {
        date: cli.date,
        user: cli.user.clone(),
        human: cli.human,
    };

    let (name, result) = match cli.command {
        Commands::Init => ("init", cmd::init::run()),
        Commands::Plan { action } => (
            "plan",
            match action {
                PlanAction::Today => cmd::plan::run_today(&ctx),
                PlanAction::Week => cmd::plan::run_week(&ctx),
                PlanAction::Start => cmd::plan::run_start(&ctx),
                PlanAction::Complete => cmd::plan::run_complete(&ctx),
                PlanAction::Generate => cmd::plan::run_generate(&ctx),
                PlanAction::Regenerate => cmd::plan::run_regenerate(&ctx),
            },
        ),
        Commands::Log {
            r#type,
            value,
            device,
            batch,
        } => (
            "log",
            match (batch, r#type, value) {
                (Some(batch), _, _) => cmd::log::run_batch(&ctx, &batch),
                (None, Some(t), Some(v)) => cmd::log::run(&ctx, &t, v, device.as_deref()),
                _ => Err(anyhow::anyhow!("type and value are required without --batch")),
            },
        ),
        Commands::Steps { value } => ("steps", cmd::log::run_steps(&ctx, value)),
        Commands::Metrics { last } => ("metrics", cmd::log::run_list(&ctx, last)),
        Commands::Dashboard => ("dashboard", cmd::dashboard::run(&ctx)),
        Commands::Nudge => ("nudge", cmd::coach::run_nudge(&ctx)),
        Commands::Recommendations => ("recommendations", cmd::coach::run_list(&ctx)),
        Commands::Feedback {
            rpe,
            mood,
            pain,
            notes,
        } => (
            "feedback",
            cmd::coach::run_feedback(
                &ctx,
                rpe,
                mood.as_deref(),
                pain.as_deref(),
                notes.as_deref(),
            ),
        ),
        Commands::Config { action } => (
            "config",
            match action {
                ConfigAction::Show => cmd::config::run_show(cli.human),
                ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
            },
        ),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "wellplan",
                &mut std::io::stdout(),
            );
            ("completions", Ok(()))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::failure(name, &e));
        process::exit(1);
    }
}
