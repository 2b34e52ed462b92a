use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "wellplan", version, about = "Daily wellness plan tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Act as this user instead of profile.user_id
    #[arg(long, global = true)]
    pub user: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config and create the database
    Init,

    /// Show and update daily plans
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Record a biometric sample
    Log {
        /// Metric type (steps, hr, sleep, or any custom name)
        #[arg(required_unless_present = "batch")]
        r#type: Option<String>,

        /// Metric value
        #[arg(required_unless_present = "batch", allow_negative_numbers = true)]
        value: Option<f64>,

        /// Device identifier (default: DEV1)
        #[arg(long)]
        device: Option<String>,

        /// JSON array of {metricType, value} or "steps:5000,hr:72"
        #[arg(long)]
        batch: Option<String>,
    },

    /// Set the day's total step count, replacing any earlier total
    Steps {
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// List recent samples, newest first
    Metrics {
        /// Number of samples to show
        #[arg(long, default_value_t = 50)]
        last: u32,
    },

    /// Today's metrics and wellness score
    Dashboard,

    /// Generate a coaching nudge from recent steps
    Nudge,

    /// List recent coaching recommendations
    Recommendations,

    /// Record how a session felt
    Feedback {
        /// Rate of perceived exertion, 0-10
        #[arg(long)]
        rpe: Option<u8>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        pain: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print shell completions
    Completions { shell: Shell },
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the plan for today (or --date)
    Today,
    /// Show the seven days starting today (or --date)
    Week,
    /// Mark the plan started
    Start,
    /// Mark the plan completed
    Complete,
    /// Build the plan for today (or --date) from recent readiness
    Generate,
    /// Replace the items of the coming week
    Regenerate,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. profile.user_id, coach.low_step_threshold)
        key: String,
        /// Config value
        value: String,
    },
}
