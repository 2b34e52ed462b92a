pub mod coach;
pub mod config;
pub mod dashboard;
pub mod init;
pub mod log;
pub mod plan;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use wellplan::db::Database;
use wellplan::models::UserContext;
use wellplan::models::config::Config;

/// Global flags shared by every command.
pub struct Context {
    pub date: Option<NaiveDate>,
    pub user: Option<String>,
    pub human: bool,
}

impl Context {
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Load config and open the database for the effective user.
    pub fn open(&self) -> Result<(Config, Database, UserContext)> {
        let config = Config::load()?;
        let db = Database::open(&Config::db_path())?;
        let user = config.user(self.user.as_deref())?;
        Ok((config, db, user))
    }
}

pub fn print_json(command: &str, data: serde_json::Value) -> Result<()> {
    let out = wellplan::output::success(command, data);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
