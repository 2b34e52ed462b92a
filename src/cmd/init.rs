use anyhow::Result;

use wellplan::db::Database;
use wellplan::models::config::Config;

/// Write the config (keeping any existing values) and create the database.
pub fn run() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;
    Database::open(&Config::db_path())?;
    println!(
        "Config initialized at {:?} for user {}",
        Config::path(),
        config.profile.user_id
    );
    Ok(())
}
