use anyhow::Result;
use serde_json::json;

use wellplan::models::config::Config;

use super::print_json;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        println!("{}", toml::to_string_pretty(&config)?);
        Ok(())
    } else {
        print_json("config", json!({ "config": config }))
    }
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    print_json("config", json!({ "key": key, "value": value }))
}
