use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::user::UserContext;
use crate::core::WellnessError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub coach: Coach,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_user_id() -> String {
    "U123".to_string()
}
fn default_name() -> String {
    "Demo User".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            name: default_name(),
        }
    }
}

/// Step thresholds the nudge messages are keyed on.
#[derive(Debug, Serialize, Deserialize)]
pub struct Coach {
    #[serde(default = "default_low_step_threshold")]
    pub low_step_threshold: u32,
    #[serde(default = "default_moderate_step_threshold")]
    pub moderate_step_threshold: u32,
}

fn default_low_step_threshold() -> u32 {
    300
}
fn default_moderate_step_threshold() -> u32 {
    2000
}

impl Default for Coach {
    fn default() -> Self {
        Self {
            low_step_threshold: default_low_step_threshold(),
            moderate_step_threshold: default_moderate_step_threshold(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on creation
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `section.key = value` update.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "profile.user_id" | "user_id" => {
                if value.trim().is_empty() {
                    anyhow::bail!("user_id must not be empty");
                }
                self.profile.user_id = value.trim().to_string();
            }
            "profile.name" | "name" => self.profile.name = value.to_string(),
            "coach.low_step_threshold" => self.coach.low_step_threshold = value.parse()?,
            "coach.moderate_step_threshold" => {
                self.coach.moderate_step_threshold = value.parse()?
            }
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        if self.coach.low_step_threshold > self.coach.moderate_step_threshold {
            anyhow::bail!(
                "coach.low_step_threshold ({}) must not exceed coach.moderate_step_threshold ({})",
                self.coach.low_step_threshold,
                self.coach.moderate_step_threshold
            );
        }
        Ok(())
    }

    /// The user context for store calls, with an optional override.
    /// A blank id is rejected whether it comes from the override or the file.
    pub fn user(&self, override_id: Option<&str>) -> anyhow::Result<UserContext> {
        let id = override_id.unwrap_or(&self.profile.user_id).trim();
        if id.is_empty() {
            return Err(WellnessError::invalid("user id must not be empty").into());
        }
        Ok(UserContext::new(id))
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("WELLPLAN_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wellplan")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
