mod coach;
mod metrics;
mod migrate;
mod plans;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;

use crate::core::error::{WellnessError, WellnessResult};

pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            if !path.exists() {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .mode(0o600)
                    .open(path)?;
            } else {
                let mut perms = fs::metadata(path)?.permissions();
                if perms.mode() & 0o777 != 0o600 {
                    perms.set_mode(0o600);
                    fs::set_permissions(path, perms)?;
                }
            }
        }

        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrate::run(&db.conn)?;
        Ok(db)
    }
}

/// Fixed-width RFC 3339 so stored timestamps sort lexically.
pub(crate) fn ts_to_sql(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn ts_from_sql(s: &str) -> WellnessResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| WellnessError::CorruptRecord(format!("bad timestamp '{}': {}", s, e)))
}
