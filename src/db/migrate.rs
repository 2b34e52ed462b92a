use anyhow::Result;
use rusqlite::Connection;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS plans (
            user_id    TEXT NOT NULL,
            date       TEXT NOT NULL,
            items      TEXT NOT NULL,
            status     TEXT NOT NULL DEFAULT 'Scheduled',
            updated_at TEXT NOT NULL,
            PRIMARY KEY (user_id, date)
        );

        CREATE TABLE IF NOT EXISTS samples (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            metric_type TEXT NOT NULL,
            value       REAL NOT NULL,
            ts          TEXT NOT NULL,
            device_id   TEXT NOT NULL DEFAULT 'DEV1',
            day         TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_samples_user_ts ON samples(user_id, ts);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_samples_daily
            ON samples(user_id, metric_type, day) WHERE day IS NOT NULL;

        CREATE TABLE IF NOT EXISTS recommendations (
            id       TEXT PRIMARY KEY,
            user_id  TEXT NOT NULL,
            message  TEXT NOT NULL,
            context  TEXT NOT NULL DEFAULT '',
            ts       TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_recs_user_ts ON recommendations(user_id, ts);

        CREATE TABLE IF NOT EXISTS feedback (
            id       TEXT PRIMARY KEY,
            user_id  TEXT NOT NULL,
            rpe      INTEGER,
            mood     TEXT,
            pain     TEXT NOT NULL DEFAULT 'none',
            notes    TEXT NOT NULL DEFAULT '',
            ts       TEXT NOT NULL
        );",
    )?;
    Ok(())
}
