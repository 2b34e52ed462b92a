use anyhow::Result;
use rusqlite::params;

use crate::models::UserContext;
use crate::models::coach::{Feedback, Recommendation};

use super::{Database, ts_from_sql, ts_to_sql};

impl Database {
    pub fn insert_recommendation(&self, user: &UserContext, rec: &Recommendation) -> Result<()> {
        self.conn.execute(
            "INSERT INTO recommendations (id, user_id, message, context, ts)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                rec.id,
                user.user_id,
                rec.message,
                rec.context,
                ts_to_sql(&rec.timestamp),
            ],
        )?;
        Ok(())
    }

    pub fn list_recommendations(
        &self,
        user: &UserContext,
        limit: u32,
    ) -> Result<Vec<Recommendation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, message, context, ts FROM recommendations
             WHERE user_id = ?1 ORDER BY ts DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![user.user_id, limit], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;

        let mut recs = Vec::new();
        for row in rows {
            let (id, message, context, ts) = row?;
            recs.push(Recommendation {
                id,
                message,
                context,
                timestamp: ts_from_sql(&ts)?,
            });
        }
        Ok(recs)
    }

    pub fn insert_feedback(&self, user: &UserContext, fb: &Feedback) -> Result<()> {
        self.conn.execute(
            "INSERT INTO feedback (id, user_id, rpe, mood, pain, notes, ts)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                fb.id,
                user.user_id,
                fb.rpe,
                fb.mood,
                fb.pain,
                fb.notes,
                ts_to_sql(&fb.timestamp),
            ],
        )?;
        Ok(())
    }

    pub fn list_feedback(&self, user: &UserContext) -> Result<Vec<Feedback>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, rpe, mood, pain, notes, ts FROM feedback
             WHERE user_id = ?1 ORDER BY ts DESC",
        )?;
        let rows = stmt.query_map(params![user.user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<u8>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (id, rpe, mood, pain, notes, ts) = row?;
            out.push(Feedback {
                id,
                rpe,
                mood,
                pain,
                notes,
                timestamp: ts_from_sql(&ts)?,
            });
        }
        Ok(out)
    }
}
