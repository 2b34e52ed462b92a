mod common;

use chrono::{Duration, Utc};
use wellplan::core::MetricStore;
use wellplan::core::coach::{self, FeedbackInput, NUDGE_CONTEXT, pick_nudge};
use wellplan::core::WellnessError;
use wellplan::models::config::Coach;
use wellplan::models::{MetricSample, MetricType};

fn steps(values: &[f64]) -> Vec<MetricSample> {
    let now = Utc::now();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut s = MetricSample::new(MetricType::Steps, *v);
            s.timestamp = now - Duration::minutes(i as i64);
            s
        })
        .collect()
}

#[test]
fn test_pick_nudge_low_steps() {
    let n = pick_nudge(&steps(&[100.0, 200.0]), &Coach::default());
    assert_eq!(n.avg_steps, 150);
    assert!(n.message.starts_with("Quick win"));
}

#[test]
fn test_pick_nudge_no_samples_is_low() {
    let n = pick_nudge(&[], &Coach::default());
    assert_eq!(n.avg_steps, 0);
    assert!(n.message.starts_with("Quick win"));
}

#[test]
fn test_pick_nudge_moderate_and_high() {
    let n = pick_nudge(&steps(&[300.0, 1000.0]), &Coach::default());
    assert!(n.message.starts_with("Great start"));

    let n = pick_nudge(&steps(&[2000.0]), &Coach::default());
    assert!(n.message.starts_with("Nice pace"));
}

#[test]
fn test_pick_nudge_uses_six_most_recent_and_truncates() {
    // Newest six average 333.5, truncated to 333; the oldest 0 is ignored
    let n = pick_nudge(
        &steps(&[334.0, 333.0, 334.0, 333.0, 334.0, 333.0, 0.0]),
        &Coach::default(),
    );
    assert_eq!(n.avg_steps, 333);
    assert!(n.message.starts_with("Great start"));
}

#[test]
fn test_pick_nudge_respects_thresholds() {
    let coach = Coach {
        low_step_threshold: 1000,
        moderate_step_threshold: 5000,
    };
    let n = pick_nudge(&steps(&[800.0]), &coach);
    assert!(n.message.starts_with("Quick win"));
}

#[test]
fn test_nudge_is_stored_as_recommendation() {
    let (_dir, db) = common::setup_db();
    let user = common::user();
    for s in steps(&[5000.0]) {
        db.append(&user, &s).unwrap();
    }

    let rec = coach::nudge(&db, &user, &Coach::default()).unwrap();
    assert_eq!(rec.context, NUDGE_CONTEXT);

    let recs = coach::recommendations(&db, &user).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].message, rec.message);
}

#[test]
fn test_recommendations_capped_at_twenty() {
    let (_dir, db) = common::setup_db();
    let user = common::user();
    for _ in 0..25 {
        coach::nudge(&db, &user, &Coach::default()).unwrap();
    }
    assert_eq!(coach::recommendations(&db, &user).unwrap().len(), 20);
}

#[test]
fn test_feedback_recorded_with_defaults() {
    let (_dir, db) = common::setup_db();
    let user = common::user();
    let fb = coach::record_feedback(
        &db,
        &user,
        FeedbackInput {
            rpe: Some(7),
            mood: Some("good"),
            pain: None,
            notes: None,
        },
    )
    .unwrap();
    assert_eq!(fb.pain, "none");

    let stored = db.list_feedback(&user).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].rpe, Some(7));
    assert_eq!(stored[0].mood.as_deref(), Some("good"));
}

#[test]
fn test_feedback_rejects_out_of_range_rpe() {
    let (_dir, db) = common::setup_db();
    let err = coach::record_feedback(
        &db,
        &common::user(),
        FeedbackInput {
            rpe: Some(11),
            mood: None,
            pain: None,
            notes: None,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WellnessError>(),
        Some(WellnessError::InvalidInput(_))
    ));
}
