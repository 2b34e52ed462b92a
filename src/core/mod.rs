pub mod aggregate;
pub mod behavior;
pub mod coach;
pub mod dashboard;
pub mod error;
pub mod generate;
pub mod ingest;
pub mod lifecycle;
pub mod score;
pub mod store;

pub use error::{WellnessError, WellnessResult};
pub use store::{MetricStore, PlanStore};
