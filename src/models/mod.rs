pub mod coach;
pub mod config;
pub mod metric;
pub mod plan;
pub mod user;

pub use metric::{MetricSample, MetricType};
pub use plan::{Plan, PlanItem, PlanStatus};
pub use user::UserContext;
