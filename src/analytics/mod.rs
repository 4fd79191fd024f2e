pub mod aggregate;
pub mod metrics;
pub mod streaks;

pub use aggregate::{aggregate_by, compute_aggregates, time_of_day_bucket, Bucket, Dimension};
pub use metrics::{compute_metrics, Metrics};
pub use streaks::{compute_streaks, StreakSummary};
