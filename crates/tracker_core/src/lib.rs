//! Step-tracker record parsing and distance/speed/calorie metrics.
//!
//! Two entry points cover the record formats the tracker emits:
//! [`training_info`] for `<steps>,<activity>,<duration>` and
//! [`day_action_info`] for `<steps>,<duration>`.

pub mod calories;
pub mod config;
pub mod daysteps;
pub mod duration;
pub mod error;
pub mod record;

pub use calories::{
    Activity, MetricsReport, distance, mean_speed, running_spent_calories, spent_calories,
    training_info, training_metrics, validate_inputs, walking_spent_calories,
};
pub use config::{BodyProfile, Config};
pub use daysteps::{DaySummary, day_action_info, day_summary};
pub use error::{InputField, TrackerError, TrackerResult};
pub use record::{ActivityRecord, parse};
