//! Distance, speed and calorie formulas plus the training report.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{InputField, TrackerError, TrackerResult};
use crate::record;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Share of the body height taken as the length of a single step.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Walking burns this fraction of what running burns at the same speed.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

const SECS_IN_MIN: f64 = 60.0;
const SECS_IN_H: f64 = 3600.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub enum Activity {
    Walking,
    Running,
}

impl FromStr for Activity {
    type Err = TrackerError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Walking" | "Ходьба" => Ok(Activity::Walking),
            "Running" | "Бег" => Ok(Activity::Running),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Walking => f.write_str("Walking"),
            Activity::Running => f.write_str("Running"),
        }
    }
}

pub fn validate_inputs(
    steps: u32,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<()> {
    let field = if steps == 0 {
        Some(InputField::Steps)
    } else if !weight.is_finite() || weight <= 0.0 {
        Some(InputField::Weight)
    } else if !height.is_finite() || height <= 0.0 {
        Some(InputField::Height)
    } else if duration.is_zero() {
        Some(InputField::Duration)
    } else {
        None
    };
    match field {
        Some(field) => Err(TrackerError::InvalidInput { field }),
        None => Ok(()),
    }
}

pub(crate) fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECS_IN_H
}

pub(crate) fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECS_IN_MIN
}

/// Distance in kilometers covered by `steps` for a person of `height`.
pub fn distance(steps: u32, height: f64) -> f64 {
    let step_length = STEP_LENGTH_COEFFICIENT * height;
    f64::from(steps) * step_length / M_IN_KM
}

/// Mean speed in km/h, or 0 for an empty duration.
pub fn mean_speed(steps: u32, height: f64, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    distance(steps, height) / hours(duration)
}

fn base_calories(steps: u32, weight: f64, height: f64, duration: Duration) -> f64 {
    weight * mean_speed(steps, height, duration) * minutes(duration) / MIN_IN_H
}

pub fn running_spent_calories(
    steps: u32,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(base_calories(steps, weight, height, duration))
}

pub fn walking_spent_calories(
    steps: u32,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    validate_inputs(steps, weight, height, duration)?;
    Ok(base_calories(steps, weight, height, duration) * WALKING_CALORIES_COEFFICIENT)
}

pub fn spent_calories(
    activity: Activity,
    steps: u32,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    match activity {
        Activity::Walking => walking_spent_calories(steps, weight, height, duration),
        Activity::Running => running_spent_calories(steps, weight, height, duration),
    }
}

/// Metrics derived from a single training record.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct MetricsReport {
    /// Label as it appeared in the record.
    pub activity: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.mean_speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}

/// Parse a `<steps>,<activity>,<duration>` record and compute its metrics.
pub fn training_metrics(raw: &str, weight: f64, height: f64) -> TrackerResult<MetricsReport> {
    let rec = record::parse_training(raw).inspect_err(|e| {
        tracing::warn!("rejected training record {raw:?}: {e}");
    })?;
    // Training records always carry a label.
    let label = rec.activity.unwrap_or_default();
    let activity: Activity = label.parse()?;
    let calories = spent_calories(activity, rec.steps, weight, height, rec.duration)?;

    let report = MetricsReport {
        activity: label,
        duration_hours: hours(rec.duration),
        distance_km: distance(rec.steps, height),
        mean_speed_kmh: mean_speed(rec.steps, height, rec.duration),
        calories,
    };
    tracing::debug!(?report, "computed training metrics");
    Ok(report)
}

/// Formatted multi-line training report; errors are returned to the caller.
pub fn training_info(raw: &str, weight: f64, height: f64) -> TrackerResult<String> {
    training_metrics(raw, weight, height).map(|report| report.to_string())
}
