//! Daily step summaries from `<steps>,<duration>` records.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use crate::calories::{self, M_IN_KM};
use crate::error::TrackerResult;
use crate::record;

/// Average step length in meters, independent of body height.
pub const STEP_LENGTH: f64 = 0.65;

#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct DaySummary {
    pub steps: u32,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2} kcal.", self.calories)
    }
}

/// Parse a day record and compute its distance and walking calories.
///
/// Distance uses the fixed [`STEP_LENGTH`]; calories go through the walking
/// formula, which derives its speed from `height`.
pub fn day_summary(raw: &str, weight: f64, height: f64) -> TrackerResult<DaySummary> {
    let rec = record::parse_day(raw)?;
    let distance_km = f64::from(rec.steps) * STEP_LENGTH / M_IN_KM;
    let calories = calories::walking_spent_calories(rec.steps, weight, height, rec.duration)?;
    Ok(DaySummary {
        steps: rec.steps,
        distance_km,
        calories,
    })
}

/// Formatted day report, or an empty string when the record is rejected.
///
/// Failures are logged and swallowed; callers only ever see text.
pub fn day_action_info(raw: &str, weight: f64, height: f64) -> String {
    match day_summary(raw, weight, height) {
        Ok(summary) => summary.to_string(),
        Err(e) => {
            tracing::warn!("day record {raw:?} dropped: {e}");
            String::new()
        }
    }
}
