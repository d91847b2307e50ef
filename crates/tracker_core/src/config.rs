use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};

pub const WEIGHT_ENV: &str = "TRACKER_WEIGHT_KG";
pub const HEIGHT_ENV: &str = "TRACKER_HEIGHT_M";
pub const LOG_LEVEL_ENV: &str = "TRACKER_LOG_LEVEL";

/// Body measurements the calorie formulas are computed for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, JsonSchema)]
pub struct BodyProfile {
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in meters.
    pub height: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Profile used when a request does not carry its own measurements.
    pub profile: Option<BodyProfile>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_env() -> TrackerResult<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Same as [`Config::from_env`] but reads values through `get`, so tests
    /// never touch the process environment.
    pub fn from_env_with<F>(mut get: F) -> TrackerResult<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight = get(WEIGHT_ENV);
        let height = get(HEIGHT_ENV);
        let profile = match (weight, height) {
            (None, None) => None,
            (Some(w), Some(h)) => Some(BodyProfile {
                weight: positive(WEIGHT_ENV, &w)?,
                height: positive(HEIGHT_ENV, &h)?,
            }),
            (Some(_), None) => {
                return Err(TrackerError::Config(format!(
                    "{HEIGHT_ENV} missing while {WEIGHT_ENV} is set"
                )));
            }
            (None, Some(_)) => {
                return Err(TrackerError::Config(format!(
                    "{WEIGHT_ENV} missing while {HEIGHT_ENV} is set"
                )));
            }
        };
        Ok(Self {
            profile,
            log_level: get(LOG_LEVEL_ENV),
        })
    }
}

fn positive(key: &str, raw: &str) -> TrackerResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(v),
        _ => Err(TrackerError::Config(format!(
            "{key} must be a positive number, got {raw:?}"
        ))),
    }
}
