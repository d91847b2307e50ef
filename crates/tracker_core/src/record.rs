//! Parsing of raw comma-separated tracker records.

use std::num::{IntErrorKind, ParseIntError};
use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::{TrackerError, TrackerResult};

const FIELD_DELIMITER: char = ',';

/// Field count of a day record: `<steps>,<duration>`.
pub const DAY_FIELDS: usize = 2;
/// Field count of a training record: `<steps>,<activity>,<duration>`.
pub const TRAINING_FIELDS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRecord {
    pub steps: u32,
    /// Trimmed activity label; only present in training records.
    pub activity: Option<String>,
    pub duration: Duration,
}

/// Split and validate `raw` into an [`ActivityRecord`].
///
/// `expected_fields` must be [`DAY_FIELDS`] or [`TRAINING_FIELDS`]. The
/// activity label is kept verbatim (after trimming); whether it names a
/// known activity is decided by the calculator.
pub fn parse(raw: &str, expected_fields: usize) -> TrackerResult<ActivityRecord> {
    let values: Vec<&str> = raw.split(FIELD_DELIMITER).collect();
    if values.len() != expected_fields
        || !(expected_fields == DAY_FIELDS || expected_fields == TRAINING_FIELDS)
    {
        return Err(TrackerError::FieldCount {
            expected: expected_fields,
            found: values.len(),
        });
    }

    let steps = parse_steps(values[0])?;
    let activity = (expected_fields == TRAINING_FIELDS).then(|| values[1].trim().to_string());
    let duration = parse_duration(values[expected_fields - 1].trim())?;

    Ok(ActivityRecord {
        steps,
        activity,
        duration,
    })
}

pub fn parse_training(raw: &str) -> TrackerResult<ActivityRecord> {
    parse(raw, TRAINING_FIELDS)
}

pub fn parse_day(raw: &str) -> TrackerResult<ActivityRecord> {
    parse(raw, DAY_FIELDS)
}

fn parse_steps(field: &str) -> TrackerResult<u32> {
    let field = field.trim();
    let out_of_range = || TrackerError::InvalidSteps(format!("{field} is out of range"));
    let steps: i64 = field.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => out_of_range(),
        IntErrorKind::NegOverflow => TrackerError::InvalidSteps(
            "number of steps must be greater than zero".into(),
        ),
        _ => TrackerError::InvalidSteps(format!("{field:?} is not an integer")),
    })?;
    if steps <= 0 {
        return Err(TrackerError::InvalidSteps(
            "number of steps must be greater than zero".into(),
        ));
    }
    u32::try_from(steps).map_err(|_| out_of_range())
}
