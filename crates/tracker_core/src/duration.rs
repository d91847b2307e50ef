//! Compact duration literals such as `1h30m`, `45m` or `2.5s`.
//!
//! A literal is an optional sign followed by one or more `<number><unit>`
//! pairs. Numbers may carry a fraction (`1.5h`, `.5m`); units are `ns`, `us`
//! (or `µs`/`μs`), `ms`, `s`, `m` and `h`. The bare literal `0` needs no unit.

use std::time::Duration;

use crate::error::{TrackerError, TrackerResult};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

// Largest span a signed 64-bit nanosecond counter can hold (~292 years).
const MAX_NANOS: u128 = i64::MAX as u128;

// Fraction digits beyond this precision cannot change the nanosecond result.
const MAX_FRACTION_SCALE: u128 = 1_000_000_000_000_000_000;

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a duration literal into a strictly positive [`Duration`].
///
/// Zero and negative literals are syntactically valid but rejected, since a
/// training cannot last no time at all.
pub fn parse_duration(raw: &str) -> TrackerResult<Duration> {
    let (negative, nanos) = parse_signed(raw).map_err(TrackerError::InvalidDuration)?;
    if negative || nanos == 0 {
        return Err(TrackerError::InvalidDuration(
            "duration must be greater than zero".into(),
        ));
    }
    let secs = (nanos / NANOS_PER_SEC) as u64;
    let subsec = (nanos % NANOS_PER_SEC) as u32;
    Ok(Duration::new(secs, subsec))
}

/// Returns the sign and the magnitude in nanoseconds.
fn parse_signed(raw: &str) -> Result<(bool, u128), String> {
    let invalid = || format!("time: invalid duration {raw:?}");

    let mut rest = raw;
    let mut negative = false;
    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    if rest == "0" {
        return Ok((negative, 0));
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        if !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let int_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        let (int_part, after_int) = rest.split_at(int_len);
        let mut whole: u128 = 0;
        for digit in int_part.bytes() {
            whole = whole * 10 + u128::from(digit - b'0');
            if whole > MAX_NANOS {
                return Err(invalid());
            }
        }
        rest = after_int;

        let mut fraction: u128 = 0;
        let mut scale: u128 = 1;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            let (frac_part, after_frac) = after_dot.split_at(frac_len);
            for digit in frac_part.bytes() {
                if scale < MAX_FRACTION_SCALE {
                    fraction = fraction * 10 + u128::from(digit - b'0');
                    scale *= 10;
                }
            }
            has_fraction = !frac_part.is_empty();
            rest = after_frac;
        }
        if int_part.is_empty() && !has_fraction {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let (unit, after_unit) = rest.split_at(unit_len);
        if unit.is_empty() {
            return Err(format!("time: missing unit in duration {raw:?}"));
        }
        let Some(per_unit) = unit_nanos(unit) else {
            return Err(format!("time: unknown unit {unit:?} in duration {raw:?}"));
        };
        rest = after_unit;

        total += whole * per_unit + fraction * per_unit / scale;
        if total > MAX_NANOS {
            return Err(invalid());
        }
    }

    Ok((negative, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_units() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(
            parse_duration("2m30.5s").unwrap(),
            Duration::from_millis(150_500)
        );
    }

    #[test]
    fn fractional_values() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5m").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("1.m").unwrap(), Duration::from_secs(60));
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("3us").unwrap(), Duration::from_micros(3));
        assert_eq!(parse_duration("3µs").unwrap(), Duration::from_micros(3));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
    }

    #[test]
    fn explicit_plus_sign() {
        assert_eq!(parse_duration("+45m").unwrap(), Duration::from_secs(2700));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        for raw in ["0", "0s", "-1h", "-0"] {
            let err = parse_duration(raw).unwrap_err();
            assert_eq!(
                err,
                TrackerError::InvalidDuration("duration must be greater than zero".into()),
                "{raw}"
            );
        }
    }

    #[test]
    fn malformed_literals() {
        for raw in ["", "h", "1", "1x", "1h30", ".h", "abc", "1 h", "-", "1h-5m"] {
            assert!(
                matches!(parse_duration(raw), Err(TrackerError::InvalidDuration(_))),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(parse_duration("9999999999999999999h").is_err());
        assert!(parse_duration("3000000h").is_err());
    }
}
