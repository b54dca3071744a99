//! Episode duration parsing.

use crate::error::{DashboardError, DashboardResult};

/// Parse an `HH:MM:SS` duration into fractional minutes.
///
/// Components may or may not be zero-padded (`1:2:3` and `01:02:03` are the
/// same duration). Anything that does not split into exactly three
/// non-negative integers is rejected instead of leaking NaN downstream.
pub fn parse_duration(value: &str) -> DashboardResult<f64> {
    let trimmed = value.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(DashboardError::malformed_duration(value));
    }

    let mut components = [0u64; 3];
    for (slot, part) in components.iter_mut().zip(parts.iter()) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DashboardError::malformed_duration(value));
        }
        *slot = part
            .parse::<u64>()
            .map_err(|_| DashboardError::malformed_duration(value))?;
    }

    let [hours, minutes, seconds] = components;
    Ok(hours as f64 * 60.0 + minutes as f64 + seconds as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_basic() {
        assert_eq!(parse_duration("01:23:45").unwrap(), 83.75);
        assert_eq!(parse_duration("00:00:00").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_duration_unpadded() {
        assert_eq!(parse_duration("1:2:30").unwrap(), 62.5);
        assert_eq!(
            parse_duration("1:2:30").unwrap(),
            parse_duration("01:02:30").unwrap()
        );
    }

    #[test]
    fn test_parse_duration_surrounding_whitespace() {
        assert_eq!(parse_duration(" 00:45:00 ").unwrap(), 45.0);
    }

    #[test]
    fn test_parse_duration_wrong_component_count() {
        for bad in ["12:34", "1:2:3:4", "", "45"] {
            assert!(
                matches!(
                    parse_duration(bad),
                    Err(DashboardError::MalformedDuration { .. })
                ),
                "expected failure for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_duration_non_numeric_components() {
        for bad in ["aa:bb:cc", "01::30", "01:-2:30", "01:02:3.5", "+1:00:00"] {
            assert!(
                matches!(
                    parse_duration(bad),
                    Err(DashboardError::MalformedDuration { .. })
                ),
                "expected failure for {:?}",
                bad
            );
        }
    }
}
