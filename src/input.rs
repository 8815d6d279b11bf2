use crate::error::{ConfigError, LengthError};

pub const MIN_CAPACITY: u32 = 1000;
pub const MAX_CAPACITY: u32 = 12000;
pub const DEFAULT_CAPACITY: u32 = 5880;

/// Parses a comma-separated list of cut lengths such as `"3000, 2000,2000"`.
///
/// Blank input is an empty list, empty fragments are skipped. Every value must be
/// a positive integer no longer than `capacity`.
pub fn parse_lengths(text: &str, capacity: u32) -> Result<Vec<u32>, LengthError> {
    let mut lengths = Vec::new();
    for fragment in text.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        let value = fragment
            .parse::<i64>()
            .map_err(|_| LengthError::NotANumber(fragment.to_string()))?;
        if value <= 0 {
            return Err(LengthError::NotPositive(value));
        }
        if value > capacity as i64 {
            return Err(LengthError::ExceedsCapacity {
                length: value,
                capacity,
            });
        }
        lengths.push(value as u32);
    }
    Ok(lengths)
}

pub fn validate_capacity(value: i64) -> Result<u32, ConfigError> {
    if !(MIN_CAPACITY as i64..=MAX_CAPACITY as i64).contains(&value) {
        return Err(ConfigError::CapacityOutOfRange {
            value,
            min: MIN_CAPACITY,
            max: MAX_CAPACITY,
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_list() {
        assert_eq!(
            parse_lengths("3000, 2000,2000", 5880).unwrap(),
            vec![3000, 2000, 2000]
        );
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(parse_lengths("", 5880).unwrap(), Vec::<u32>::new());
        assert_eq!(parse_lengths("   ", 5880).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_empty_fragments_skipped() {
        assert_eq!(parse_lengths("1200,, 800 ,", 5880).unwrap(), vec![1200, 800]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(
            parse_lengths("1200, 80o", 5880).unwrap_err(),
            LengthError::NotANumber("80o".to_string())
        );
        assert!(matches!(
            parse_lengths("12.5", 5880),
            Err(LengthError::NotANumber(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            parse_lengths("1200, 0", 5880).unwrap_err(),
            LengthError::NotPositive(0)
        );
        assert_eq!(
            parse_lengths("-300", 5880).unwrap_err(),
            LengthError::NotPositive(-300)
        );
    }

    #[test]
    fn test_rejects_over_capacity() {
        assert_eq!(
            parse_lengths("5880, 6000", 5880).unwrap_err(),
            LengthError::ExceedsCapacity {
                length: 6000,
                capacity: 5880
            }
        );
    }

    #[test]
    fn test_capacity_range() {
        assert_eq!(validate_capacity(5880).unwrap(), 5880);
        assert_eq!(validate_capacity(1000).unwrap(), 1000);
        assert_eq!(validate_capacity(12000).unwrap(), 12000);
        assert!(validate_capacity(999).is_err());
        assert!(validate_capacity(12001).is_err());
        assert!(validate_capacity(0).is_err());
    }
}
