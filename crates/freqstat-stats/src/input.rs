//! Parsing of raw text into observations and class intervals.

use crate::{error::StatsError, interval::ClassInterval};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == ';'
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits `text` on runs of whitespace, commas and semicolons and parses every
/// token as a finite number.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::input::parse_observations;
/// assert_eq!(parse_observations(" 1, 2.5;-3  4e1 ").unwrap(), [1.0, 2.5, -3.0, 40.0]);
/// assert!(parse_observations("1 two 3").is_err());
/// ```
pub fn parse_observations(text: &str) -> Result<Vec<f64>, StatsError> {
    let values = text
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_number(token).ok_or_else(|| StatsError::InvalidToken {
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    Ok(values)
}

/// Parses a class interval written as `LOWER-UPPER:FREQUENCY`.
///
/// Bounds may be negative (`-10--5:3`) or use exponents (`1e-3-2e-3:4`). The
/// interval must have valid bounds and a positive frequency.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::input::parse_class_interval;
/// let class = parse_class_interval("10-20:5").unwrap();
/// assert_eq!((class.lower_bound, class.upper_bound, class.frequency), (10.0, 20.0, 5));
/// ```
pub fn parse_class_interval(text: &str) -> Result<ClassInterval, StatsError> {
    let invalid = || StatsError::InvalidToken {
        token: text.to_owned(),
    };

    let (bounds, frequency) = text.trim().rsplit_once(':').ok_or_else(invalid)?;
    let frequency = frequency.trim().parse::<u64>().map_err(|_| invalid())?;
    let (lower_bound, upper_bound) = split_bounds(bounds).ok_or_else(invalid)?;

    let class = ClassInterval {
        lower_bound,
        upper_bound,
        frequency,
    };
    class.validate_entry()?;
    Ok(class)
}

/// Finds the `-` separating two numbers, skipping signs and exponent signs.
fn split_bounds(bounds: &str) -> Option<(f64, f64)> {
    bounds
        .char_indices()
        .filter(|&(i, c)| i > 0 && c == '-')
        .find_map(|(i, _)| {
            let lower = parse_number(bounds[..i].trim())?;
            let upper = parse_number(bounds[i + 1..].trim())?;
            Some((lower, upper))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntervalProblem;

    #[test]
    fn test_parse_observations_separators() {
        assert_eq!(
            parse_observations("1 2\t3\n4,5;6,,  ;7").unwrap(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]
        );
    }

    #[test]
    fn test_parse_observations_rejects_malformed_token() {
        assert_eq!(
            parse_observations("1 2 3abc"),
            Err(StatsError::InvalidToken {
                token: "3abc".to_owned()
            })
        );
    }

    #[test]
    fn test_parse_observations_rejects_non_finite() {
        assert!(parse_observations("1 NaN").is_err());
        assert!(parse_observations("inf").is_err());
    }

    #[test]
    fn test_parse_observations_empty() {
        assert_eq!(parse_observations(""), Err(StatsError::EmptyDataset));
        assert_eq!(parse_observations(" ,; \n"), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_parse_class_interval_negative_bounds() {
        let class = parse_class_interval("-10--5:3").unwrap();
        assert_eq!(class.lower_bound, -10.0);
        assert_eq!(class.upper_bound, -5.0);
        assert_eq!(class.frequency, 3);

        let class = parse_class_interval("-5-5:1").unwrap();
        assert_eq!((class.lower_bound, class.upper_bound), (-5.0, 5.0));
    }

    #[test]
    fn test_parse_class_interval_exponent_and_spaces() {
        let class = parse_class_interval(" 1e-3 - 2.5e-3 : 4 ").unwrap();
        assert_eq!(class.lower_bound, 0.001);
        assert_eq!(class.upper_bound, 0.0025);
        assert_eq!(class.frequency, 4);
    }

    #[test]
    fn test_parse_class_interval_rejects_malformed() {
        for text in ["10-20", "10:5", "a-b:1", "10-20:x", "10-20:-1", "10-20:1.5"] {
            assert!(
                matches!(
                    parse_class_interval(text),
                    Err(StatsError::InvalidToken { .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_class_interval_validates_entry() {
        assert!(matches!(
            parse_class_interval("20-10:1"),
            Err(StatsError::InvalidInterval {
                reason: IntervalProblem::EmptyRange,
                ..
            })
        ));
        assert!(matches!(
            parse_class_interval("10-20:0"),
            Err(StatsError::InvalidInterval {
                reason: IntervalProblem::ZeroFrequency,
                ..
            })
        ));
    }
}
