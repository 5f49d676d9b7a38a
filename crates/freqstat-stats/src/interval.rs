//! Class intervals of a grouped frequency distribution.

use serde::{Deserialize, Serialize};

use crate::error::{IntervalProblem, StatsError};

/// A class interval `[lower_bound, upper_bound)` with the number of
/// observations falling into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassInterval {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub frequency: u64,
}

impl ClassInterval {
    /// Creates a class interval, rejecting non-finite or empty bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::interval::ClassInterval;
    /// let class = ClassInterval::new(10.0, 20.0, 5).unwrap();
    /// assert_eq!(class.midpoint(), 15.0);
    /// assert!(ClassInterval::new(20.0, 10.0, 5).is_err());
    /// ```
    pub fn new(lower_bound: f64, upper_bound: f64, frequency: u64) -> Result<Self, StatsError> {
        let class = Self {
            lower_bound,
            upper_bound,
            frequency,
        };
        class.validate()?;
        Ok(class)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lower_bound + self.upper_bound) / 2.0
    }

    /// Returns `true` if the two intervals share any point other than a
    /// touching endpoint.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower_bound < other.upper_bound && other.lower_bound < self.upper_bound
    }

    /// Checks the bounds of this interval.
    ///
    /// Zero frequencies are accepted here; they are rejected only where
    /// intervals are entered by a user (see [`Self::validate_entry`]).
    pub fn validate(&self) -> Result<(), StatsError> {
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(self.error(IntervalProblem::NonFiniteBound));
        }
        if self.lower_bound >= self.upper_bound {
            return Err(self.error(IntervalProblem::EmptyRange));
        }
        Ok(())
    }

    /// Checks a user-entered interval: valid bounds and a positive frequency.
    pub fn validate_entry(&self) -> Result<(), StatsError> {
        self.validate()?;
        if self.frequency == 0 {
            return Err(self.error(IntervalProblem::ZeroFrequency));
        }
        Ok(())
    }

    pub(crate) fn error(&self, reason: IntervalProblem) -> StatsError {
        StatsError::InvalidInterval {
            lower: self.lower_bound,
            upper: self.upper_bound,
            reason,
        }
    }
}

/// Validates a collection of class intervals and returns a copy sorted by
/// lower bound.
///
/// Fails with [`StatsError::EmptyDataset`] when `intervals` is empty and with
/// [`StatsError::InvalidInterval`] when any interval is malformed or two
/// intervals overlap.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::interval::{ClassInterval, sorted_intervals};
/// let intervals = [
///     ClassInterval { lower_bound: 20.0, upper_bound: 30.0, frequency: 2 },
///     ClassInterval { lower_bound: 10.0, upper_bound: 20.0, frequency: 3 },
/// ];
/// let sorted = sorted_intervals(&intervals).unwrap();
/// assert_eq!(sorted[0].lower_bound, 10.0);
/// ```
pub fn sorted_intervals(intervals: &[ClassInterval]) -> Result<Vec<ClassInterval>, StatsError> {
    if intervals.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    for class in intervals {
        class.validate()?;
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| a.lower_bound.total_cmp(&b.lower_bound));

    // Once sorted, any overlap shows up between neighbours.
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].overlaps(&pair[1])) {
        return Err(pair[1].error(IntervalProblem::Overlap));
    }
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(lower_bound: f64, upper_bound: f64, frequency: u64) -> ClassInterval {
        ClassInterval {
            lower_bound,
            upper_bound,
            frequency,
        }
    }

    #[test]
    fn test_width_and_midpoint() {
        let c = class(10.0, 25.0, 4);
        assert_eq!(c.width(), 15.0);
        assert_eq!(c.midpoint(), 17.5);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(matches!(
            class(5.0, 5.0, 1).validate(),
            Err(StatsError::InvalidInterval {
                reason: IntervalProblem::EmptyRange,
                ..
            })
        ));
        assert!(matches!(
            class(f64::NAN, 5.0, 1).validate(),
            Err(StatsError::InvalidInterval {
                reason: IntervalProblem::NonFiniteBound,
                ..
            })
        ));
        assert!(class(0.0, 1.0, 0).validate().is_ok());
    }

    #[test]
    fn test_validate_entry_rejects_zero_frequency() {
        assert!(matches!(
            class(0.0, 1.0, 0).validate_entry(),
            Err(StatsError::InvalidInterval {
                reason: IntervalProblem::ZeroFrequency,
                ..
            })
        ));
        assert!(class(0.0, 1.0, 1).validate_entry().is_ok());
    }

    #[test]
    fn test_overlaps() {
        let a = class(10.0, 20.0, 1);
        assert!(a.overlaps(&class(15.0, 25.0, 1)));
        assert!(a.overlaps(&class(5.0, 15.0, 1)));
        assert!(a.overlaps(&class(12.0, 18.0, 1)));
        assert!(a.overlaps(&class(0.0, 30.0, 1)));
        assert!(!a.overlaps(&class(20.0, 30.0, 1)));
        assert!(!a.overlaps(&class(0.0, 10.0, 1)));
    }

    #[test]
    fn test_sorted_intervals_sorts_by_lower_bound() {
        let sorted =
            sorted_intervals(&[class(20.0, 30.0, 1), class(0.0, 10.0, 2), class(10.0, 20.0, 3)])
                .unwrap();
        let lowers = sorted.iter().map(|c| c.lower_bound).collect::<Vec<_>>();
        assert_eq!(lowers, [0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_sorted_intervals_rejects_overlap() {
        let err = sorted_intervals(&[class(0.0, 10.0, 1), class(30.0, 40.0, 1), class(5.0, 15.0, 1)])
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidInterval {
                lower: 5.0,
                upper: 15.0,
                reason: IntervalProblem::Overlap,
            }
        );
    }

    #[test]
    fn test_sorted_intervals_rejects_empty() {
        assert_eq!(sorted_intervals(&[]), Err(StatsError::EmptyDataset));
    }
}
