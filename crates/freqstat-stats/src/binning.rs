//! Automatic class intervals for raw observations
//!
//! This module derives equal-width class intervals from a sample using
//! Sturges' Rule and counts the observations falling into each class.
//!
//! # Algorithm
//!
//! 1. Sort the observations; `range = max - min`
//! 2. Number of classes: `k = ceil(1 + 3.322 × log10(n))`
//! 3. Class width: `w = ceil(range / k)` (a zero width is replaced by 1)
//! 4. Class `i` covers `[min + i·w, min + (i+1)·w)`; the last class is closed
//!    on the right so the maximum is always counted
//! 5. Empty classes are kept, except an empty last class which is dropped
//!
//! # Examples
//!
//! ```
//! use freqstat_stats::binning::ClassBins;
//!
//! let values = [12.0, 15.0, 18.0, 22.0, 25.0, 30.0, 32.0, 35.0, 38.0, 42.0, 45.0, 48.0];
//! let bins = ClassBins::new(&values).unwrap();
//!
//! assert_eq!(bins.range, 36.0);
//! assert_eq!(bins.class_count, 5);
//! assert_eq!(bins.class_width, 8.0);
//! assert_eq!(bins.table.total_frequency, 12);
//! ```

use serde::Serialize;

use crate::{
    error::StatsError,
    interval::ClassInterval,
    round::count_as_f64,
    table::{GroupedRow, GroupedTable},
    ungrouped::sorted_observations,
};

/// Coefficient of `log10(n)` in Sturges' Rule.
pub const STURGES_COEFFICIENT: f64 = 3.322;

/// Number of classes for `n` observations by Sturges' Rule.
///
/// Fails with [`StatsError::EmptyDataset`] when `n == 0`.
///
/// # Examples
///
/// ```
/// # use freqstat_stats::binning::sturges_class_count;
/// assert_eq!(sturges_class_count(1).unwrap(), 1);
/// assert_eq!(sturges_class_count(100).unwrap(), 8);
/// ```
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sturges_class_count(n: usize) -> Result<usize, StatsError> {
    if n == 0 {
        return Err(StatsError::EmptyDataset);
    }
    let k = (1.0 + STURGES_COEFFICIENT * count_as_f64(n as u64).log10()).ceil();
    Ok(k as usize)
}

/// Width of each class: `ceil(range / class_count)`.
///
/// A zero range (all observations identical) yields width 1 so that no class
/// is degenerate. Fails with [`StatsError::DegenerateClassWidth`] when the
/// width is not a positive finite number.
pub fn class_width(range: f64, class_count: usize) -> Result<f64, StatsError> {
    let width = (range / count_as_f64(class_count as u64)).ceil();
    if width == 0.0 {
        log::warn!("all observations are identical; using class width 1");
        return Ok(1.0);
    }
    if !width.is_finite() || width < 0.0 {
        return Err(StatsError::DegenerateClassWidth { width });
    }
    Ok(width)
}

/// Equal-width class intervals derived from raw observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBins {
    /// Smallest observation; lower bound of the first class.
    pub min: f64,
    /// `max - min` of the observations.
    pub range: f64,
    /// Number of classes by Sturges' Rule (the emitted table may hold one less).
    pub class_count: usize,
    pub class_width: f64,
    /// One row per emitted class, ascending.
    pub table: GroupedTable,
}

impl ClassBins {
    /// Bins unsorted observations.
    ///
    /// Fails with [`StatsError::EmptyDataset`] for empty input and with
    /// [`StatsError::NonFiniteValue`] for NaN or infinite observations.
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let sorted = sorted_observations(values)?;
        Self::from_sorted(&sorted)
    }

    /// Bins observations sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::binning::ClassBins;
    /// let bins = ClassBins::from_sorted(&[5.0, 5.0, 5.0]).unwrap();
    /// assert_eq!(bins.class_width, 1.0);
    /// assert_eq!(bins.table.rows[0].frequency, 3);
    /// ```
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatsError> {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&min), Some(&max)) = (sorted_values.first(), sorted_values.last()) else {
            return Err(StatsError::EmptyDataset);
        };
        let range = max - min;
        let class_count = sturges_class_count(sorted_values.len())?;
        let class_width = class_width(range, class_count)?;
        log::debug!(
            "binning {} observations: range={range}, classes={class_count}, width={class_width}",
            sorted_values.len()
        );

        let boundary = |i: usize| min + count_as_f64(i as u64) * class_width;
        let mut rows = Vec::with_capacity(class_count);
        let mut cumulative = 0;
        for i in 0..class_count {
            let is_last = i + 1 == class_count;
            // Neighbouring classes share the exact same boundary value.
            let lower_bound = boundary(i);
            let upper_bound = boundary(i + 1);

            let start = sorted_values.partition_point(|&v| v < lower_bound);
            // The last class is closed on the right. It also takes anything a
            // rounding error in `min + k·w` would leave above `upper_bound`.
            let end = if is_last {
                sorted_values.len()
            } else {
                sorted_values.partition_point(|&v| v < upper_bound)
            };
            let frequency = (end - start) as u64;

            if frequency > 0 || !is_last {
                let class = ClassInterval {
                    lower_bound,
                    upper_bound,
                    frequency,
                };
                let label = format!("{lower_bound:.1} - {upper_bound:.1}");
                rows.push(GroupedRow::new(label, &class, &mut cumulative));
            }
        }

        Ok(Self {
            min,
            range,
            class_count,
            class_width,
            table: GroupedTable::from_rows(rows),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 12] = [
        12.0, 15.0, 18.0, 22.0, 25.0, 30.0, 32.0, 35.0, 38.0, 42.0, 45.0, 48.0,
    ];

    #[test]
    fn test_sturges_class_count() {
        assert_eq!(sturges_class_count(0), Err(StatsError::EmptyDataset));
        assert_eq!(sturges_class_count(1).unwrap(), 1);
        assert_eq!(sturges_class_count(2).unwrap(), 3);
        assert_eq!(sturges_class_count(10).unwrap(), 5);
        // 1 + 3.322 × log10(12) ≈ 4.585
        assert_eq!(sturges_class_count(12).unwrap(), 5);
        assert_eq!(sturges_class_count(1000).unwrap(), 11);
    }

    #[test]
    fn test_class_width() {
        assert_eq!(class_width(36.0, 5).unwrap(), 8.0);
        assert_eq!(class_width(36.0, 4).unwrap(), 9.0);
        assert_eq!(class_width(0.4, 3).unwrap(), 1.0);
        assert_eq!(class_width(0.0, 4).unwrap(), 1.0);
        assert!(matches!(
            class_width(f64::INFINITY, 4),
            Err(StatsError::DegenerateClassWidth { .. })
        ));
    }

    #[test]
    fn test_sample_distribution() {
        let bins = ClassBins::new(&SAMPLE).unwrap();
        assert_eq!(bins.min, 12.0);
        assert_eq!(bins.range, 36.0);
        assert_eq!(bins.class_count, 5);
        assert_eq!(bins.class_width, 8.0);

        let labels = bins
            .table
            .rows
            .iter()
            .map(|row| row.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "12.0 - 20.0",
                "20.0 - 28.0",
                "28.0 - 36.0",
                "36.0 - 44.0",
                "44.0 - 52.0"
            ]
        );
        let counts = frequencies(&bins);
        assert_eq!(counts, [3, 2, 3, 2, 2]);
        assert_eq!(counts.iter().sum::<u64>(), 12);
        assert_eq!(bins.table.rows.last().unwrap().cumulative_frequency, 12);
    }

    fn frequencies(bins: &ClassBins) -> Vec<u64> {
        bins.table.rows.iter().map(|row| row.frequency).collect()
    }

    #[test]
    fn test_maximum_on_last_upper_bound_is_counted() {
        // n = 4: k = 4, range = 8, w = 2 -> [0,2) [2,4) [4,6) [6,8]
        let bins = ClassBins::new(&[0.0, 1.0, 5.0, 8.0]).unwrap();
        assert_eq!(bins.class_count, 4);
        assert_eq!(bins.class_width, 2.0);
        let last = bins.table.rows.last().unwrap();
        assert_eq!(last.upper_bound, 8.0);
        assert_eq!(last.frequency, 1);
        assert_eq!(frequencies(&bins), [2, 0, 1, 1]);
    }

    #[test]
    fn test_value_on_inner_boundary_goes_to_upper_class() {
        let bins = ClassBins::new(&[0.0, 2.0, 2.0, 8.0]).unwrap();
        assert_eq!(frequencies(&bins), [1, 2, 0, 1]);
    }

    #[test]
    fn test_empty_inner_class_is_kept() {
        // n = 4: k = 4, range = 9, w = 3 -> [0,3) [3,6) [6,9) [9,12]
        let bins = ClassBins::new(&[0.0, 1.0, 2.0, 9.0]).unwrap();
        assert_eq!(frequencies(&bins), [3, 0, 0, 1]);
        assert_eq!(bins.table.rows[1].cumulative_frequency, 3);
        assert_eq!(bins.table.rows[2].cumulative_frequency, 3);
    }

    #[test]
    fn test_empty_last_class_is_dropped() {
        // n = 2: k = 3, range = 1, w = 1 -> [0,1) [1,2) [2,3]
        let bins = ClassBins::new(&[0.0, 1.0]).unwrap();
        assert_eq!(bins.class_count, 3);
        assert_eq!(frequencies(&bins), [1, 1]);
        assert_eq!(bins.table.rows.last().unwrap().cumulative_frequency, 2);
    }

    #[test]
    fn test_identical_values_use_unit_width() {
        let bins = ClassBins::new(&[7.0; 10]).unwrap();
        assert_eq!(bins.class_count, 5);
        assert_eq!(bins.range, 0.0);
        assert_eq!(bins.class_width, 1.0);
        assert_eq!(frequencies(&bins), [10, 0, 0, 0]);
        assert_eq!(bins.table.rows.last().unwrap().cumulative_frequency, 10);
    }

    #[test]
    fn test_single_observation() {
        let bins = ClassBins::new(&[3.5]).unwrap();
        assert_eq!(bins.class_count, 1);
        assert_eq!(bins.class_width, 1.0);
        assert_eq!(bins.table.rows.len(), 1);
        assert_eq!(bins.table.rows[0].label, "3.5 - 4.5");
        assert_eq!(bins.table.rows[0].frequency, 1);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(ClassBins::new(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "values must be sorted in ascending order")]
    fn test_from_sorted_checks_order_in_debug_builds() {
        let _ = ClassBins::from_sorted(&[3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_overflowing_range_is_degenerate() {
        assert!(matches!(
            ClassBins::new(&[-f64::MAX, f64::MAX]),
            Err(StatsError::DegenerateClassWidth { .. })
        ));
    }
}
