//! Statistics of a grouped frequency distribution.
//!
//! Every class is represented by its midpoint. Median and mode interpolate
//! inside the median/modal class using that class's own width, so classes of
//! unequal width are handled correctly.

use crate::{
    error::StatsError,
    interval::ClassInterval,
    results::{AnalysisOptions, StatisticalResults, VarianceMethod, shortcut_variance},
    round::{count_as_f64, sum},
    table::{GroupedRow, GroupedTable},
};

/// `Σ f·x / N`.
#[must_use]
pub fn mean(table: &GroupedTable) -> f64 {
    table.total_fx / count_as_f64(table.total_frequency)
}

/// Interpolated median: `L + ((N/2 - CF) / f) · w` over the first class
/// whose cumulative frequency reaches `N/2`.
#[must_use]
pub fn median(table: &GroupedTable) -> f64 {
    let position = count_as_f64(table.total_frequency) / 2.0;
    let index = table
        .rows
        .iter()
        .position(|row| count_as_f64(row.cumulative_frequency) >= position)
        .unwrap_or(table.rows.len() - 1);
    let row = &table.rows[index];
    let cumulative_before = index
        .checked_sub(1)
        .map_or(0, |prev| table.rows[prev].cumulative_frequency);

    row.lower_bound
        + ((position - count_as_f64(cumulative_before)) / count_as_f64(row.frequency)) * row.width()
}

/// Interpolated mode: `L + (d1 / (d1 + d2)) · w` over the first class with the
/// highest frequency.
///
/// `d1`/`d2` are the differences to the preceding/following class (a missing
/// neighbour counts as frequency zero). When `d1 + d2 <= 0` the modal class
/// midpoint is returned instead.
#[must_use]
pub fn mode(table: &GroupedTable) -> f64 {
    let index = modal_class_index(&table.rows);
    let row = &table.rows[index];
    let neighbour_frequency = |i: Option<usize>| {
        i.and_then(|i| table.rows.get(i))
            .map_or(0.0, |row| count_as_f64(row.frequency))
    };

    let max_frequency = count_as_f64(row.frequency);
    let d1 = max_frequency - neighbour_frequency(index.checked_sub(1));
    let d2 = max_frequency - neighbour_frequency(Some(index + 1));

    if d1 + d2 <= 0.0 {
        row.midpoint
    } else {
        row.lower_bound + (d1 / (d1 + d2)) * row.width()
    }
}

fn modal_class_index(rows: &[GroupedRow]) -> usize {
    let mut modal = 0;
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.frequency > rows[modal].frequency {
            modal = i;
        }
    }
    modal
}

/// Population variance of the class midpoints around `mean`.
#[must_use]
pub fn variance(table: &GroupedTable, mean: f64, method: VarianceMethod) -> f64 {
    let n = count_as_f64(table.total_frequency);
    match method {
        VarianceMethod::Deviations => {
            sum(table
                .rows
                .iter()
                .map(|row| count_as_f64(row.frequency) * (row.midpoint - mean).powi(2)))
                / n
        }
        VarianceMethod::Shortcut => shortcut_variance(table.total_fx2 / n, mean),
    }
}

impl StatisticalResults {
    /// Computes statistics of a grouped frequency table.
    ///
    /// The grouped mode is always a single interpolated value.
    ///
    /// Fails with [`StatsError::EmptyDataset`] when the table has no rows or a
    /// zero total frequency, with [`StatsError::InvalidInterval`] when the rows
    /// are unordered, overlapping or malformed, and with
    /// [`StatsError::InconsistentTable`] when cumulative frequencies, products
    /// or totals do not follow from the class bounds and frequencies.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::{AnalysisOptions, StatisticalResults, interval::ClassInterval, table::GroupedTable};
    /// let table = GroupedTable::from_intervals(&[
    ///     ClassInterval { lower_bound: 0.0, upper_bound: 10.0, frequency: 2 },
    ///     ClassInterval { lower_bound: 10.0, upper_bound: 20.0, frequency: 6 },
    ///     ClassInterval { lower_bound: 20.0, upper_bound: 30.0, frequency: 2 },
    /// ])
    /// .unwrap();
    /// let stats = StatisticalResults::grouped(&table, &AnalysisOptions::default()).unwrap();
    /// assert_eq!(stats.mean, 15.0);
    /// assert_eq!(stats.median, 15.0);
    /// assert_eq!(stats.mode, Some(vec![15.0]));
    /// ```
    pub fn grouped(table: &GroupedTable, options: &AnalysisOptions) -> Result<Self, StatsError> {
        table.validate()?;
        let mean = mean(table);
        let median = median(table);
        let mode = mode(table);
        let variance = variance(table, mean, options.variance);
        Ok(Self::new(mean, median, Some(vec![mode]), variance))
    }

    /// Builds the table for user-supplied class intervals and computes its
    /// statistics.
    pub fn from_intervals(
        intervals: &[ClassInterval],
        options: &AnalysisOptions,
    ) -> Result<(GroupedTable, Self), StatsError> {
        let table = GroupedTable::from_intervals(intervals)?;
        let stats = Self::grouped(&table, options)?;
        Ok((table, stats))
    }
}
