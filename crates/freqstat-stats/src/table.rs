//! Frequency table rows and column totals.

use serde::Serialize;

use crate::{
    error::{IntervalProblem, StatsError, TableProblem},
    interval::{ClassInterval, sorted_intervals},
    round::{count_as_f64, sum},
    ungrouped::sorted_observations,
};

/// One observation of an ungrouped dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UngroupedRow {
    pub value: f64,
    pub x2: f64,
}

/// One class of a grouped frequency distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedRow {
    pub label: String,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub frequency: u64,
    pub cumulative_frequency: u64,
    pub midpoint: f64,
    pub fx: f64,
    pub x2: f64,
    pub fx2: f64,
}

impl GroupedRow {
    /// Builds the row for `class`, adding its frequency to `cumulative`.
    pub(crate) fn new(label: String, class: &ClassInterval, cumulative: &mut u64) -> Self {
        *cumulative += class.frequency;
        let midpoint = class.midpoint();
        let frequency = count_as_f64(class.frequency);
        let x2 = midpoint.powi(2);
        Self {
            label,
            lower_bound: class.lower_bound,
            upper_bound: class.upper_bound,
            frequency: class.frequency,
            cumulative_frequency: *cumulative,
            midpoint,
            fx: midpoint * frequency,
            x2,
            fx2: x2 * frequency,
        }
    }

    #[must_use]
    pub fn class_interval(&self) -> ClassInterval {
        ClassInterval {
            lower_bound: self.lower_bound,
            upper_bound: self.upper_bound,
            frequency: self.frequency,
        }
    }

    /// Width of this class (`upper_bound - lower_bound`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// A row of either kind of frequency table, tagged by the kind of data.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::From, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrequencyTableRow {
    Ungrouped(UngroupedRow),
    Grouped(GroupedRow),
}

/// Sorted observations of an ungrouped dataset, one row each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UngroupedTable {
    pub rows: Vec<UngroupedRow>,
    pub count: u64,
    /// Sum of the observations.
    pub sum: f64,
    /// Sum of the squared observations.
    pub sum_x2: f64,
}

impl UngroupedTable {
    /// Builds the table from unsorted observations.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::table::UngroupedTable;
    /// let table = UngroupedTable::new(&[3.0, 1.0, 2.0]).unwrap();
    /// assert_eq!(table.rows[0].value, 1.0);
    /// assert_eq!(table.sum_x2, 14.0);
    /// ```
    pub fn new(values: &[f64]) -> Result<Self, StatsError> {
        let sorted = sorted_observations(values)?;
        Ok(Self::from_sorted(&sorted))
    }

    /// Builds the table from observations sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Self {
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        let rows = sorted_values
            .iter()
            .map(|&value| UngroupedRow {
                value,
                x2: value.powi(2),
            })
            .collect::<Vec<_>>();
        Self {
            count: rows.len() as u64,
            sum: sum(rows.iter().map(|row| row.value)),
            sum_x2: sum(rows.iter().map(|row| row.x2)),
            rows,
        }
    }
}

/// Class rows of a grouped dataset together with the column totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedTable {
    pub rows: Vec<GroupedRow>,
    pub total_frequency: u64,
    pub total_fx: f64,
    pub total_fx2: f64,
}

impl GroupedTable {
    /// Builds the table from user-supplied class intervals.
    ///
    /// The intervals are validated and sorted by lower bound; each row is
    /// labelled `"lower - upper"`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::{interval::ClassInterval, table::GroupedTable};
    /// let table = GroupedTable::from_intervals(&[
    ///     ClassInterval { lower_bound: 10.0, upper_bound: 20.0, frequency: 2 },
    ///     ClassInterval { lower_bound: 0.0, upper_bound: 10.0, frequency: 3 },
    /// ])
    /// .unwrap();
    /// assert_eq!(table.rows[0].label, "0 - 10");
    /// assert_eq!(table.rows[1].cumulative_frequency, 5);
    /// assert_eq!(table.total_fx, 45.0);
    /// ```
    pub fn from_intervals(intervals: &[ClassInterval]) -> Result<Self, StatsError> {
        let sorted = sorted_intervals(intervals)?;
        let mut cumulative = 0;
        let rows = sorted
            .iter()
            .map(|class| {
                let label = format!("{} - {}", class.lower_bound, class.upper_bound);
                GroupedRow::new(label, class, &mut cumulative)
            })
            .collect();
        Ok(Self::from_rows(rows))
    }

    /// Wraps already-built rows and sums the frequency, `f·x` and `f·x²` columns.
    pub(crate) fn from_rows(rows: Vec<GroupedRow>) -> Self {
        Self {
            total_frequency: rows.iter().map(|row| row.frequency).sum(),
            total_fx: sum(rows.iter().map(|row| row.fx)),
            total_fx2: sum(rows.iter().map(|row| row.fx2)),
            rows,
        }
    }

    /// Checks that the rows describe an ascending, non-overlapping set of
    /// classes with a positive total frequency, and that the derived columns
    /// and totals agree with the class bounds and frequencies.
    ///
    /// The `row` of a [`StatsError::InconsistentTable`] error is the index of
    /// the offending row, or `rows.len()` when only the totals disagree.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.rows.is_empty() || self.total_frequency == 0 {
            return Err(StatsError::EmptyDataset);
        }
        for row in &self.rows {
            row.class_interval().validate()?;
        }
        for pair in self.rows.windows(2) {
            let (prev, next) = (pair[0].class_interval(), pair[1].class_interval());
            if next.lower_bound < prev.lower_bound || prev.overlaps(&next) {
                return Err(next.error(IntervalProblem::Overlap));
            }
        }

        let mut cumulative = 0;
        for (index, row) in self.rows.iter().enumerate() {
            let class = row.class_interval();
            let expected = GroupedRow::new(row.label.clone(), &class, &mut cumulative);
            let inconsistent = |reason| StatsError::InconsistentTable { row: index, reason };
            if row.cumulative_frequency != expected.cumulative_frequency {
                return Err(inconsistent(TableProblem::CumulativeFrequency));
            }
            if *row != expected {
                return Err(inconsistent(TableProblem::ClassColumns));
            }
        }
        let totals = Self::from_rows(self.rows.clone());
        if (self.total_frequency, self.total_fx, self.total_fx2)
            != (totals.total_frequency, totals.total_fx, totals.total_fx2)
        {
            return Err(StatsError::InconsistentTable {
                row: self.rows.len(),
                reason: TableProblem::Totals,
            });
        }
        Ok(())
    }
}
