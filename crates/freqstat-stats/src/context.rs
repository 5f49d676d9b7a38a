//! Caller-owned state of one data-entry session.
//!
//! The computational modules hold no state of their own; a front end keeps an
//! [`AnalysisContext`] with the selected kind of data and everything entered
//! so far, and calls [`AnalysisContext::analyze`] whenever it needs results.

use serde::Serialize;

use crate::{
    error::{IntervalProblem, StatsError},
    input,
    interval::ClassInterval,
    processed::ProcessedData,
    results::{AnalysisOptions, StatisticalResults},
    table::{FrequencyTableRow, GroupedTable, UngroupedTable},
    ungrouped::sorted_observations,
};

/// Shape of the data being entered, which selects the pipeline.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// Raw observations analysed one by one.
    #[default]
    Ungrouped,
    /// User-defined class intervals with frequencies.
    Grouped,
    /// Raw observations grouped into automatic class intervals.
    Binned,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Analysis {
    Ungrouped {
        table: UngroupedTable,
        statistics: StatisticalResults,
    },
    Grouped {
        table: GroupedTable,
        statistics: StatisticalResults,
    },
    Binned(ProcessedData),
}

impl Analysis {
    /// Runs the ungrouped pipeline over raw observations.
    pub fn ungrouped(values: &[f64], options: &AnalysisOptions) -> Result<Self, StatsError> {
        let sorted = sorted_observations(values)?;
        Ok(Self::Ungrouped {
            table: UngroupedTable::from_sorted(&sorted),
            statistics: StatisticalResults::ungrouped_from_sorted(&sorted, options),
        })
    }

    /// Runs the grouped pipeline over user-defined class intervals.
    pub fn grouped(intervals: &[ClassInterval], options: &AnalysisOptions) -> Result<Self, StatsError> {
        let (table, statistics) = StatisticalResults::from_intervals(intervals, options)?;
        Ok(Self::Grouped { table, statistics })
    }

    /// Runs the automatic-binning pipeline over raw observations.
    pub fn binned(values: &[f64], options: &AnalysisOptions) -> Result<Self, StatsError> {
        ProcessedData::new(values, options).map(Self::Binned)
    }

    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Ungrouped { .. } => DataKind::Ungrouped,
            Self::Grouped { .. } => DataKind::Grouped,
            Self::Binned(_) => DataKind::Binned,
        }
    }

    #[must_use]
    pub fn statistics(&self) -> &StatisticalResults {
        match self {
            Self::Ungrouped { statistics, .. } | Self::Grouped { statistics, .. } => statistics,
            Self::Binned(data) => &data.statistics,
        }
    }

    /// Table rows in ascending order, tagged by kind.
    #[must_use]
    pub fn table_rows(&self) -> Vec<FrequencyTableRow> {
        match self {
            Self::Ungrouped { table, .. } => table.rows.iter().copied().map(Into::into).collect(),
            Self::Grouped { table, .. } => table.rows.iter().cloned().map(Into::into).collect(),
            Self::Binned(data) => data
                .frequency_table
                .rows
                .iter()
                .cloned()
                .map(Into::into)
                .collect(),
        }
    }

    /// The class table for grouped and binned data.
    #[must_use]
    pub fn grouped_table(&self) -> Option<&GroupedTable> {
        match self {
            Self::Ungrouped { .. } => None,
            Self::Grouped { table, .. } => Some(table),
            Self::Binned(data) => Some(&data.frequency_table),
        }
    }
}

/// Data entered so far, together with the selected [`DataKind`].
///
/// # Examples
///
/// ```
/// use freqstat_stats::{AnalysisContext, AnalysisOptions, DataKind, interval::ClassInterval};
///
/// let mut context = AnalysisContext::new(DataKind::Grouped);
/// context.add_interval(ClassInterval { lower_bound: 0.0, upper_bound: 10.0, frequency: 4 })?;
/// context.add_interval(ClassInterval { lower_bound: 10.0, upper_bound: 20.0, frequency: 6 })?;
/// assert!(context.add_interval(ClassInterval { lower_bound: 5.0, upper_bound: 15.0, frequency: 1 }).is_err());
///
/// let analysis = context.analyze(&AnalysisOptions::default())?;
/// assert_eq!(analysis.statistics().mean, 11.0);
/// # Ok::<(), freqstat_stats::StatsError>(())
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    kind: DataKind,
    values: Vec<f64>,
    intervals: Vec<ClassInterval>,
}

impl AnalysisContext {
    #[must_use]
    pub fn new(kind: DataKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Switches the pipeline; entered data is kept.
    pub fn set_kind(&mut self, kind: DataKind) {
        self.kind = kind;
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn intervals(&self) -> &[ClassInterval] {
        &self.intervals
    }

    /// Appends observations. Nothing is appended if any value is not finite.
    pub fn push_values<I>(&mut self, values: I) -> Result<(), StatsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { value });
        }
        self.values.extend(values);
        Ok(())
    }

    /// Tokenizes `text` and appends the observations.
    pub fn push_text(&mut self, text: &str) -> Result<(), StatsError> {
        let values = input::parse_observations(text)?;
        self.push_values(values)
    }

    /// Adds a class interval after checking its bounds, its frequency and that
    /// it does not overlap an interval already entered.
    pub fn add_interval(&mut self, interval: ClassInterval) -> Result<(), StatsError> {
        interval.validate_entry()?;
        if self.intervals.iter().any(|other| other.overlaps(&interval)) {
            return Err(interval.error(IntervalProblem::Overlap));
        }
        self.intervals.push(interval);
        Ok(())
    }

    /// Removes and returns the interval at `index` (in entry order).
    pub fn remove_interval(&mut self, index: usize) -> Option<ClassInterval> {
        (index < self.intervals.len()).then(|| self.intervals.remove(index))
    }

    /// Discards all entered data; the selected kind is kept.
    pub fn reset(&mut self) {
        self.values.clear();
        self.intervals.clear();
    }

    /// Runs the pipeline selected by [`Self::kind`] over the entered data.
    pub fn analyze(&self, options: &AnalysisOptions) -> Result<Analysis, StatsError> {
        log::debug!(
            "analyzing {:?} data ({} values, {} intervals)",
            self.kind,
            self.values.len(),
            self.intervals.len()
        );
        match self.kind {
            DataKind::Ungrouped => Analysis::ungrouped(&self.values, options),
            DataKind::Grouped => Analysis::grouped(&self.intervals, options),
            DataKind::Binned => Analysis::binned(&self.values, options),
        }
    }
}
