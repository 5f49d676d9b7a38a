//! Statistics of raw (ungrouped) observations.
//!
//! All measures treat the data as a whole population: the variance divides by
//! `n`, not `n - 1`.

use crate::{
    error::StatsError,
    results::{AnalysisOptions, StatisticalResults, VarianceMethod, shortcut_variance},
    round::{count_as_f64, sum},
};

/// Returns a sorted copy of `values`.
///
/// Fails with [`StatsError::EmptyDataset`] for an empty slice and with
/// [`StatsError::NonFiniteValue`] if any value is NaN or infinite.
pub fn sorted_observations(values: &[f64]) -> Result<Vec<f64>, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteValue { value });
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

fn len_as_f64(values: &[f64]) -> f64 {
    count_as_f64(values.len() as u64)
}

#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    sum(values.iter().copied()) / len_as_f64(values)
}

/// Median of non-empty sorted values: the middle element, or the average of
/// the two central elements for an even count.
#[must_use]
pub fn median(sorted_values: &[f64]) -> f64 {
    let middle = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        (sorted_values[middle - 1] + sorted_values[middle]) / 2.0
    } else {
        sorted_values[middle]
    }
}

/// Every value reaching the highest occurrence count, ascending.
///
/// Returns `None` when no value occurs more than once.
#[must_use]
pub fn mode(sorted_values: &[f64]) -> Option<Vec<f64>> {
    let runs = sorted_values.chunk_by(|a, b| a == b).collect::<Vec<_>>();
    let max_count = runs.iter().map(|run| run.len()).max()?;
    if max_count == 1 {
        return None;
    }
    Some(
        runs.iter()
            .filter(|run| run.len() == max_count)
            .map(|run| run[0])
            .collect(),
    )
}

/// Population variance of `values` around `mean`.
#[must_use]
pub fn variance(values: &[f64], mean: f64, method: VarianceMethod) -> f64 {
    let n = len_as_f64(values);
    match method {
        VarianceMethod::Deviations => sum(values.iter().map(|v| (v - mean).powi(2))) / n,
        VarianceMethod::Shortcut => shortcut_variance(sum(values.iter().map(|v| v.powi(2))) / n, mean),
    }
}

impl StatisticalResults {
    /// Computes statistics of raw observations with the default options.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::StatisticalResults;
    /// let stats = StatisticalResults::ungrouped(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(stats.median, 2.0);
    /// assert_eq!(stats.mode, Some(vec![1.0, 2.0]));
    /// ```
    pub fn ungrouped(values: &[f64]) -> Result<Self, StatsError> {
        Self::ungrouped_with(values, &AnalysisOptions::default())
    }

    pub fn ungrouped_with(values: &[f64], options: &AnalysisOptions) -> Result<Self, StatsError> {
        let sorted = sorted_observations(values)?;
        Ok(Self::ungrouped_from_sorted(&sorted, options))
    }

    /// Computes statistics of non-empty observations sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is empty, and in debug mode if it is not
    /// sorted in ascending order.
    #[must_use]
    pub fn ungrouped_from_sorted(sorted_values: &[f64], options: &AnalysisOptions) -> Self {
        assert!(!sorted_values.is_empty(), "values must not be empty");
        debug_assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let mean = mean(sorted_values);
        let median = median(sorted_values);
        let mode = mode(sorted_values);
        let variance = variance(sorted_values, mean, options.variance);
        Self::new(mean, median, mode, variance)
    }
}
