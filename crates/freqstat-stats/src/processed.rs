use serde::Serialize;

use crate::{
    binning::ClassBins,
    error::StatsError,
    input,
    results::{AnalysisOptions, StatisticalResults},
    table::GroupedTable,
    ungrouped::sorted_observations,
};

/// Everything derived from one set of raw observations by automatic binning.
///
/// # Examples
///
/// ```
/// use freqstat_stats::{AnalysisOptions, ProcessedData};
///
/// let data = ProcessedData::from_text("12 15 18, 22; 25 30", &AnalysisOptions::default()).unwrap();
/// assert_eq!(data.sorted_data.len(), 6);
/// assert_eq!(data.total_frequency(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedData {
    pub sorted_data: Vec<f64>,
    pub range: f64,
    pub class_count: usize,
    pub class_width: f64,
    /// Class rows with the frequency, `f·x` and `f·x²` totals.
    pub frequency_table: GroupedTable,
    pub statistics: StatisticalResults,
}

impl ProcessedData {
    pub fn new(values: &[f64], options: &AnalysisOptions) -> Result<Self, StatsError> {
        let sorted_data = sorted_observations(values)?;
        let ClassBins {
            range,
            class_count,
            class_width,
            table,
            ..
        } = ClassBins::from_sorted(&sorted_data)?;
        let statistics = StatisticalResults::grouped(&table, options)?;
        Ok(Self {
            sorted_data,
            range,
            class_count,
            class_width,
            frequency_table: table,
            statistics,
        })
    }

    /// Tokenizes `text` (see [`input::parse_observations`]) and processes the
    /// resulting observations.
    pub fn from_text(text: &str, options: &AnalysisOptions) -> Result<Self, StatsError> {
        let values = input::parse_observations(text)?;
        Self::new(&values, options)
    }

    #[must_use]
    pub fn total_frequency(&self) -> u64 {
        self.frequency_table.total_frequency
    }

    #[must_use]
    pub fn total_fx(&self) -> f64 {
        self.frequency_table.total_fx
    }

    #[must_use]
    pub fn total_fx2(&self) -> f64 {
        self.frequency_table.total_fx2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::VarianceMethod;

    const SAMPLE: [f64; 12] = [
        48.0, 12.0, 35.0, 15.0, 18.0, 22.0, 45.0, 25.0, 30.0, 32.0, 38.0, 42.0,
    ];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_sample_statistics() {
        let data = ProcessedData::new(&SAMPLE, &AnalysisOptions::default()).unwrap();
        assert!(data.sorted_data.is_sorted_by(|a, b| a <= b));
        assert_eq!(data.total_frequency(), 12);
        // Midpoints 16, 24, 32, 40, 48 with frequencies 3, 2, 3, 2, 2
        let total_fx = 16.0 * 3.0 + 24.0 * 2.0 + 32.0 * 3.0 + 40.0 * 2.0 + 48.0 * 2.0;
        assert_eq!(data.total_fx(), total_fx);
        assert_close(data.statistics.mean, total_fx / 12.0);
        // Median class 28-36: N/2 = 6, CF before = 5, f = 3
        assert_close(data.statistics.median, 28.0 + (1.0 / 3.0) * 8.0);
        // Modal class 12-20 (first of the tied classes): d1 = 3, d2 = 1
        assert_close(data.statistics.mode.as_ref().unwrap()[0], 12.0 + 0.75 * 8.0);
    }

    #[test]
    fn test_variance_methods_agree_on_sample() {
        let deviations = ProcessedData::new(&SAMPLE, &AnalysisOptions::default()).unwrap();
        let shortcut = ProcessedData::new(
            &SAMPLE,
            &AnalysisOptions {
                variance: VarianceMethod::Shortcut,
            },
        )
        .unwrap();
        assert_close(deviations.statistics.variance, shortcut.statistics.variance);
        assert_close(
            deviations.statistics.variance,
            deviations.statistics.standard_deviation.powi(2),
        );
    }

    #[test]
    fn test_single_observation() {
        let data = ProcessedData::new(&[10.0], &AnalysisOptions::default()).unwrap();
        assert_eq!(data.range, 0.0);
        assert_eq!(data.class_width, 1.0);
        assert_eq!(data.statistics.mean, 10.5);
        assert_eq!(data.statistics.median, 10.5);
        assert_eq!(data.statistics.standard_deviation, 0.0);
    }

    #[test]
    fn test_from_text_rejects_bad_token() {
        assert_eq!(
            ProcessedData::from_text("1 2 x", &AnalysisOptions::default()),
            Err(StatsError::InvalidToken {
                token: "x".to_owned()
            })
        );
    }

    #[test]
    fn test_from_text_rejects_blank_input() {
        assert_eq!(
            ProcessedData::from_text("  ,; ", &AnalysisOptions::default()),
            Err(StatsError::EmptyDataset)
        );
    }
}
