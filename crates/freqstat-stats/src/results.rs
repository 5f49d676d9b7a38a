use serde::Serialize;

use crate::round::round_to;

/// Formula used to compute the variance.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum VarianceMethod {
    /// Mean of the squared deviations from the mean (two passes over the data).
    #[default]
    Deviations,
    /// `E[x²] - E[x]²` computed from the product sums in one pass.
    ///
    /// Numerically weaker than [`Self::Deviations`]; the result is clamped at
    /// zero so cancellation never yields a negative variance.
    Shortcut,
}

/// Options shared by all pipelines.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub variance: VarianceMethod,
}

/// Measures of central tendency and dispersion for one dataset.
///
/// Values are kept at full precision; use [`StatisticalResults::rounded`] to
/// obtain a copy for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticalResults {
    pub mean: f64,
    pub median: f64,
    /// Modal values in ascending order, or `None` when the data has no mode.
    pub mode: Option<Vec<f64>>,
    /// Population variance.
    pub variance: f64,
    pub standard_deviation: f64,
}

impl StatisticalResults {
    pub(crate) fn new(mean: f64, median: f64, mode: Option<Vec<f64>>, variance: f64) -> Self {
        Self {
            mean,
            median,
            mode,
            variance,
            standard_deviation: variance.sqrt(),
        }
    }

    /// Returns a copy with every value rounded to `decimals` decimal places.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqstat_stats::{StatisticalResults, round::DISPLAY_DECIMALS};
    /// let stats = StatisticalResults::ungrouped(&[1.0, 2.0, 2.0]).unwrap();
    /// let shown = stats.rounded(DISPLAY_DECIMALS);
    /// assert_eq!(shown.mean, 1.6667);
    /// assert_eq!(shown.mode, Some(vec![2.0]));
    /// ```
    #[must_use]
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            mean: round_to(self.mean, decimals),
            median: round_to(self.median, decimals),
            mode: self
                .mode
                .as_ref()
                .map(|mode| mode.iter().map(|&m| round_to(m, decimals)).collect()),
            variance: round_to(self.variance, decimals),
            standard_deviation: round_to(self.standard_deviation, decimals),
        }
    }
}

pub(crate) fn shortcut_variance(mean_of_squares: f64, mean: f64) -> f64 {
    (mean_of_squares - mean.powi(2)).max(0.0)
}
