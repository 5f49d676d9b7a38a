//! Descriptive statistics for ungrouped and grouped numeric data.
//!
//! This crate computes measures of central tendency and dispersion together
//! with the frequency tables they are derived from. Three pipelines share one
//! output shape ([`StatisticalResults`] plus table rows):
//!
//! - **Ungrouped**: raw observations; one table row per observation
//! - **Grouped**: user-defined class intervals with frequencies; one row per class
//! - **Binned**: raw observations grouped automatically with Sturges' Rule
//!
//! # Modules
//!
//! - [`ungrouped`]: mean, median, mode and population variance of raw data
//! - [`grouped`]: midpoint-based measures with median/mode interpolation
//! - [`binning`]: automatic class intervals (Sturges' Rule)
//! - [`table`]: frequency table rows and column totals
//! - [`interval`]: class intervals and their validation
//! - [`processed`]: the complete result of the binned pipeline
//! - [`context`]: caller-owned data-entry state and pipeline dispatch
//! - [`input`]: tokenizing raw text
//! - [`round`]: rounding for presentation
//!
//! # Examples
//!
//! ## Ungrouped data
//!
//! ```
//! use freqstat_stats::StatisticalResults;
//!
//! let stats = StatisticalResults::ungrouped(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(stats.mean, 2.5);
//! assert_eq!(stats.median, 2.5);
//! assert_eq!(stats.mode, None);
//! ```
//!
//! ## User-defined class intervals
//!
//! ```
//! use freqstat_stats::{AnalysisOptions, Analysis, interval::ClassInterval};
//!
//! let intervals = [
//!     ClassInterval { lower_bound: 10.0, upper_bound: 20.0, frequency: 5 },
//!     ClassInterval { lower_bound: 20.0, upper_bound: 30.0, frequency: 8 },
//!     ClassInterval { lower_bound: 30.0, upper_bound: 40.0, frequency: 7 },
//! ];
//! let analysis = Analysis::grouped(&intervals, &AnalysisOptions::default()).unwrap();
//! assert_eq!(analysis.grouped_table().unwrap().total_frequency, 20);
//! ```
//!
//! ## Automatic binning
//!
//! ```
//! use freqstat_stats::{AnalysisOptions, ProcessedData, VarianceMethod};
//!
//! let options = AnalysisOptions { variance: VarianceMethod::Shortcut };
//! let data = ProcessedData::from_text("12 15 18 22 25 30 32 35 38 42 45 48", &options).unwrap();
//! assert_eq!(data.class_count, 5);
//! assert_eq!(data.frequency_table.rows.last().unwrap().cumulative_frequency, 12);
//! ```

pub use self::{
    context::{Analysis, AnalysisContext, DataKind},
    error::{IntervalProblem, StatsError, TableProblem},
    processed::ProcessedData,
    results::{AnalysisOptions, StatisticalResults, VarianceMethod},
};

pub mod binning;
pub mod context;
pub mod error;
pub mod grouped;
pub mod input;
pub mod interval;
pub mod processed;
pub mod results;
pub mod round;
pub mod table;
pub mod ungrouped;
