/// Reason a class interval was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IntervalProblem {
    #[display("bounds must be finite numbers")]
    NonFiniteBound,
    #[display("upper bound must be greater than lower bound")]
    EmptyRange,
    #[display("interval overlaps with another interval")]
    Overlap,
    #[display("frequency must be a positive integer")]
    ZeroFrequency,
}

/// Reason a grouped frequency table was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TableProblem {
    #[display("cumulative frequency is not the running sum of frequencies")]
    CumulativeFrequency,
    #[display("midpoint or product columns do not match the class")]
    ClassColumns,
    #[display("column totals do not match the rows")]
    Totals,
}

/// Errors produced by the statistics pipelines.
///
/// Every computation either returns a complete, consistent result or one of
/// these errors; there are no partial results.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("dataset is empty")]
    EmptyDataset,
    #[display("automatic binning produced an unusable class width ({width})")]
    DegenerateClassWidth { width: f64 },
    #[display("invalid class interval {lower} - {upper}: {reason}")]
    InvalidInterval {
        lower: f64,
        upper: f64,
        reason: IntervalProblem,
    },
    #[display("inconsistent frequency table at row {row}: {reason}")]
    InconsistentTable { row: usize, reason: TableProblem },
    #[display("observation must be a finite number, got {value}")]
    NonFiniteValue { value: f64 },
    #[display("invalid number: {token}")]
    InvalidToken { token: String },
}
