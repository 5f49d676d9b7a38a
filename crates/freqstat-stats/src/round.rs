//! Shared rounding and aggregation helpers.

/// Number of decimal places used when statistics are presented.
pub const DISPLAY_DECIMALS: u32 = 4;

/// Rounds `value` to `decimals` decimal places (half away from zero).
///
/// # Examples
///
/// ```
/// # use freqstat_stats::round::round_to;
/// assert_eq!(round_to(2.345_67, 4), 2.3457);
/// assert_eq!(round_to(-1.25, 1), -1.3);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powf(f64::from(decimals));
    let rounded = (value * factor).round() / factor;
    // Scaling can overflow for huge values; those have no fractional digits anyway.
    if rounded.is_finite() { rounded } else { value }
}

pub(crate) fn sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

#[expect(clippy::cast_precision_loss)]
pub(crate) fn count_as_f64(count: u64) -> f64 {
    count as f64
}
