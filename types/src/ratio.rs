//! Fixed-point ratio arithmetic.
//!
//! Thresholds and participation fractions are stored as integer numerators
//! over a fixed denominator of one million, so `500_000` means 50%.

/// Denominator for all fixed-point ratios (parts per million).
pub const RATIO_BASE: u32 = 1_000_000;

/// Compute `ceil(value * ratio / RATIO_BASE)` without intermediate overflow.
///
/// Exact for any `ratio <= RATIO_BASE`: the quotient part
/// `(value / RATIO_BASE) * ratio` never exceeds `value`, and the remainder
/// part stays below `RATIO_BASE * RATIO_BASE`. Numerators above `RATIO_BASE`
/// are accepted too (ratio bounds are policed at the settings boundary, not
/// here) and stay exact until the true result exceeds `u128::MAX`, where the
/// composition saturates instead of wrapping.
pub fn ratio_ceil_mul(value: u128, ratio: u32) -> u128 {
    let base = RATIO_BASE as u128;
    let ratio = ratio as u128;
    let remainder = (value % base) * ratio;
    let rounding = u128::from(remainder % base != 0);
    (value / base)
        .saturating_mul(ratio)
        .saturating_add(remainder / base + rounding)
}
