//! Rate conversion

/// Convert an annual percentage (e.g. `6.0` for 6%) into the equivalent
/// monthly compounding rate, so that `(1 + r)^12 == 1 + p / 100`.
///
/// Rates at or below -100% have no real twelfth root and clamp to `0.0`.
#[must_use]
#[inline]
pub fn monthly_rate(yearly_percent: f64) -> f64 {
    let growth = 1.0 + yearly_percent / 100.0;
    if growth <= 0.0 {
        return 0.0;
    }
    growth.powf(1.0 / 12.0) - 1.0
}
