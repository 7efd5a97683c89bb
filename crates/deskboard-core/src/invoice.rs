//! Invoice arithmetic
//!
//! Percent tax over a flat amount, rounded half-up to two decimals at each
//! derived figure. Inputs are validated at draft time, so stored amounts are
//! always well-formed.

/// Round half-up (away from zero for the non-negative amounts used here)
/// to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tax portion: `amount * rate / 100`, rounded
pub fn tax_amount(amount: f64, tax_rate: f64) -> f64 {
    round2(amount * tax_rate / 100.0)
}

/// Grand total: amount plus tax, rounded
pub fn total(amount: f64, tax_rate: f64) -> f64 {
    round2(amount + amount * tax_rate / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_half_up_at_two_decimals() {
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(2.375), 2.38);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn tax_amount_is_percent_of_amount() {
        assert_eq!(tax_amount(100.0, 10.0), 10.0);
        assert_eq!(tax_amount(19.99, 7.0), 1.4);
        assert_eq!(tax_amount(100.0, 0.0), 0.0);
    }

    #[test]
    fn total_adds_tax_before_rounding() {
        assert_eq!(total(100.0, 10.0), 110.0);
        assert_eq!(total(25_000.0, 19.0), 29_750.0);
        assert_eq!(total(19.99, 7.0), 21.39);
    }
}
