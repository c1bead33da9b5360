//! Conversions between authored `f64` values and exact stat numbers.
//!
//! Stats, costs and payouts are [`BigDecimal`]: they climb past `10^36` and a
//! rune removed must leave the creature exactly as it found it. Percentages,
//! probabilities and the attack gauge stay `f64`.

use bigdecimal::{BigDecimal, ToPrimitive};

/// Exact decimal for an authored `f64`, read through its shortest display form
/// so `1.2` becomes `1.2` rather than its binary expansion. Non-finite input
/// yields zero.
pub fn decimal(value: f64) -> BigDecimal {
    value.to_string().parse().unwrap_or_default()
}

/// Lossy view for probability maths and display. Out-of-range values saturate.
pub fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `10^exponent`, exact.
pub fn pow10(exponent: u64) -> BigDecimal {
    let scale = i64::try_from(exponent).map_or(i64::MIN, |e| -e);
    BigDecimal::new(1.into(), scale)
}

/// `n / 100`, exact.
pub fn hundredths(n: u32) -> BigDecimal {
    BigDecimal::new(n.into(), 2)
}

/// Rune growth factor `1 + pct/100`.
pub(crate) fn percent_factor(pct: &BigDecimal) -> BigDecimal {
    BigDecimal::from(1) + pct / &BigDecimal::from(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authored_values_keep_their_decimal_digits() {
        assert_eq!(decimal(1.2), "1.2".parse::<BigDecimal>().unwrap());
        assert_eq!(decimal(0.15), hundredths(15));
        assert_eq!(decimal(1e36), pow10(36));
        assert_eq!(decimal(f64::NAN), BigDecimal::from(0));
    }

    #[test]
    fn powers_of_ten_hold_past_float_range() {
        let huge = pow10(400);
        assert!(huge > decimal(f64::MAX));
        assert_eq!(&huge / &pow10(399), BigDecimal::from(10));
    }

    #[test]
    fn percent_factor_adds_one() {
        assert_eq!(percent_factor(&BigDecimal::from(12)), decimal(1.12));
        assert_eq!(percent_factor(&BigDecimal::from(0)), BigDecimal::from(1));
    }
}
