//! Price derivation helpers
//!
//! Discounted prices are computed in decimal so that rounding to cents
//! matches what a shopper sees on a receipt.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round an amount to 2 decimals (half away from zero)
pub fn round_to_cents(amount: f64) -> f64 {
    match Decimal::from_f64(amount) {
        Some(d) => to_f64(d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)),
        // NaN / infinity: nothing sensible to round
        None => amount,
    }
}

/// Price after applying a percentage discount, rounded to 2 decimals.
///
/// `price * (1 - discount_percentage / 100)`
///
/// # Examples
///
/// ```
/// use shared::price::final_price;
///
/// assert_eq!(final_price(100.0, 25.0), 75.0);
/// assert_eq!(final_price(9.99, 0.0), 9.99);
/// ```
pub fn final_price(price: f64, discount_percentage: f64) -> f64 {
    match (Decimal::from_f64(price), Decimal::from_f64(discount_percentage)) {
        (Some(p), Some(d)) => {
            let discounted = p * (Decimal::ONE - d / HUNDRED);
            to_f64(discounted.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        }
        _ => round_to_cents(price * (1.0 - discount_percentage / 100.0)),
    }
}

/// A product counts as discounted when the percentage is strictly positive
pub fn has_discount(discount_percentage: f64) -> bool {
    discount_percentage > 0.0
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_price() {
        assert_eq!(final_price(100.0, 25.0), 75.0);
        assert_eq!(final_price(100.0, 0.0), 100.0);
        assert_eq!(final_price(100.0, 100.0), 0.0);
        assert_eq!(final_price(0.0, 50.0), 0.0);
        // 9.99 * 0.9283 = 9.273717
        assert_eq!(final_price(9.99, 7.17), 9.27);
        // 19.99 * 0.9 = 17.991
        assert_eq!(final_price(19.99, 10.0), 17.99);
    }

    #[test]
    fn test_final_price_rounds_half_up() {
        // 10.05 * 0.5 = 5.025
        assert_eq!(final_price(10.05, 50.0), 5.03);
    }

    #[test]
    fn test_final_price_has_at_most_two_decimals() {
        for price in [0.01, 0.99, 1.0, 12.5, 99.99, 549.0, 1899.99] {
            for discount in [0.0, 0.5, 7.17, 12.96, 33.3, 99.9, 100.0] {
                let fp = final_price(price, discount);
                let cents = fp * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6, "{price} @ {discount}% -> {fp}");
                assert!(fp <= price, "{price} @ {discount}% -> {fp}");
                assert!(fp >= 0.0);
            }
        }
    }

    #[test]
    fn test_has_discount() {
        assert!(has_discount(25.0));
        assert!(has_discount(0.01));
        assert!(!has_discount(0.0));
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1.234), 1.23);
        assert_eq!(round_to_cents(1.235), 1.24);
        assert_eq!(round_to_cents(25.0), 25.0);
    }
}
