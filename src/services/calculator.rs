//! Refund calculator
//!
//! Pure math behind the landing-page calculator widget: a fixed 85%
//! recovery rate with a 15% service fee taken out of the gross refund.

/// Smallest tariff payment the calculator accepts.
pub const MIN_AMOUNT: u32 = 1_000;
/// Largest tariff payment the calculator accepts.
pub const MAX_AMOUNT: u32 = 500_000;

/// Share of the tariff payment that is recoverable.
pub const RECOVERY_RATE: f64 = 0.85;
/// Service fee, taken as a share of the gross refund.
pub const FEE_RATE: f64 = 0.15;

/// Result of running a payment amount through the refund formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefundBreakdown {
    pub payment: f64,
    pub gross_refund: f64,
    pub fee: f64,
    pub net_refund: f64,
}

/// Map a payment amount to its refund breakdown.
///
/// Defined for all finite non-negative inputs; callers clamp to the
/// supported range first (see [`clamp_amount`]).
pub fn calculate_refund(amount: f64) -> RefundBreakdown {
    let gross_refund = amount * RECOVERY_RATE;
    let fee = gross_refund * FEE_RATE;
    let net_refund = gross_refund - fee;

    RefundBreakdown {
        payment: amount,
        gross_refund,
        fee,
        net_refund,
    }
}

/// Clamp a user-entered amount to the supported range.
pub fn clamp_amount(amount: u32) -> u32 {
    amount.clamp(MIN_AMOUNT, MAX_AMOUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_breakdown_at_default_amount() {
        let result = calculate_refund(50_000.0);
        assert!((result.gross_refund - 42_500.0).abs() < EPSILON);
        assert!((result.fee - 6_375.0).abs() < EPSILON);
        assert!((result.net_refund - 36_125.0).abs() < EPSILON);
        assert!((result.payment - 50_000.0).abs() < EPSILON);
    }

    #[test]
    fn test_net_refund_is_payment_times_rate_squared() {
        // net = a * 0.85 * 0.85 for every supported amount
        for amount in (MIN_AMOUNT..=MAX_AMOUNT).step_by(7_919) {
            let a = amount as f64;
            let result = calculate_refund(a);
            assert!(
                (result.net_refund - a * RECOVERY_RATE * RECOVERY_RATE).abs() < 1e-6,
                "net refund mismatch at {}",
                amount
            );
        }
    }

    #[test]
    fn test_fee_plus_net_equals_gross() {
        for amount in [1_000u32, 1_001, 49_999, 250_000, 499_999, 500_000] {
            let result = calculate_refund(amount as f64);
            assert!(
                (result.fee + result.net_refund - result.gross_refund).abs() < EPSILON,
                "fee + net != gross at {}",
                amount
            );
        }
    }

    #[test]
    fn test_zero_amount() {
        let result = calculate_refund(0.0);
        assert_eq!(result.gross_refund, 0.0);
        assert_eq!(result.fee, 0.0);
        assert_eq!(result.net_refund, 0.0);
    }

    #[test]
    fn test_clamp_amount_below_range() {
        assert_eq!(clamp_amount(0), MIN_AMOUNT);
        assert_eq!(clamp_amount(999), MIN_AMOUNT);
    }

    #[test]
    fn test_clamp_amount_in_range() {
        assert_eq!(clamp_amount(1_000), 1_000);
        assert_eq!(clamp_amount(50_000), 50_000);
        assert_eq!(clamp_amount(500_000), 500_000);
    }

    #[test]
    fn test_clamp_amount_above_range() {
        assert_eq!(clamp_amount(500_001), MAX_AMOUNT);
        assert_eq!(clamp_amount(u32::MAX), MAX_AMOUNT);
    }
}
