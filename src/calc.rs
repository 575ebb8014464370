use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MortgageKind {
    Repayment,
    InterestOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Repayment {
    pub monthly: f64,
    pub total: f64,
}

/// Computes the monthly and total repayment for a mortgage.
///
/// For `Repayment` this is the standard annuity formula. A zero interest
/// rate would make the formula divide by zero, so it falls back to paying
/// the principal down in equal monthly installments. For `InterestOnly`
/// the monthly payment is just the accrued monthly interest; the principal
/// is never paid down.
///
/// No rounding is applied here; callers format for display.
pub fn compute(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
    kind: MortgageKind,
) -> Repayment {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let num_payments = term_years * 12.0;

    let monthly = match kind {
        MortgageKind::Repayment => {
            if monthly_rate > 0.0 {
                principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-num_payments))
            } else {
                principal / num_payments
            }
        }
        MortgageKind::InterestOnly => principal * monthly_rate,
    };

    Repayment {
        monthly,
        total: monthly * num_payments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn repayment_reference_scenario() {
        // 200k over 25 years at 5% amortizing.
        let r = compute(200_000.0, 5.0, 25.0, MortgageKind::Repayment);
        assert!((r.monthly - 1169.18).abs() < 0.01, "monthly = {}", r.monthly);
        assert!((r.total - 350_754.83).abs() < 0.01, "total = {}", r.total);
    }

    #[test]
    fn interest_only_reference_scenario() {
        let r = compute(200_000.0, 5.0, 25.0, MortgageKind::InterestOnly);
        assert!((r.monthly - 833.33).abs() < 0.01, "monthly = {}", r.monthly);
        assert_eq!(r.total, r.monthly * 300.0);
    }

    #[test]
    fn zero_rate_repayment_is_straight_line() {
        let r = compute(120_000.0, 0.0, 10.0, MortgageKind::Repayment);
        assert!(r.monthly.is_finite());
        assert_eq!(r.monthly, 120_000.0 / 120.0);
        assert_eq!(r.total, 120_000.0);
    }

    #[test]
    fn zero_rate_interest_only_is_zero() {
        let r = compute(120_000.0, 0.0, 10.0, MortgageKind::InterestOnly);
        assert_eq!(r.monthly, 0.0);
        assert_eq!(r.total, 0.0);
    }

    proptest! {
        #[test]
        fn repayment_monthly_positive_and_total_consistent(
            principal in 1.0f64..10_000_000.0,
            rate in 0.01f64..20.0,
            term in 1u32..=40,
        ) {
            let r = compute(principal, rate, term as f64, MortgageKind::Repayment);
            prop_assert!(r.monthly > 0.0);
            prop_assert!(r.monthly.is_finite());
            // Same multiplication the implementation performs, so exact.
            prop_assert_eq!(r.total, r.monthly * term as f64 * 12.0);
        }

        #[test]
        fn interest_only_monthly_matches_accrual(
            principal in 1.0f64..10_000_000.0,
            rate in 0.01f64..20.0,
            term in 1u32..=40,
        ) {
            let r = compute(principal, rate, term as f64, MortgageKind::InterestOnly);
            prop_assert_eq!(r.monthly, principal * rate / 100.0 / 12.0);
            prop_assert_eq!(r.total, r.monthly * term as f64 * 12.0);
        }

        #[test]
        fn amortizing_always_costs_at_least_the_principal(
            principal in 1.0f64..10_000_000.0,
            rate in 0.01f64..20.0,
            term in 1u32..=40,
        ) {
            let r = compute(principal, rate, term as f64, MortgageKind::Repayment);
            // Positive rate means some interest is paid on top of principal.
            prop_assert!(r.total > principal * 0.9999);
        }
    }
}
