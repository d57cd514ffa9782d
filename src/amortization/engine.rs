//! Installment payment formula and schedule generation

use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationSchedule, InstallmentRecord};
use crate::error::{CalcError, CalcResult};

/// When the installment falls due within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// End-of-period payments (ordinary annuity)
    Ordinary,
    /// Start-of-period payments (annuity due)
    Due,
}

/// Fixed installment payment for a financed principal
///
/// Ordinary timing uses the standard annuity formula
/// `P * i(1+i)^n / ((1+i)^n - 1)`; due timing divides that result by
/// `(1+i)`. A zero period rate makes the formula's denominator vanish and is
/// rejected; callers that need zero-rate financing split the principal
/// evenly as `P / n` themselves.
pub fn installment_payment(
    principal: f64,
    period_rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> CalcResult<f64> {
    if periods < 1 {
        return Err(CalcError::invalid_parameter(
            "periods",
            "must be at least 1",
        ));
    }
    if period_rate == 0.0 {
        return Err(CalcError::invalid_parameter(
            "period_rate",
            "annuity formula is undefined at a zero rate",
        ));
    }

    let growth = (1.0 + period_rate).powi(periods as i32);
    let ordinary = principal * (period_rate * growth) / (growth - 1.0);

    Ok(match timing {
        PaymentTiming::Ordinary => ordinary,
        PaymentTiming::Due => ordinary / (1.0 + period_rate),
    })
}

/// Build the full period-by-period amortization of a loan
///
/// The payment is computed once; the running balance then evolves period by
/// period: interest on the opening balance, the remainder of the payment
/// amortizes principal. The recorded opening balance is reconstructed from
/// the running balance after the subtraction so consecutive records stay
/// consistent even under floating-point drift; the closing balance is
/// clamped at zero to absorb that drift in the final period.
pub fn build_schedule(
    principal: f64,
    period_rate: f64,
    periods: u32,
    timing: PaymentTiming,
) -> CalcResult<AmortizationSchedule> {
    let payment = installment_payment(principal, period_rate, periods, timing)?;

    let mut balance = principal;
    let mut records = Vec::with_capacity(periods as usize);

    for period in 1..=periods {
        let interest = balance * period_rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;

        records.push(InstallmentRecord {
            period,
            opening_balance: balance + principal_portion,
            interest,
            principal_portion,
            payment,
            closing_balance: balance.max(0.0),
        });
    }

    Ok(AmortizationSchedule {
        principal,
        period_rate,
        payment,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_installment() {
        // 50k financed over 36 months at 1.2% a.m. against the standard
        // annuity formula evaluated directly
        let pmt = installment_payment(50_000.0, 0.012, 36, PaymentTiming::Ordinary).unwrap();

        let growth = 1.012f64.powi(36);
        let expected = 50_000.0 * (0.012 * growth) / (growth - 1.0);
        assert!((pmt - expected).abs() < 0.01, "got {}", pmt);
        assert!((pmt - 1_718.61).abs() < 0.01, "got {}", pmt);
    }

    #[test]
    fn test_due_is_ordinary_discounted_one_period() {
        let ordinary = installment_payment(50_000.0, 0.012, 36, PaymentTiming::Ordinary).unwrap();
        let due = installment_payment(50_000.0, 0.012, 36, PaymentTiming::Due).unwrap();
        assert_relative_eq!(due, ordinary / 1.012, epsilon = 1e-9);
        assert!(due < ordinary);
    }

    #[test]
    fn test_zero_rate_and_zero_periods_rejected() {
        assert!(installment_payment(50_000.0, 0.0, 36, PaymentTiming::Ordinary).is_err());
        assert!(installment_payment(50_000.0, 0.012, 0, PaymentTiming::Ordinary).is_err());
        assert!(build_schedule(50_000.0, 0.0, 36, PaymentTiming::Ordinary).is_err());
    }

    #[test]
    fn test_schedule_balance_closure() {
        let schedule = build_schedule(50_000.0, 0.012, 36, PaymentTiming::Ordinary).unwrap();
        assert_eq!(schedule.records.len(), 36);

        // Month 1 interest is a single multiplication on the principal
        assert_relative_eq!(schedule.records[0].interest, 600.0, epsilon = 1e-9);
        assert_relative_eq!(schedule.records[0].opening_balance, 50_000.0, epsilon = 1e-9);

        // Consecutive records chain: closing k == opening k+1
        for pair in schedule.records.windows(2) {
            assert_relative_eq!(
                pair[0].closing_balance,
                pair[1].opening_balance,
                max_relative = 1e-9
            );
        }

        // Fully amortized within tolerance relative to principal
        let last = schedule.records.last().unwrap();
        assert!(last.closing_balance.abs() <= 1e-6 * 50_000.0);
        assert!(last.closing_balance >= 0.0);

        let total_principal: f64 = schedule.records.iter().map(|r| r.principal_portion).sum();
        assert!((total_principal - 50_000.0).abs() <= 1e-6 * 50_000.0);
    }

    #[test]
    fn test_schedule_summary_totals() {
        let schedule = build_schedule(50_000.0, 0.012, 36, PaymentTiming::Ordinary).unwrap();
        let summary = schedule.summary();

        assert_eq!(summary.periods, 36);
        assert_relative_eq!(
            summary.total_paid,
            schedule.payment * 36.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            summary.total_paid,
            summary.total_interest + summary.total_principal,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_due_schedule_leaves_residual_balance() {
        // A due-timed payment is smaller than end-of-period accrual requires,
        // so the last closing balance stays positive; the loop must still
        // run all periods
        let schedule = build_schedule(10_000.0, 0.01, 12, PaymentTiming::Due).unwrap();
        assert_eq!(schedule.records.len(), 12);
        assert!(schedule.records.last().unwrap().closing_balance > 0.0);
    }
}
