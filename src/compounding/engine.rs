//! Compound-interest calculations and the contribution projection loop

use serde::{Deserialize, Serialize};

use super::projection::{CompoundingProjection, MonthlyBalanceRow};
use crate::error::{CalcError, CalcResult};
use crate::rates::RateSpec;

/// Parameters for a principal-plus-contributions projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionPlan {
    /// Initial principal
    pub principal: f64,

    /// Amount added after each month's growth
    pub monthly_contribution: f64,

    /// Nominal annual rate as a fraction
    pub annual_rate: f64,

    /// Horizon in years; fractional years round down to whole months
    pub years: f64,
}

impl ContributionPlan {
    /// Create a plan, validating that amounts and horizon are non-negative
    pub fn new(
        principal: f64,
        monthly_contribution: f64,
        annual_rate: f64,
        years: f64,
    ) -> CalcResult<Self> {
        if principal < 0.0 {
            return Err(CalcError::invalid_parameter(
                "principal",
                format!("{} is negative", principal),
            ));
        }
        if monthly_contribution < 0.0 {
            return Err(CalcError::invalid_parameter(
                "monthly_contribution",
                format!("{} is negative", monthly_contribution),
            ));
        }
        if years < 0.0 {
            return Err(CalcError::invalid_parameter(
                "years",
                format!("{} is negative", years),
            ));
        }
        Ok(Self {
            principal,
            monthly_contribution,
            annual_rate,
            years,
        })
    }

    /// Total simulated months for the horizon
    pub fn total_months(&self) -> u32 {
        (self.years * 12.0).floor() as u32
    }

    /// Effective monthly rate (nominal annual / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }
}

/// Future value of a lump sum compounded `periods_per_year` times a year
pub fn future_value_lump_sum(
    principal: f64,
    annual_rate: f64,
    years: f64,
    periods_per_year: u32,
) -> CalcResult<f64> {
    let rate = RateSpec::annual_allowing_negative(annual_rate, periods_per_year)?;
    let periods = rate.periods_per_year as f64 * years;
    Ok(principal * (1.0 + rate.period_rate()).powf(periods))
}

/// Present value of a future amount discounted over `periods` periods
pub fn present_value(
    future_value: f64,
    annual_rate: f64,
    periods: u32,
    periods_per_year: u32,
) -> CalcResult<f64> {
    let rate = RateSpec::annual_allowing_negative(annual_rate, periods_per_year)?;
    Ok(future_value / (1.0 + rate.period_rate()).powi(periods as i32))
}

/// Closed-form future value of a principal plus level end-of-period
/// contributions
///
/// The zero-rate limit of the annuity factor is the plain sum of
/// contributions.
pub fn future_value_with_contributions(
    principal: f64,
    contribution: f64,
    period_rate: f64,
    periods: u32,
) -> f64 {
    let growth = (1.0 + period_rate).powi(periods as i32);
    let fv_principal = principal * growth;
    let fv_contributions = if period_rate == 0.0 {
        contribution * periods as f64
    } else {
        contribution * (growth - 1.0) / period_rate
    };
    fv_principal + fv_contributions
}

/// Simulate a contribution plan month by month
///
/// Each month the balance grows at the monthly rate and the contribution is
/// added afterwards, so a contribution earns nothing in the month it is
/// made. A horizon that rounds down to zero months produces an empty
/// projection.
pub fn project_with_contributions(plan: &ContributionPlan) -> CompoundingProjection {
    let months = plan.total_months();
    let monthly_rate = plan.monthly_rate();

    let mut balance = plan.principal;
    let mut rows = Vec::with_capacity(months as usize);

    for month in 1..=months {
        balance *= 1.0 + monthly_rate;
        balance += plan.monthly_contribution;
        rows.push(MonthlyBalanceRow {
            month,
            year: (month - 1) / 12 + 1,
            balance,
        });
    }

    CompoundingProjection {
        principal: plan.principal,
        monthly_contribution: plan.monthly_contribution,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_monotone_in_years() {
        let mut prev = 10_000.0;
        for years in 1..=30 {
            let fv = future_value_lump_sum(10_000.0, 0.08, years as f64, 12).unwrap();
            assert!(fv > prev, "FV must grow with the horizon");
            prev = fv;
        }
    }

    #[test]
    fn test_zero_rate_identity() {
        for (years, ppy) in [(1.0, 1), (7.5, 12), (30.0, 365)] {
            let fv = future_value_lump_sum(10_000.0, 0.0, years, ppy).unwrap();
            assert_relative_eq!(fv, 10_000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_present_value_inverts_future_value() {
        let fv = future_value_lump_sum(10_000.0, 0.08, 10.0, 12).unwrap();
        let pv = present_value(fv, 0.08, 120, 12).unwrap();
        assert_relative_eq!(pv, 10_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(future_value_lump_sum(10_000.0, 0.08, 10.0, 0).is_err());
        assert!(present_value(10_000.0, 0.08, 12, 0).is_err());
    }

    #[test]
    fn test_projection_one_year() {
        // 10k principal, 500/month, 8% a.a. over 1 year: 12 rows, final
        // balance matches the hand-rolled recurrence
        let plan = ContributionPlan::new(10_000.0, 500.0, 0.08, 1.0).unwrap();
        let projection = project_with_contributions(&plan);

        assert_eq!(projection.rows.len(), 12);
        assert_eq!(projection.rows[0].year, 1);
        assert_eq!(projection.rows[11].year, 1);

        let mut expected = 10_000.0;
        for _ in 0..12 {
            expected = expected * (1.0 + 0.08 / 12.0) + 500.0;
        }
        assert_relative_eq!(projection.final_balance(), expected, epsilon = 1e-9);
        assert_relative_eq!(projection.total_invested(), 16_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contribution_lands_after_growth() {
        // One month: balance = P*(1+i) + C, not (P+C)*(1+i)
        let plan = ContributionPlan::new(1_000.0, 100.0, 0.12, 1.0 / 12.0).unwrap();
        let projection = project_with_contributions(&plan);

        assert_eq!(projection.rows.len(), 1);
        assert_relative_eq!(
            projection.rows[0].balance,
            1_000.0 * 1.01 + 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_duration_projection_is_empty() {
        let plan = ContributionPlan::new(10_000.0, 500.0, 0.08, 0.05).unwrap();
        assert_eq!(plan.total_months(), 0);

        let projection = project_with_contributions(&plan);
        assert!(projection.rows.is_empty());
        assert_relative_eq!(projection.final_balance(), 10_000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fractional_years_round_down() {
        let plan = ContributionPlan::new(0.0, 100.0, 0.0, 1.99).unwrap();
        assert_eq!(plan.total_months(), 23);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(ContributionPlan::new(-1.0, 0.0, 0.08, 1.0).is_err());
        assert!(ContributionPlan::new(0.0, -1.0, 0.08, 1.0).is_err());
        assert!(ContributionPlan::new(0.0, 0.0, 0.08, -1.0).is_err());
    }

    #[test]
    fn test_closed_form_matches_simulation() {
        // With end-of-month contributions the closed form and the monthly
        // loop agree
        let plan = ContributionPlan::new(10_000.0, 500.0, 0.08, 3.0).unwrap();
        let projection = project_with_contributions(&plan);

        let closed = future_value_with_contributions(10_000.0, 500.0, 0.08 / 12.0, 36);
        assert_relative_eq!(projection.final_balance(), closed, max_relative = 1e-9);
    }

    #[test]
    fn test_closed_form_zero_rate() {
        let fv = future_value_with_contributions(1_000.0, 100.0, 0.0, 24);
        assert_relative_eq!(fv, 1_000.0 + 2_400.0, epsilon = 1e-12);
    }
}
