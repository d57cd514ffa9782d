//! Nominal-to-period rate conversion
//!
//! Rates are handled the way the source dashboards handle them: a nominal
//! annual rate divided by the number of compounding periods per year. No
//! effective-annual conversion is performed.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// A nominal annual rate with its compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSpec {
    /// Nominal annual rate as a fraction (0.08 = 8% a.a.)
    pub nominal_annual: f64,

    /// Compounding periods per year (12 = monthly)
    pub periods_per_year: u32,
}

impl RateSpec {
    /// Create a rate spec, rejecting negative nominal rates
    pub fn annual(nominal_annual: f64, periods_per_year: u32) -> CalcResult<Self> {
        if nominal_annual < 0.0 {
            return Err(CalcError::invalid_parameter(
                "nominal_annual",
                format!("nominal rate {} is negative", nominal_annual),
            ));
        }
        Self::annual_allowing_negative(nominal_annual, periods_per_year)
    }

    /// Create a rate spec that explicitly permits a negative nominal rate
    ///
    /// Negative rates arise as real (inflation-deflated) returns.
    pub fn annual_allowing_negative(
        nominal_annual: f64,
        periods_per_year: u32,
    ) -> CalcResult<Self> {
        if periods_per_year == 0 {
            return Err(CalcError::invalid_parameter(
                "periods_per_year",
                "must be at least 1",
            ));
        }
        Ok(Self {
            nominal_annual,
            periods_per_year,
        })
    }

    /// Effective rate for one compounding period
    pub fn period_rate(&self) -> f64 {
        self.nominal_annual / self.periods_per_year as f64
    }
}

/// Convert a nominal annual rate to a per-period rate by simple division
pub fn period_rate(nominal_annual: f64, periods_per_year: u32) -> CalcResult<f64> {
    if periods_per_year == 0 {
        return Err(CalcError::invalid_parameter(
            "periods_per_year",
            "must be at least 1",
        ));
    }
    Ok(nominal_annual / periods_per_year as f64)
}

/// Convert a per-period rate to its compounded annual equivalent
pub fn annualize(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powi(periods_per_year as i32) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_rate_is_simple_division() {
        let monthly = period_rate(0.12, 12).unwrap();
        assert_relative_eq!(monthly, 0.01, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert!(period_rate(0.08, 0).is_err());
        assert!(RateSpec::annual(0.08, 0).is_err());
    }

    #[test]
    fn test_negative_rate_needs_explicit_constructor() {
        assert!(RateSpec::annual(-0.02, 12).is_err());

        let spec = RateSpec::annual_allowing_negative(-0.02, 12).unwrap();
        assert_relative_eq!(spec.period_rate(), -0.02 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_annualize_round_trip() {
        // 1% monthly compounds to ~12.68% annually
        let annual = annualize(0.01, 12);
        assert_relative_eq!(annual, 1.01f64.powi(12) - 1.0, epsilon = 1e-12);
        assert!(annual > 0.12);
    }
}
