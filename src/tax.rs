//! Withholding tax and inflation adjustment of investment results

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rates::RegressiveTaxTable;

/// Net result of taxing a gross value and deflating it by inflation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross value before tax
    pub gross: f64,

    /// Withholding tax on the gain
    ///
    /// A negative gain (loss) produces a negative tax that raises the net
    /// value. The source behaves this way and the behavior is preserved
    /// pending product-owner clarification.
    pub tax: f64,

    /// Gross value minus tax
    pub net: f64,

    /// Net value deflated to purchasing power at the start of the holding
    pub real_net: f64,

    /// Withholding aliquot that was applied
    pub aliquot: f64,
}

impl TaxResult {
    /// Net gain over the amount invested (post-tax earnings)
    pub fn net_gain_over(&self, total_invested: f64) -> f64 {
        self.net - total_invested
    }
}

/// Apply withholding tax and inflation deflation to a gross result
///
/// The holding period in days is `floor(years * 365)`; the aliquot comes
/// from the default regressive fixed-income table. Inflation compounds
/// annually over the full (fractional) horizon.
pub fn apply_tax_and_inflation(
    gross: f64,
    principal_invested: f64,
    years: f64,
    inflation_rate: f64,
) -> TaxResult {
    apply_with_table(
        &RegressiveTaxTable::default_fixed_income(),
        gross,
        principal_invested,
        years,
        inflation_rate,
    )
}

/// Same adjustment against a caller-supplied tax table
pub fn apply_with_table(
    table: &RegressiveTaxTable,
    gross: f64,
    principal_invested: f64,
    years: f64,
    inflation_rate: f64,
) -> TaxResult {
    let gain = gross - principal_invested;
    let days = (years * 365.0).floor() as u32;
    let aliquot = table.aliquot_for_days(days);
    let tax = gain * aliquot;
    let net = gross - tax;
    let real_net = net / (1.0 + inflation_rate).powf(years);

    TaxResult {
        gross,
        tax,
        net,
        real_net,
        aliquot,
    }
}

/// Calendar days between two dates, clamped at zero
///
/// For callers that hold actual purchase and redemption dates instead of a
/// year count.
pub fn holding_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    end.signed_duration_since(start).num_days().max(0) as u32
}
