//! Regressive withholding tax table for fixed-income holdings
//!
//! Withholding on investment gains falls as the holding period grows. The
//! default table is the standard fixed-income schedule: 22.5% up to 180
//! days, 20% up to 360, 17.5% up to 720, 15% beyond.

/// Withholding tax brackets keyed by holding period in days
///
/// Bracket boundaries are inclusive on the upper bound: a holding period of
/// exactly 180 days falls in the first bracket.
#[derive(Debug, Clone)]
pub struct RegressiveTaxTable {
    /// (upper bound in days, aliquot) pairs in ascending day order
    brackets: Vec<(u32, f64)>,

    /// Aliquot applied beyond the last bracket
    final_aliquot: f64,
}

impl RegressiveTaxTable {
    /// Build a table from explicit brackets
    pub fn new(brackets: Vec<(u32, f64)>, final_aliquot: f64) -> Self {
        Self {
            brackets,
            final_aliquot,
        }
    }

    /// The standard regressive fixed-income schedule
    pub fn default_fixed_income() -> Self {
        Self {
            brackets: vec![
                (180, 0.225), // up to 6 months
                (360, 0.20),  // up to 1 year
                (720, 0.175), // up to 2 years
            ],
            final_aliquot: 0.15,
        }
    }

    /// Aliquot for a holding period in days
    ///
    /// Total over all day counts; there is no error case.
    pub fn aliquot_for_days(&self, days: u32) -> f64 {
        for &(max_days, aliquot) in &self.brackets {
            if days <= max_days {
                return aliquot;
            }
        }
        self.final_aliquot
    }
}

impl Default for RegressiveTaxTable {
    fn default() -> Self {
        Self::default_fixed_income()
    }
}

/// Aliquot for a holding period under the default fixed-income table
pub fn tax_bracket(holding_days: u32) -> f64 {
    RegressiveTaxTable::default_fixed_income().aliquot_for_days(holding_days)
}
