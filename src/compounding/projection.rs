//! Output structures for contribution projections

use serde::{Deserialize, Serialize};

use crate::tax::{apply_tax_and_inflation, TaxResult};

/// Balance at the end of one simulated month
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyBalanceRow {
    /// Simulation month (1-indexed)
    pub month: u32,

    /// Year label (1-indexed; months 1-12 are year 1)
    pub year: u32,

    /// Balance after growth and that month's contribution
    pub balance: f64,
}

/// End-of-year snapshot of a contribution projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YearEndRow {
    /// Year label (1-indexed)
    pub year: u32,

    /// Principal plus all contributions made through this year
    pub total_invested: f64,

    /// Balance at the last simulated month of the year
    pub balance: f64,

    /// Balance minus total invested
    pub gross_gain: f64,
}

/// Complete month-by-month projection of principal plus contributions
///
/// Produced once per invocation and never mutated. An empty row vector means
/// the horizon rounded down to zero months; aggregates then fall back to the
/// principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundingProjection {
    /// Initial principal
    pub principal: f64,

    /// Contribution added after each month's growth
    pub monthly_contribution: f64,

    /// One row per simulated month
    pub rows: Vec<MonthlyBalanceRow>,
}

impl CompoundingProjection {
    /// Number of simulated months
    pub fn total_months(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Gross balance at the end of the horizon
    pub fn final_balance(&self) -> f64 {
        self.rows.last().map(|r| r.balance).unwrap_or(self.principal)
    }

    /// Principal plus every contribution made over the horizon
    pub fn total_invested(&self) -> f64 {
        self.principal + self.monthly_contribution * self.total_months() as f64
    }

    /// Gross gain over the amount invested
    pub fn gross_gain(&self) -> f64 {
        self.final_balance() - self.total_invested()
    }

    /// Last balance of each simulated year with invested-to-date amounts
    pub fn yearly_summary(&self) -> Vec<YearEndRow> {
        let mut out: Vec<YearEndRow> = Vec::new();

        for row in &self.rows {
            let months_through_year = (row.year * 12).min(self.total_months());
            let invested =
                self.principal + self.monthly_contribution * months_through_year as f64;
            let snapshot = YearEndRow {
                year: row.year,
                total_invested: invested,
                balance: row.balance,
                gross_gain: row.balance - invested,
            };

            match out.last_mut() {
                Some(last) if last.year == row.year => *last = snapshot,
                _ => out.push(snapshot),
            }
        }

        out
    }

    /// Net the gross final value for withholding tax and inflation
    ///
    /// Uses the default fixed-income table; `years` is the plan horizon,
    /// which may differ fractionally from the simulated months.
    pub fn net_summary(&self, years: f64, inflation_rate: f64) -> TaxResult {
        apply_tax_and_inflation(
            self.final_balance(),
            self.total_invested(),
            years,
            inflation_rate,
        )
    }

    /// Aggregate statistics for the whole projection
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            total_months: self.total_months(),
            total_invested: self.total_invested(),
            gross_final: self.final_balance(),
            gross_gain: self.gross_gain(),
        }
    }
}

/// Summary statistics for a contribution projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub total_invested: f64,
    pub gross_final: f64,
    pub gross_gain: f64,
}
