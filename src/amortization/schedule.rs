//! Amortization schedule output structures

use serde::{Deserialize, Serialize};

/// One period of an amortization schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstallmentRecord {
    /// Period index (1-indexed)
    pub period: u32,

    /// Balance owed at the start of the period
    pub opening_balance: f64,

    /// Interest accrued on the opening balance
    pub interest: f64,

    /// Part of the payment that reduces the balance
    pub principal_portion: f64,

    /// Fixed installment payment
    pub payment: f64,

    /// Balance after the payment, clamped at zero
    pub closing_balance: f64,
}

/// Full period-by-period amortization of a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Amount financed
    pub principal: f64,

    /// Effective rate per period
    pub period_rate: f64,

    /// Fixed installment payment
    pub payment: f64,

    /// One record per period
    pub records: Vec<InstallmentRecord>,
}

impl AmortizationSchedule {
    /// Aggregate totals over the schedule
    pub fn summary(&self) -> AmortizationSummary {
        let periods = self.records.len() as u32;
        let total_paid = self.payment * periods as f64;
        let total_interest: f64 = self.records.iter().map(|r| r.interest).sum();
        let total_principal: f64 = self.records.iter().map(|r| r.principal_portion).sum();

        AmortizationSummary {
            periods,
            total_paid,
            total_interest,
            total_principal,
        }
    }
}

/// Aggregate totals for an amortization schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub periods: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}
