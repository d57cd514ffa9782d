//! Fixed-installment loan payments and amortization schedules

mod engine;
mod schedule;

pub use engine::{build_schedule, installment_payment, PaymentTiming};
pub use schedule::{AmortizationSchedule, AmortizationSummary, InstallmentRecord};
