//! Fincalc - Deterministic calculation engine for personal-finance dashboards
//!
//! This library provides:
//! - Compound-interest projection (lump sums and monthly contributions)
//! - Withholding tax and inflation adjustment of investment results
//! - Fixed-installment loan payments and amortization schedules
//! - Internal rate of return solving and NPV curve sampling
//! - Batch scenario evaluation for rate comparisons
//!
//! Every computation is a pure, synchronous function of its inputs; the
//! presentation layer gathers parameters, calls the engines once per user
//! action, and renders the returned values.

pub mod amortization;
pub mod cashflow;
pub mod compounding;
pub mod error;
pub mod irr;
pub mod rates;
pub mod scenario;
pub mod tax;

// Re-export commonly used types
pub use amortization::{AmortizationSchedule, InstallmentRecord, PaymentTiming};
pub use cashflow::CashFlowSeries;
pub use compounding::{CompoundingProjection, ContributionPlan};
pub use error::{CalcError, CalcResult};
pub use irr::SolverConfig;
pub use scenario::ScenarioRunner;
pub use tax::TaxResult;
