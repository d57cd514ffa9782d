//! Cash-flow series input type and CSV loading

mod loader;
mod series;

pub use loader::{load_cash_flows, load_cash_flows_from_reader};
pub use series::CashFlowSeries;
