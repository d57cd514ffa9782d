//! Ordered signed cash flows indexed by period

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// An ordered sequence of signed amounts, one per period
///
/// Period 0 is conventionally the initial outlay (negative) and later
/// periods the returns, but signs are unconstrained. At least two periods
/// are required for a rate of return to be well-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Wrap a flow vector, rejecting series shorter than two periods
    pub fn new(flows: Vec<f64>) -> CalcResult<Self> {
        if flows.len() < 2 {
            return Err(CalcError::degenerate_input(format!(
                "cash-flow series needs at least 2 periods, got {}",
                flows.len()
            )));
        }
        Ok(Self { flows })
    }

    /// Amounts in period order
    pub fn amounts(&self) -> &[f64] {
        &self.flows
    }

    /// Number of periods
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// True when the series holds no periods (unreachable via `new`)
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Undiscounted sum of all flows
    pub fn net_total(&self) -> f64 {
        self.flows.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_two_periods() {
        assert!(CashFlowSeries::new(vec![]).is_err());
        assert!(CashFlowSeries::new(vec![-100.0]).is_err());
        assert!(CashFlowSeries::new(vec![-100.0, 110.0]).is_ok());
    }

    #[test]
    fn test_net_total() {
        let series = CashFlowSeries::new(vec![-100.0, 60.0, 60.0]).unwrap();
        assert!((series.net_total() - 20.0).abs() < 1e-12);
        assert_eq!(series.len(), 3);
    }
}
