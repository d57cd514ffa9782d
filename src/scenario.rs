//! Scenario runner for batch contribution simulations
//!
//! Pre-builds the withholding table once, then evaluates many plans or rate
//! variants without reconstructing it. Each run composes the projection
//! engine with the tax/inflation adjuster: one complete dashboard scenario
//! per call.

use serde::Serialize;

use crate::compounding::{project_with_contributions, CompoundingProjection, ContributionPlan};
use crate::rates::RegressiveTaxTable;
use crate::tax::{apply_with_table, TaxResult};

/// A fully evaluated contribution scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Plan that was simulated
    pub plan: ContributionPlan,

    /// Annual inflation assumption used for the real net value
    pub inflation_rate: f64,

    /// Month-by-month balances
    pub projection: CompoundingProjection,

    /// Tax and inflation netting of the gross result
    pub tax: TaxResult,
}

/// Pre-configured runner for evaluating contribution scenarios
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    tax_table: RegressiveTaxTable,
}

impl ScenarioRunner {
    /// Create a runner with the default fixed-income withholding table
    pub fn new() -> Self {
        Self {
            tax_table: RegressiveTaxTable::default_fixed_income(),
        }
    }

    /// Create a runner with a custom withholding table
    pub fn with_table(tax_table: RegressiveTaxTable) -> Self {
        Self { tax_table }
    }

    /// Simulate one plan and net the gross result for tax and inflation
    pub fn run(&self, plan: &ContributionPlan, inflation_rate: f64) -> ScenarioOutcome {
        let projection = project_with_contributions(plan);
        let tax = apply_with_table(
            &self.tax_table,
            projection.final_balance(),
            projection.total_invested(),
            plan.years,
            inflation_rate,
        );

        ScenarioOutcome {
            plan: *plan,
            inflation_rate,
            projection,
            tax,
        }
    }

    /// Evaluate several plans under one inflation assumption
    pub fn run_batch(
        &self,
        plans: &[ContributionPlan],
        inflation_rate: f64,
    ) -> Vec<ScenarioOutcome> {
        plans.iter().map(|plan| self.run(plan, inflation_rate)).collect()
    }

    /// Evaluate one plan across a grid of nominal annual rates
    pub fn sweep_rates(
        &self,
        base: &ContributionPlan,
        annual_rates: &[f64],
        inflation_rate: f64,
    ) -> Vec<ScenarioOutcome> {
        annual_rates
            .iter()
            .map(|&annual_rate| {
                let plan = ContributionPlan {
                    annual_rate,
                    ..*base
                };
                self.run(&plan, inflation_rate)
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_plan() -> ContributionPlan {
        ContributionPlan::new(10_000.0, 500.0, 0.08, 10.0).unwrap()
    }

    #[test]
    fn test_run_nets_the_projection_gross() {
        let runner = ScenarioRunner::new();
        let outcome = runner.run(&test_plan(), 0.035);

        assert_relative_eq!(
            outcome.tax.gross,
            outcome.projection.final_balance(),
            epsilon = 1e-9
        );
        // 10 years of gains: long-term aliquot, net below gross, real below net
        assert_eq!(outcome.tax.aliquot, 0.15);
        assert!(outcome.tax.net < outcome.tax.gross);
        assert!(outcome.tax.real_net < outcome.tax.net);
    }

    #[test]
    fn test_sweep_rates_orders_outcomes() {
        let runner = ScenarioRunner::new();
        let outcomes = runner.sweep_rates(&test_plan(), &[0.04, 0.08, 0.12], 0.0);

        assert_eq!(outcomes.len(), 3);
        assert!(
            outcomes[2].projection.final_balance() > outcomes[0].projection.final_balance()
        );
        // Same contributions regardless of rate
        assert_relative_eq!(
            outcomes[0].projection.total_invested(),
            outcomes[2].projection.total_invested(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let plans = vec![
            ContributionPlan::new(1_000.0, 0.0, 0.05, 1.0).unwrap(),
            ContributionPlan::new(2_000.0, 0.0, 0.05, 1.0).unwrap(),
        ];

        let outcomes = runner.run_batch(&plans, 0.0);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[1].projection.final_balance() > outcomes[0].projection.final_balance());
    }
}
