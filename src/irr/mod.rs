//! Internal rate of return solving and NPV curve sampling

mod npv;
mod solver;

pub use npv::{npv, npv_curve, NpvPoint};
pub use solver::solve_irr;

/// Configuration for the IRR root search
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Convergence tolerance on the per-period rate
    pub tolerance: f64,

    /// Iteration budget for each phase of the search
    pub max_iterations: u32,

    /// Lowest admissible per-period rate
    pub rate_floor: f64,

    /// Highest admissible per-period rate
    pub rate_ceiling: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
            rate_floor: -0.99,
            rate_ceiling: 100.0,
        }
    }
}
