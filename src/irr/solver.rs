//! Root solver for the internal rate of return
//!
//! Newton-Raphson with an analytic NPV derivative, falling back to a
//! bracketing scan plus bisection when Newton stalls or walks out of the
//! admissible rate range. Both phases are bounded by the configured
//! iteration budget so a call always terminates.

use super::npv::{npv, npv_and_derivative};
use super::SolverConfig;
use crate::error::{CalcError, CalcResult};

/// Number of scan points used to bracket a root across the rate range
const BRACKET_SCAN_POINTS: usize = 128;

/// Solve for the per-period rate at which the series' NPV is zero
///
/// Fails with `DegenerateInput` for series shorter than two periods and
/// with `NoConvergence` when the flows have no sign change, no bracket
/// exists inside the configured range, or the iteration budget runs out.
pub fn solve_irr(flows: &[f64], config: &SolverConfig) -> CalcResult<f64> {
    if flows.len() < 2 {
        return Err(CalcError::degenerate_input(format!(
            "IRR needs at least 2 cash flows, got {}",
            flows.len()
        )));
    }

    // Without both an inflow and an outflow the NPV never crosses zero
    let has_positive = flows.iter().any(|&cf| cf > 1e-10);
    let has_negative = flows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return Err(CalcError::no_convergence(0, npv(flows, 0.0).abs()));
    }

    // Residuals are judged relative to the size of the flows
    let scale = flows
        .iter()
        .fold(0.0_f64, |acc, &cf| acc.max(cf.abs()))
        .max(1.0);

    let mut rate = 0.05;
    for iteration in 0..config.max_iterations {
        let (value, derivative) = npv_and_derivative(flows, rate);

        if derivative.abs() < 1e-20 {
            log::warn!("flat NPV derivative at rate {rate}, switching to bisection");
            return bisect(flows, config, scale);
        }

        let next = (rate - value / derivative)
            .clamp(config.rate_floor, config.rate_ceiling);
        log::debug!("newton iteration {iteration}: rate {rate} -> {next}");

        if (next - rate).abs() < config.tolerance {
            let residual = npv(flows, next);
            if residual.abs() <= 1e-6 * scale {
                return Ok(next);
            }
            // Converged onto a clamped bound rather than a root
            log::warn!("newton stalled at rate {next}, switching to bisection");
            return bisect(flows, config, scale);
        }

        rate = next;
    }

    log::warn!("newton budget exhausted, switching to bisection");
    bisect(flows, config, scale)
}

/// Bisection refinement over a bracket found by scanning the rate range
fn bisect(flows: &[f64], config: &SolverConfig, scale: f64) -> CalcResult<f64> {
    let (mut lo, mut hi) = find_bracket(flows, config).ok_or_else(|| {
        CalcError::no_convergence(config.max_iterations, npv(flows, 0.0).abs())
    })?;

    let mut npv_lo = npv(flows, lo);
    for _ in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let npv_mid = npv(flows, mid);

        if npv_mid.abs() <= config.tolerance * scale || (hi - lo) / 2.0 < config.tolerance {
            return Ok(mid);
        }

        if npv_mid * npv_lo < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            npv_lo = npv_mid;
        }
    }

    let mid = (lo + hi) / 2.0;
    Err(CalcError::no_convergence(
        config.max_iterations,
        npv(flows, mid).abs(),
    ))
}

/// Scan the admissible range for a pair of rates with opposite NPV signs
fn find_bracket(flows: &[f64], config: &SolverConfig) -> Option<(f64, f64)> {
    let step = (config.rate_ceiling - config.rate_floor) / BRACKET_SCAN_POINTS as f64;

    let mut prev_rate = config.rate_floor;
    let mut prev_npv = npv(flows, prev_rate);

    for i in 1..=BRACKET_SCAN_POINTS {
        let rate = config.rate_floor + step * i as f64;
        let value = npv(flows, rate);

        if prev_npv * value <= 0.0 {
            return Some((prev_rate, rate));
        }
        prev_rate = rate;
        prev_npv = value;
    }

    None
}
