//! Net present value of a cash-flow series

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// One sample of the NPV-vs-rate curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NpvPoint {
    /// Per-period discount rate
    pub rate: f64,

    /// Net present value of the series at that rate
    pub npv: f64,
}

/// Net present value of `flows` discounted at a per-period rate
///
/// Total for any rate other than -1, where the discount factor vanishes.
pub fn npv(flows: &[f64], rate: f64) -> f64 {
    flows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// NPV and its derivative with respect to the rate
pub(super) fn npv_and_derivative(flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in flows.iter().enumerate() {
        npv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            dnpv -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Sample the NPV curve at evenly spaced rates across a range
///
/// Used by the presentation layer to chart the curve and locate the zero
/// crossing visually. Both endpoints are included.
pub fn npv_curve(
    flows: &[f64],
    rate_range: (f64, f64),
    samples: usize,
) -> CalcResult<Vec<NpvPoint>> {
    let (lo, hi) = rate_range;
    if samples < 2 {
        return Err(CalcError::invalid_parameter(
            "samples",
            "curve needs at least 2 samples",
        ));
    }
    if lo >= hi {
        return Err(CalcError::invalid_parameter(
            "rate_range",
            format!("lower bound {} is not below upper bound {}", lo, hi),
        ));
    }

    let step = (hi - lo) / (samples - 1) as f64;
    Ok((0..samples)
        .map(|i| {
            let rate = lo + step * i as f64;
            NpvPoint {
                rate,
                npv: npv(flows, rate),
            }
        })
        .collect())
}
