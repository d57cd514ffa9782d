//! IRR solver CLI
//!
//! Loads a cash-flow series from CSV (`Period,Amount` rows), solves for the
//! per-period internal rate of return, and samples the NPV curve around it
//! for charting.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use serde::Serialize;

use fincalc::cashflow::load_cash_flows;
use fincalc::irr::{npv, npv_curve, solve_irr, SolverConfig};
use fincalc::rates::annualize;

#[derive(Parser, Debug)]
#[command(name = "irr_scan", about = "Internal rate of return from a cash-flow CSV")]
struct Args {
    /// CSV file with Period,Amount rows starting at period 0
    cashflows: PathBuf,

    /// Number of NPV curve samples
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Half-width of the NPV curve's rate window around the solved rate
    #[arg(long, default_value_t = 0.25)]
    curve_window: f64,

    /// Periods per year used to annualize the per-period rate
    #[arg(long, default_value_t = 12)]
    periods_per_year: u32,

    /// Write the sampled NPV curve to this CSV file
    #[arg(long)]
    curve_output: Option<PathBuf>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Machine-readable result for the dashboard layer
#[derive(Debug, Serialize)]
struct IrrReport {
    periods: usize,
    irr_per_period: f64,
    irr_annualized: f64,
    npv_at_irr: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let series = load_cash_flows(&args.cashflows)
        .map_err(|e| anyhow!("failed to load {}: {e}", args.cashflows.display()))?;

    let config = SolverConfig::default();
    let rate = solve_irr(series.amounts(), &config)?;

    let report = IrrReport {
        periods: series.len(),
        irr_per_period: rate,
        irr_annualized: annualize(rate, args.periods_per_year),
        npv_at_irr: npv(series.amounts(), rate),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Cash flows: {} periods", report.periods);
        println!("Net total (undiscounted): R$ {:.2}", series.net_total());
        println!("IRR: {:.4}% per period", report.irr_per_period * 100.0);
        println!(
            "IRR: {:.4}% annualized ({} periods/year)",
            report.irr_annualized * 100.0,
            args.periods_per_year
        );
        println!("NPV at IRR: {:.6}", report.npv_at_irr);
    }

    if let Some(path) = args.curve_output {
        let window = args.curve_window.abs().max(1e-6);
        let lo = (rate - window).max(-0.99);
        let curve = npv_curve(series.amounts(), (lo, rate + window), args.samples)?;

        let mut file = File::create(&path)?;
        writeln!(file, "Rate,NPV")?;
        for point in &curve {
            writeln!(file, "{:.8},{:.8}", point.rate, point.npv)?;
        }
        if !args.json {
            println!("NPV curve written to: {}", path.display());
        }
    }

    Ok(())
}
