//! Rate comparison CLI
//!
//! Evaluates one contribution plan across a grid of nominal annual rates in
//! parallel and prints a comparative table of gross, net, and real results.

use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;

use fincalc::compounding::ContributionPlan;
use fincalc::scenario::ScenarioRunner;

#[derive(Parser, Debug)]
#[command(name = "compare_scenarios", about = "Compare contribution outcomes across rates")]
struct Args {
    /// Initial principal
    #[arg(long, default_value_t = 10_000.0)]
    principal: f64,

    /// Monthly contribution
    #[arg(long, default_value_t = 500.0)]
    monthly: f64,

    /// Horizon in years
    #[arg(long, default_value_t = 10.0)]
    years: f64,

    /// Annual inflation assumption
    #[arg(long, default_value_t = 0.035)]
    inflation: f64,

    /// Nominal annual rates to compare, comma separated
    #[arg(long, value_delimiter = ',', default_value = "0.04,0.06,0.08,0.10,0.12")]
    rates: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let base = ContributionPlan::new(args.principal, args.monthly, 0.0, args.years)?;
    let runner = ScenarioRunner::new();

    let start = Instant::now();
    let outcomes: Vec<_> = args
        .rates
        .par_iter()
        .map(|&annual_rate| {
            let plan = ContributionPlan { annual_rate, ..base };
            runner.run(&plan, args.inflation)
        })
        .collect();
    let elapsed = start.elapsed();

    println!(
        "Plan: R$ {:.2} + R$ {:.2}/month over {:.0} years, inflation {:.2}%",
        args.principal,
        args.monthly,
        args.years,
        args.inflation * 100.0
    );
    println!();
    println!(
        "{:>8} {:>16} {:>16} {:>16} {:>16}",
        "Rate", "Invested", "Gross", "Net", "Real net"
    );
    println!("{}", "-".repeat(76));

    for outcome in &outcomes {
        println!(
            "{:>7.2}% {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            outcome.plan.annual_rate * 100.0,
            outcome.projection.total_invested(),
            outcome.projection.final_balance(),
            outcome.tax.net,
            outcome.tax.real_net,
        );
    }

    println!(
        "\n{} scenarios evaluated in {:?}",
        outcomes.len(),
        elapsed
    );

    Ok(())
}
