//! Fincalc CLI
//!
//! Demo run of the contribution simulator: projects a reference plan,
//! prints the first year month by month plus the yearly roll-up, and writes
//! the full projection to CSV for the dashboard layer.

use std::fs::File;
use std::io::Write;

use fincalc::compounding::ContributionPlan;
use fincalc::scenario::ScenarioRunner;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Fincalc v0.1.0");
    println!("==============\n");

    // Reference plan: 10k principal, 500/month, 8% a.a. over 10 years,
    // 3.5% estimated inflation
    let plan = ContributionPlan::new(10_000.0, 500.0, 0.08, 10.0)?;
    let inflation_rate = 0.035;

    println!("Plan:");
    println!("  Principal: R$ {:.2}", plan.principal);
    println!("  Monthly contribution: R$ {:.2}", plan.monthly_contribution);
    println!("  Nominal rate: {:.2}% a.a.", plan.annual_rate * 100.0);
    println!("  Horizon: {:.0} years", plan.years);
    println!("  Inflation: {:.2}% a.a.", inflation_rate * 100.0);
    println!();

    let runner = ScenarioRunner::new();
    let outcome = runner.run(&plan, inflation_rate);

    // First year month by month
    println!("{:>5} {:>5} {:>14}", "Month", "Year", "Balance");
    println!("{}", "-".repeat(26));
    for row in outcome.projection.rows.iter().take(12) {
        println!("{:>5} {:>5} {:>14.2}", row.month, row.year, row.balance);
    }
    if outcome.projection.rows.len() > 12 {
        println!("... ({} more months)", outcome.projection.rows.len() - 12);
    }

    // Yearly roll-up
    println!("\n{:>5} {:>16} {:>16} {:>14}", "Year", "Invested", "Balance", "Gain");
    println!("{}", "-".repeat(54));
    for year in outcome.projection.yearly_summary() {
        println!(
            "{:>5} {:>16.2} {:>16.2} {:>14.2}",
            year.year, year.total_invested, year.balance, year.gross_gain
        );
    }

    // Write full monthly projection to CSV
    let csv_path = "simulation_output.csv";
    let mut file = File::create(csv_path)?;
    writeln!(file, "Month,Year,Balance")?;
    for row in &outcome.projection.rows {
        writeln!(file, "{},{},{:.8}", row.month, row.year, row.balance)?;
    }
    println!("\nFull projection written to: {}", csv_path);

    // Net result
    let summary = outcome.projection.summary();
    println!("\nSummary:");
    println!("  Total invested: R$ {:.2}", summary.total_invested);
    println!("  Gross final value: R$ {:.2}", summary.gross_final);
    println!("  Withholding aliquot: {:.1}%", outcome.tax.aliquot * 100.0);
    println!("  Tax: R$ {:.2}", outcome.tax.tax);
    println!("  Net final value: R$ {:.2}", outcome.tax.net);
    println!("  Real net (deflated): R$ {:.2}", outcome.tax.real_net);
    println!(
        "  Net gain after tax: R$ {:.2}",
        outcome.tax.net_gain_over(summary.total_invested)
    );

    Ok(())
}
