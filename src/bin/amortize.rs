//! Amortization schedule CLI
//!
//! Computes the fixed installment for a financed amount and prints the
//! period-by-period schedule, optionally writing it to CSV.

use std::fs::File;
use std::io::Write;

use clap::Parser;

use fincalc::amortization::{build_schedule, PaymentTiming};

#[derive(Parser, Debug)]
#[command(name = "amortize", about = "Fixed-installment amortization schedule")]
struct Args {
    /// Amount financed
    principal: f64,

    /// Interest rate per period, in percent (1.2 = 1.2% per period)
    rate_pct: f64,

    /// Number of installments
    periods: u32,

    /// Payments fall due at the start of each period (annuity due)
    #[arg(long)]
    due: bool,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let timing = if args.due {
        PaymentTiming::Due
    } else {
        PaymentTiming::Ordinary
    };

    let schedule = build_schedule(args.principal, args.rate_pct / 100.0, args.periods, timing)?;
    let summary = schedule.summary();

    println!("Amount financed: R$ {:.2}", args.principal);
    println!("Installment: R$ {:.2}", schedule.payment);
    println!("Total paid: R$ {:.2}", summary.total_paid);
    println!("Total interest: R$ {:.2}", summary.total_interest);
    println!();

    println!(
        "{:>6} {:>14} {:>12} {:>14} {:>12} {:>14}",
        "Period", "Opening", "Interest", "Amortization", "Payment", "Closing"
    );
    println!("{}", "-".repeat(78));
    for record in schedule.records.iter().take(12) {
        println!(
            "{:>6} {:>14.2} {:>12.2} {:>14.2} {:>12.2} {:>14.2}",
            record.period,
            record.opening_balance,
            record.interest,
            record.principal_portion,
            record.payment,
            record.closing_balance,
        );
    }
    if schedule.records.len() > 12 {
        println!("... ({} more periods)", schedule.records.len() - 12);
    }

    if let Some(path) = args.output {
        let mut file = File::create(&path)?;
        writeln!(file, "Period,Opening,Interest,Amortization,Payment,Closing")?;
        for record in &schedule.records {
            writeln!(
                file,
                "{},{:.8},{:.8},{:.8},{:.8},{:.8}",
                record.period,
                record.opening_balance,
                record.interest,
                record.principal_portion,
                record.payment,
                record.closing_balance,
            )?;
        }
        println!("\nFull schedule written to: {}", path);
    }

    Ok(())
}
