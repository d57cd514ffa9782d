//! Load cash-flow series from CSV files

use std::error::Error;
use std::path::Path;

use csv::Reader;

use super::CashFlowSeries;

/// Raw CSV row: `Period,Amount`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Amount")]
    amount: f64,
}

/// Load a cash-flow series from a CSV file
///
/// Rows must start at period 0 and be contiguous.
pub fn load_cash_flows<P: AsRef<Path>>(path: P) -> Result<CashFlowSeries, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    collect_flows(reader)
}

/// Load a cash-flow series from any reader (string buffer, network stream)
pub fn load_cash_flows_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<CashFlowSeries, Box<dyn Error>> {
    collect_flows(Reader::from_reader(reader))
}

fn collect_flows<R: std::io::Read>(
    mut reader: Reader<R>,
) -> Result<CashFlowSeries, Box<dyn Error>> {
    let mut flows = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        if row.period as usize != flows.len() {
            return Err(format!(
                "expected period {}, found period {}",
                flows.len(),
                row.period
            )
            .into());
        }
        flows.push(row.amount);
    }

    Ok(CashFlowSeries::new(flows)?)
}
