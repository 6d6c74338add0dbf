use serde::Serialize;

use die_session::render_report;
use die_stats::{ChiSquaredResult, CriticalValues, Die, FrequencyTable, Verdict};

#[derive(Serialize)]
struct Summary<'a> {
    die: String,
    rolls: u32,
    counts: &'a [u32],
    critical_values: CriticalValues,
    #[serde(flatten)]
    result: &'a ChiSquaredResult,
    verdict: Verdict,
}

pub fn run(die: Die, rolls: &[u32], json: bool) -> Result<(), String> {
    let table = FrequencyTable::from_rolls(die, rolls).map_err(|e| e.to_string())?;
    let result = table.chi_squared().map_err(|e| e.to_string())?;
    log::info!("analyzed {} rolls of a {die}", table.total());

    if json {
        let summary = Summary {
            die: die.to_string(),
            rolls: table.total(),
            counts: table.counts(),
            critical_values: die.critical_values(),
            result: &result,
            verdict: result.verdict(die),
        };
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print!("{}", render_report(&table, &result));
    }

    Ok(())
}
