mod args;
mod config;
mod reader;
mod writer;

use cle::store::CsvJournal;
use cle::{Ledger, LedgerError, Result, SummaryReport};

use config::Settings;

fn main() -> Result {
    let settings = config::configure_app()?;

    log::debug!("Application configured: {settings:?}. Beginning process...");

    let ledger = build_ledger(&settings)?;

    process_data(&ledger)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&ledger)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// In-memory ledger, or one restored from and written through to the configured journal
fn build_ledger(settings: &Settings) -> Result<Ledger> {
    match &settings.journal {
        None => Ok(Ledger::new(settings.threshold)),
        Some(path) => {
            log::debug!("Restoring ledger from journal: {path:?}");
            let journal = CsvJournal::open(path)?;
            Ledger::restore(settings.threshold, Box::new(journal))
        }
    }
}

/// Read input file and append every movement it describes
fn process_data(ledger: &Ledger) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;

    for candidate in reader::read_candidates(&mut rdr) {
        log::debug!("Appending candidate to ledger: {candidate:?}");

        match ledger.append(&candidate) {
            Ok(movement) => log::debug!("Accepted as movement {}", movement.id),

            // Rejections are already logged by the ledger
            Err(e) => match e.downcast_ref::<LedgerError>() {
                Some(LedgerError::Validation(_) | LedgerError::InsufficientBalance { .. }) => {}
                _ => return Err(e),
            },
        }
    }

    Ok(())
}

/// Build report from the ledger, and write report to stdout
fn report_to_std_out(ledger: &Ledger) -> Result {
    let report = SummaryReport::build(ledger)?;

    let status = ledger.threshold_status()?;
    if status.exceeded {
        log::warn!(
            "Cash held ({}) is above the regulatory threshold ({})",
            status.total,
            status.threshold
        );
    }

    let output = writer::render_report(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{output}");

    Ok(())
}
