use cle::input::{MovementCandidate, MovementRow};
use cle::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)?;

    Ok(reader)
}

/// Reads every row as a candidate, logging and skipping rows that are not valid CSV
pub fn read_candidates(reader: &mut Reader<File>) -> Vec<MovementCandidate> {
    let mut candidates = vec![];

    for (line, record) in reader.deserialize::<MovementRow>().enumerate() {
        match record {
            Ok(row) => candidates.push(MovementCandidate::from(row)),
            Err(e) => log::warn!("Skipping unreadable row {}: {e}", line + 1),
        }
    }

    candidates
}
