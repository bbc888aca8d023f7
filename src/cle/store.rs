//! Durable homes for the movement log.
//!
//! The ledger hands every movement to its store before acknowledging it, and
//! rebuilds itself from [`MovementStore::load`] on start-up.

use crate::{Movement, Result};

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::Context;

use csv::{ReaderBuilder, WriterBuilder};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Movement store lock poisoned")]
    Poisoned,

    #[error("Cannot open journal {0:?}")]
    Open(PathBuf),

    #[error("Cannot cut journal back to {0} bytes after a failed write")]
    Rollback(u64),
}

pub trait MovementStore: Send + Sync {
    /// Records `movement`; must not return before the write is durable
    fn persist(&self, movement: &Movement) -> Result;

    /// Every persisted movement, oldest first
    fn load(&self) -> Result<Vec<Movement>>;
}

/// Keeps movements in process memory only
#[derive(Debug, Default)]
pub struct InMemoryStore {
    movements: Mutex<Vec<Movement>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `movements`, as if they had been persisted earlier
    pub fn with_movements(movements: Vec<Movement>) -> Self {
        Self {
            movements: Mutex::new(movements),
        }
    }
}

impl MovementStore for InMemoryStore {
    fn persist(&self, movement: &Movement) -> Result {
        self.movements
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .push(movement.clone());

        Ok(())
    }

    fn load(&self) -> Result<Vec<Movement>> {
        let movements = self.movements.lock().map_err(|_| StoreError::Poisoned)?;

        Ok(movements.clone())
    }
}

/// Append-only CSV file, one movement per record.
///
/// A record that could not be written and synced in full is cut off again, so
/// the file only ever holds acknowledged movements.
pub struct CsvJournal {
    path: PathBuf,
    file: Mutex<File>,
}

impl CsvJournal {
    /// Opens `path` for appending, creating it when missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| StoreError::Open(path.clone()))?;

        log::debug!("Opened movement journal {path:?} ({} bytes)", file.metadata()?.len());

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MovementStore for CsvJournal {
    fn persist(&self, movement: &Movement) -> Result {
        let mut file = self.file.lock().map_err(|_| StoreError::Poisoned)?;

        let start = file.metadata()?.len();

        // The header row is only written into a fresh file
        let record = encode(movement, start == 0)?;

        append_durably(&mut file, start, &record, File::sync_data)
    }

    fn load(&self) -> Result<Vec<Movement>> {
        let mut reader = ReaderBuilder::new().from_path(&self.path)?;

        let mut movements = vec![];

        for record in reader.deserialize::<Movement>() {
            movements.push(record?);
        }

        log::debug!("Loaded {} movements from {:?}", movements.len(), self.path);

        Ok(movements)
    }
}

fn encode(movement: &Movement, with_headers: bool) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(with_headers)
        .from_writer(vec![]);

    writer.serialize(movement)?;

    Ok(writer.into_inner()?)
}

/// Writes `record` at the end of `file` and syncs it, or truncates the file back to `start`
fn append_durably(
    file: &mut File,
    start: u64,
    record: &[u8],
    sync: impl FnOnce(&File) -> io::Result<()>,
) -> Result {
    let written = file.write_all(record).and_then(|()| sync(file));

    if let Err(err) = written {
        log::warn!("Journal write failed, cutting back to {start} bytes: {err}");

        file.set_len(start).with_context(|| StoreError::Rollback(start))?;

        Err(err)?
    }

    Ok(())
}
