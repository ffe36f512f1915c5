use crate::error::{TrackerError, TrackerResult};
use crate::models::Record;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Row-oriented storage with whole-table overwrite semantics.
///
/// Rows have no identity beyond their position, so `delete_at` shifts every
/// later row down by one.
pub trait Table<R>: Send + Sync {
    /// All rows in storage order. Storage that does not exist yet is empty.
    fn load(&self) -> TrackerResult<Vec<R>>;

    /// Replaces the entire table with `rows`.
    fn save(&self, rows: &[R]) -> TrackerResult<()>;

    fn append(&self, row: R) -> TrackerResult<()> {
        let mut rows = self.load()?;
        rows.push(row);
        self.save(&rows)
    }

    /// Removes the row at `index`. Returns `false` and leaves storage
    /// untouched when the index is out of range.
    fn delete_at(&self, index: usize) -> TrackerResult<bool> {
        let mut rows = self.load()?;
        if index >= rows.len() {
            debug!(index, len = rows.len(), "Delete index out of range, ignoring");
            return Ok(false);
        }
        rows.remove(index);
        self.save(&rows)?;
        Ok(true)
    }
}

/// Comma-separated file with a mandatory header row.
pub struct CsvTable<R> {
    path: PathBuf,
    _row: PhantomData<fn() -> R>,
}

impl<R> CsvTable<R> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _row: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R> CsvTable<R>
where
    R: Record + Serialize,
{
    fn write_to(&self, temp_path: &Path, rows: &[R]) -> TrackerResult<()> {
        let file = File::create(temp_path)?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        wtr.write_record(R::HEADER)?;
        for row in rows {
            wtr.serialize(row)?;
        }

        let file = wtr.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}

impl<R> Table<R> for CsvTable<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    fn load(&self) -> TrackerResult<Vec<R>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let rows = rdr.deserialize().collect::<Result<Vec<R>, _>>()?;
        Ok(rows)
    }

    /// Writes `{name}.tmp`, syncs it, then renames it over the table file so
    /// readers never observe a half-written table.
    fn save(&self, rows: &[R]) -> TrackerResult<()> {
        let temp_path = self.path.with_extension("tmp");

        if let Err(e) = self.write_to(&temp_path, rows) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &self.path)?;
        debug!(path = ?self.path, rows = rows.len(), "Table saved");
        Ok(())
    }
}

/// In-process table with the same semantics as [`CsvTable`].
pub struct MemoryTable<R> {
    rows: Mutex<Vec<R>>,
}

impl<R> MemoryTable<R> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<R>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

impl<R> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Table<R> for MemoryTable<R>
where
    R: Clone + Send,
{
    fn load(&self) -> TrackerResult<Vec<R>> {
        let rows = self.rows.lock().map_err(|_| TrackerError::Poisoned)?;
        Ok(rows.clone())
    }

    fn save(&self, rows: &[R]) -> TrackerResult<()> {
        let mut guard = self.rows.lock().map_err(|_| TrackerError::Poisoned)?;
        *guard = rows.to_vec();
        Ok(())
    }
}
