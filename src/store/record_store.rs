//! Random-access standings store
//!
//! `RecordStore` wraps the binary standings file and exposes record-level
//! reads and in-place writes. The file must already exist; use
//! [`RecordStore::initialize`] once to seed it.
//!
//! # Transactions
//!
//! Callers scope one read or one read-modify-write cycle per open/close pair.
//! The handle is released on `close()` or when the store is dropped, so early
//! returns through `?` never leak it.
//!
//! # Concurrency
//!
//! There is no locking. Two processes updating the same file concurrently
//! can lose updates.

use crate::store::layout::{
    decode_record, encode_record, record_offset, RECORD_SIZE, STORE_SIZE,
};
use crate::types::{StandingsError, TeamId, TeamRecord, TEAM_COUNT};
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Binary standings file opened for reading and writing
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    file: Option<File>,
}

impl RecordStore {
    /// Open an existing store
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `path` does not exist; the file is never created here.
    pub fn open(path: &Path) -> Result<Self, StandingsError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| StandingsError::from_open(e, path))?;

        debug!(path = %path.display(), "opened standings store");

        Ok(RecordStore {
            path: path.to_path_buf(),
            file: Some(file),
        })
    }

    /// Create a seeded store with one zeroed record per team
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` rather than overwriting an existing file.
    pub fn initialize(path: &Path) -> Result<(), StandingsError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| StandingsError::from_open(e, path))?;

        let mut contents = Vec::with_capacity(STORE_SIZE as usize);
        for team_id in 1..=TEAM_COUNT as TeamId {
            contents.extend_from_slice(&encode_record(&TeamRecord::new(team_id))?);
        }
        file.write_all(&contents)?;
        file.sync_all()?;

        info!(path = %path.display(), teams = TEAM_COUNT, "initialized standings store");
        Ok(())
    }

    /// Path this store was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of whole records in the file
    pub fn record_count(&mut self) -> Result<usize, StandingsError> {
        let len = self.file()?.metadata()?.len();
        Ok((len / RECORD_SIZE as u64) as usize)
    }

    /// Read the record at a zero-based index (`team_id - 1`)
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if no whole record exists at `index`
    /// - `CorruptData` if the stored team ID does not equal `index + 1`
    pub fn read_record(&mut self, index: usize) -> Result<TeamRecord, StandingsError> {
        if index >= self.record_count()? {
            return Err(StandingsError::out_of_range(index as i64));
        }

        let file = self.file()?;
        file.seek(SeekFrom::Start(record_offset(index)))?;

        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact(&mut buf)?;

        decode_record(index, &buf)
    }

    /// Read every record in ascending index order, keyed by team ID
    pub fn read_all(&mut self) -> Result<BTreeMap<TeamId, TeamRecord>, StandingsError> {
        let count = self.record_count()?;

        (0..count)
            .map(|index| {
                self.read_record(index)
                    .map(|record| (record.team_id, record))
            })
            .collect()
    }

    /// Overwrite the record at a zero-based index in place
    ///
    /// Writes exactly one record. A crash mid-write can corrupt that record;
    /// no recovery is attempted.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is past the last record
    /// - `CorruptData` if `record.team_id` does not belong at `index`
    pub fn write_record(
        &mut self,
        index: usize,
        record: &TeamRecord,
    ) -> Result<(), StandingsError> {
        if index >= self.record_count()? {
            return Err(StandingsError::out_of_range(index as i64));
        }
        if record.team_id as usize != index + 1 {
            return Err(StandingsError::corrupt(
                index,
                format!("refusing to write team {} here", record.team_id),
            ));
        }

        let buf = encode_record(record)?;
        let file = self.file()?;
        file.seek(SeekFrom::Start(record_offset(index)))?;
        file.write_all(&buf)?;
        file.flush()?;

        debug!(
            team_id = record.team_id,
            wins = record.wins,
            losses = record.losses,
            losses_ot = record.losses_ot,
            "wrote standings record"
        );
        Ok(())
    }

    /// Release the file handle
    ///
    /// Safe to call more than once.
    pub fn close(&mut self) -> Result<(), StandingsError> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
            debug!(path = %self.path().display(), "closed standings store");
        }
        Ok(())
    }

    fn file(&mut self) -> Result<&mut File, StandingsError> {
        self.file.as_mut().ok_or_else(|| StandingsError::Io {
            message: format!("store '{}' is closed", self.path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    /// Helper function to create a seeded store in a scratch directory
    fn seeded_store() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("standings.bin");
        RecordStore::initialize(&path).expect("Failed to seed store");
        (dir, path)
    }

    #[test]
    fn test_open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let result = RecordStore::open(&path);
        assert_eq!(result.unwrap_err(), StandingsError::not_found(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_initialize_writes_zeroed_records() {
        let (_dir, path) = seeded_store();
        assert_eq!(fs::metadata(&path).unwrap().len(), STORE_SIZE);

        let mut store = RecordStore::open(&path).unwrap();
        let records = store.read_all().unwrap();
        store.close().unwrap();

        assert_eq!(records.len(), TEAM_COUNT);
        for (team_id, record) in records {
            assert_eq!(record, TeamRecord::new(team_id));
        }
    }

    #[test]
    fn test_initialize_refuses_existing_file() {
        let (_dir, path) = seeded_store();
        let before = fs::read(&path).unwrap();

        let result = RecordStore::initialize(&path);
        assert!(matches!(result, Err(StandingsError::AlreadyExists { .. })));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[rstest]
    #[case::first(1)]
    #[case::middle(11)]
    #[case::last(30)]
    fn test_write_then_read_round_trip(#[case] team_id: TeamId) {
        let (_dir, path) = seeded_store();
        let record = TeamRecord {
            team_id,
            wins: 12,
            losses: 7,
            losses_ot: 3,
        };
        let index = team_id as usize - 1;

        let mut store = RecordStore::open(&path).unwrap();
        store.write_record(index, &record).unwrap();
        store.close().unwrap();

        let mut store = RecordStore::open(&path).unwrap();
        assert_eq!(store.read_record(index).unwrap(), record);
    }

    #[test]
    fn test_write_touches_only_one_record() {
        let (_dir, path) = seeded_store();
        let before = fs::read(&path).unwrap();

        let mut store = RecordStore::open(&path).unwrap();
        let record = TeamRecord {
            team_id: 5,
            wins: 1,
            losses: 0,
            losses_ot: 0,
        };
        store.write_record(4, &record).unwrap();
        store.close().unwrap();

        let after = fs::read(&path).unwrap();
        let changed = record_offset(4) as usize..record_offset(5) as usize;
        assert_eq!(before.len(), after.len());
        assert_eq!(&before[..changed.start], &after[..changed.start]);
        assert_eq!(&before[changed.end..], &after[changed.end..]);
        assert_ne!(&before[changed.clone()], &after[changed]);
    }

    #[rstest]
    #[case::past_end(30)]
    #[case::far_past_end(1000)]
    fn test_read_out_of_range(#[case] index: usize) {
        let (_dir, path) = seeded_store();
        let mut store = RecordStore::open(&path).unwrap();
        assert_eq!(
            store.read_record(index),
            Err(StandingsError::out_of_range(index as i64))
        );
    }

    #[test]
    fn test_write_out_of_range() {
        let (_dir, path) = seeded_store();
        let mut store = RecordStore::open(&path).unwrap();
        let result = store.write_record(30, &TeamRecord::new(31));
        assert_eq!(result, Err(StandingsError::out_of_range(30i64)));
        assert_eq!(fs::metadata(&path).unwrap().len(), STORE_SIZE);
    }

    #[test]
    fn test_write_rejects_misplaced_record() {
        let (_dir, path) = seeded_store();
        let mut store = RecordStore::open(&path).unwrap();
        let result = store.write_record(0, &TeamRecord::new(2));
        assert!(matches!(result, Err(StandingsError::CorruptData { index: 0, .. })));
    }

    #[test]
    fn test_read_detects_corrupt_team_id() {
        let (_dir, path) = seeded_store();
        let mut bytes = fs::read(&path).unwrap();
        bytes[..4].copy_from_slice(&9i32.to_be_bytes());
        fs::write(&path, bytes).unwrap();

        let mut store = RecordStore::open(&path).unwrap();
        assert!(matches!(
            store.read_record(0),
            Err(StandingsError::CorruptData { index: 0, .. })
        ));
    }

    #[test]
    fn test_read_all_ignores_trailing_partial_record() {
        let (_dir, path) = seeded_store();
        let mut bytes = fs::read(&path).unwrap();
        bytes.extend_from_slice(&[0u8; RECORD_SIZE - 1]);
        fs::write(&path, bytes).unwrap();

        let mut store = RecordStore::open(&path).unwrap();
        assert_eq!(store.record_count().unwrap(), TEAM_COUNT);
        assert_eq!(store.read_all().unwrap().len(), TEAM_COUNT);
    }

    #[test]
    fn test_read_all_is_ordered_by_team() {
        let (_dir, path) = seeded_store();
        let mut store = RecordStore::open(&path).unwrap();
        let ids: Vec<TeamId> = store.read_all().unwrap().into_keys().collect();
        assert_eq!(ids, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_close_is_idempotent() {
        let (_dir, path) = seeded_store();
        let mut store = RecordStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        assert!(store.close().is_ok());
        assert!(store.close().is_ok());
        assert!(matches!(
            store.read_record(0),
            Err(StandingsError::Io { .. })
        ));
    }
}
