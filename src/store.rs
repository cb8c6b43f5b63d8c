//! Durable map from grammar point key to `{bookmarked, completed}`.
//!
//! The in-memory map is authoritative for the session. Every mutation is
//! applied to it first and only then written through the backend, so reads
//! after a failed write still see the new value.

use crate::error::StoreError;
use crate::model::{GrammarPointKey, PointState, ProgressRecord};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::rc::Rc;

pub type ProgressMap = BTreeMap<GrammarPointKey, ProgressRecord>;

/// Storage medium for the serialized progress map.
pub trait ProgressBackend {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, contents: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Clear {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[derive(Debug, Default)]
struct MemoryCell {
    contents: Option<String>,
    reject_writes: bool,
    writes: usize,
}

/// Session-only storage. Clones share the same contents, so a clone kept
/// aside can reopen a store to simulate a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    cell: Rc<RefCell<MemoryCell>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        let backend = Self::default();
        backend.cell.borrow_mut().contents = Some(contents.into());
        backend
    }

    /// Makes subsequent writes and clears fail, as a full quota would.
    pub fn reject_writes(&self, reject: bool) {
        self.cell.borrow_mut().reject_writes = reject;
    }

    pub fn contents(&self) -> Option<String> {
        self.cell.borrow().contents.clone()
    }

    /// Number of accepted writes and clears.
    pub fn writes(&self) -> usize {
        self.cell.borrow().writes
    }
}

impl ProgressBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.cell.borrow().contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        let mut cell = self.cell.borrow_mut();
        if cell.reject_writes {
            return Err(StoreError::Rejected {
                reason: "quota exceeded".into(),
            });
        }
        cell.contents = Some(contents.to_string());
        cell.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let mut cell = self.cell.borrow_mut();
        if cell.reject_writes {
            return Err(StoreError::Rejected {
                reason: "storage is read-only".into(),
            });
        }
        cell.contents = None;
        cell.writes += 1;
        Ok(())
    }
}

pub struct ProgressStore {
    records: ProgressMap,
    backend: Box<dyn ProgressBackend>,
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl ProgressStore {
    /// Opens the store over `backend`. Missing, unreadable or corrupt data
    /// all yield an empty store; a corrupt copy is replaced on the next save.
    pub fn load(backend: Box<dyn ProgressBackend>) -> Self {
        let records = match backend.read() {
            Ok(Some(contents)) => match serde_json::from_str::<ProgressMap>(&contents) {
                Ok(records) => records,
                Err(e) => {
                    warn!("discarding corrupt progress data: {e}");
                    ProgressMap::new()
                }
            },
            Ok(None) => ProgressMap::new(),
            Err(e) => {
                warn!("starting with empty progress: {e}");
                ProgressMap::new()
            }
        };
        let mut store = Self { records, backend };
        // Stored pairs with both flags set predate the exclusivity rule.
        for record in store.records.values_mut() {
            *record = record.normalized(ProgressRecord::UNMARKED);
        }
        store.records.retain(|_, record| !record.is_unmarked());
        info!("loaded progress for {} grammar points", store.records.len());
        store
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryBackend::new()))
    }

    pub fn get(&self, key: &GrammarPointKey) -> ProgressRecord {
        self.records.get(key).copied().unwrap_or_default()
    }

    pub fn state(&self, key: &GrammarPointKey) -> PointState {
        self.get(key).state()
    }

    /// Replaces the record for `key`, resolving a both-flags record first.
    /// Returns the record actually stored.
    pub fn set(
        &mut self,
        key: &GrammarPointKey,
        record: ProgressRecord,
    ) -> Result<ProgressRecord, StoreError> {
        let stored = self.put(key, record);
        self.save()?;
        Ok(stored)
    }

    pub fn toggle_bookmark(&mut self, key: &GrammarPointKey) -> Result<ProgressRecord, StoreError> {
        let next = self.state(key).toggle_bookmark();
        self.set(key, next.record())
    }

    pub fn toggle_complete(&mut self, key: &GrammarPointKey) -> Result<ProgressRecord, StoreError> {
        let next = self.state(key).toggle_complete();
        self.set(key, next.record())
    }

    /// Clears every record. Callers must confirm with the user first.
    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        let cleared = self.records.len();
        self.records.clear();
        info!("reset all progress ({cleared} records)");
        self.backend.clear()
    }

    /// Clears the given keys and reports which of them held any state.
    pub fn reset_subset<'k>(
        &mut self,
        keys: impl IntoIterator<Item = &'k GrammarPointKey>,
    ) -> Result<BTreeSet<GrammarPointKey>, StoreError> {
        let changed: BTreeSet<GrammarPointKey> = keys
            .into_iter()
            .filter(|key| self.records.remove(*key).is_some())
            .cloned()
            .collect();
        if !changed.is_empty() {
            self.save()?;
        }
        Ok(changed)
    }

    /// In-memory update without persisting; batch callers call `save` once.
    pub(crate) fn put(&mut self, key: &GrammarPointKey, record: ProgressRecord) -> ProgressRecord {
        let stored = record.normalized(self.get(key));
        if stored.is_unmarked() {
            self.records.remove(key);
        } else {
            self.records.insert(key.clone(), stored);
        }
        stored
    }

    /// Writes the whole map through the backend.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.records)?;
        self.backend.write(&json).inspect_err(|e| {
            warn!("progress not persisted: {e}");
        })?;
        debug!("persisted {} progress records", self.records.len());
        Ok(())
    }

    pub fn records(&self) -> &ProgressMap {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
