use crate::config::TrackerConfig;
use crate::data::{read_catalogue_embedded, read_catalogue_file};
use crate::engine::{self, AggregateMap};
use crate::gesture::HoldTracker;
use crate::index::CatalogueIndex;
use crate::model::{AppState, Catalogue, ContainerId, GrammarPointKey};
use crate::stats::{LevelPolicy, StatisticsSnapshot, compute_statistics};
use crate::store::{FileBackend, MemoryBackend, ProgressBackend, ProgressStore};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

pub mod actions;
pub mod completion;
pub mod queries;
pub mod resets;
pub mod view_models;

pub use crate::view_models::{LessonInfo, LevelInfo, PointRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulkAction {
    Complete,
    Reset,
}

/// A hold button on a container header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoldTarget {
    pub container: ContainerId,
    pub action: BulkAction,
}

/// Gestures collected while drawing a frame, applied once drawing is done.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleBookmark(GrammarPointKey),
    ToggleComplete(GrammarPointKey),
    ShowView(AppState),
    RequestReset,
    SetDarkMode(bool),
}

#[derive(Debug, Default)]
pub struct FrameInput {
    pub actions: Vec<UiAction>,
    /// Hold button under a pressed pointer this frame, if any.
    pub pressed: Option<HoldTarget>,
}

/// UI preferences kept in eframe storage. Progress lives in the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViewPrefs {
    pub dark_mode: bool,
    pub view: AppState,
}

impl Default for ViewPrefs {
    fn default() -> Self {
        Self {
            dark_mode: true,
            view: AppState::Tree,
        }
    }
}

pub struct TrackerApp {
    pub catalogue: Catalogue,
    pub index: CatalogueIndex,
    pub store: ProgressStore,
    pub policy: LevelPolicy,
    /// Engine output, patched per change. Never read back as a source of truth.
    pub aggregates: AggregateMap,
    pub stats: StatisticsSnapshot,
    pub holds: HoldTracker<HoldTarget>,
    pub prefs: ViewPrefs,
    pub state: AppState,
    pub message: String,
    pub confirm_reset: bool,
    /// Containers repainted by the last change.
    pub last_changed: BTreeSet<ContainerId>,
}

impl TrackerApp {
    pub fn new(
        catalogue: Catalogue,
        store: ProgressStore,
        policy: LevelPolicy,
        hold_duration: Duration,
    ) -> Self {
        let index = CatalogueIndex::build(&catalogue);
        let aggregates = engine::recompute_all(&index, &store);
        let stats = compute_statistics(&catalogue, &store, &policy);
        Self {
            catalogue,
            index,
            store,
            policy,
            aggregates,
            stats,
            holds: HoldTracker::new(hold_duration),
            prefs: ViewPrefs::default(),
            state: AppState::Tree,
            message: String::new(),
            confirm_reset: false,
            last_changed: BTreeSet::new(),
        }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        let catalogue = match &config.catalogue_path {
            Some(path) => read_catalogue_file(path),
            None => read_catalogue_embedded(),
        };
        let backend: Box<dyn ProgressBackend> = match &config.progress_path {
            Some(path) => Box::new(FileBackend::new(path)),
            None => {
                info!("no progress file configured, progress is kept for this session only");
                Box::new(MemoryBackend::new())
            }
        };

        match catalogue {
            Ok(catalogue) => {
                info!(
                    "catalogue ready: {} levels, {} grammar points",
                    catalogue.levels().count(),
                    catalogue.grammar_point_count()
                );
                let store = ProgressStore::load(backend);
                Self::new(catalogue, store, config.policy(), config.hold_duration())
            }
            Err(e) => {
                error!("could not load grammar data: {e}");
                let mut app = Self::new(
                    Catalogue::default(),
                    ProgressStore::in_memory(),
                    config.policy(),
                    config.hold_duration(),
                );
                app.state = AppState::LoadFailed;
                app.message = format!("Error loading grammar data: {e}");
                app
            }
        }
    }

    /// Applies preferences saved by a previous run.
    pub fn restore_prefs(&mut self, prefs: ViewPrefs) {
        if self.state != AppState::LoadFailed && prefs.view != AppState::LoadFailed {
            self.state = prefs.view;
        }
        self.prefs = prefs;
    }
}
