use super::*;
use crate::engine::{Aggregates, affected_ancestors, container_aggregates};
use crate::model::LevelName;

impl TrackerApp {
    /// Cached aggregates for a container; computed on the spot if the cache
    /// has no entry (a container outside the catalogue reads as empty).
    pub fn aggregates_for(&self, container: &ContainerId) -> Aggregates {
        self.aggregates
            .get(container)
            .copied()
            .unwrap_or_else(|| container_aggregates(&self.store, self.index.leaves(container)))
    }

    pub fn is_lesson_completed(&self, level: LevelName, lesson_num: u32) -> bool {
        self.aggregates_for(&ContainerId::Lesson { level, lesson_num })
            .all_complete
    }

    pub fn is_level_completed(&self, level: LevelName) -> bool {
        self.aggregates_for(&ContainerId::Level(level)).all_complete
    }

    /// Patches the owning lesson and level of `key` and rebuilds statistics.
    pub(crate) fn refresh_after_change(&mut self, key: &GrammarPointKey) {
        let affected = affected_ancestors(&self.index, &self.store, key);
        self.last_changed = affected.keys().copied().collect();
        self.aggregates.extend(affected);
        self.refresh_statistics();
    }

    pub(crate) fn refresh_all(&mut self) {
        self.aggregates = engine::recompute_all(&self.index, &self.store);
        self.last_changed = self.aggregates.keys().copied().collect();
        self.refresh_statistics();
    }

    fn refresh_statistics(&mut self) {
        self.stats = compute_statistics(&self.catalogue, &self.store, &self.policy);
    }
}
