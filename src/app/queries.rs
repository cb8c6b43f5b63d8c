use super::*;
use crate::model::{GrammarPoint, LevelName, PointState};

impl TrackerApp {
    pub fn grammar_point(
        &self,
        level: LevelName,
        lesson_num: u32,
        index: usize,
    ) -> Option<&GrammarPoint> {
        self.catalogue
            .lesson(level, lesson_num)?
            .grammar_points
            .get(index)
    }

    pub fn key_for(&self, level: LevelName, lesson_num: u32, index: usize) -> GrammarPointKey {
        GrammarPointKey::derive(level, lesson_num, index)
    }

    pub fn point_state(&self, key: &GrammarPointKey) -> PointState {
        self.store.state(key)
    }

    pub fn completed_in(&self, container: &ContainerId) -> usize {
        self.index
            .leaves(container)
            .iter()
            .filter(|key| self.store.get(key).completed)
            .count()
    }
}
