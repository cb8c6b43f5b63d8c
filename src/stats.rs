use crate::model::{Catalogue, GrammarPointKey, LevelName};
use crate::store::ProgressStore;
use std::collections::{BTreeMap, BTreeSet};

/// Which levels count toward the "levels completed" total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelPolicy {
    counted: BTreeSet<LevelName>,
}

impl LevelPolicy {
    pub fn new(counted: impl IntoIterator<Item = LevelName>) -> Self {
        Self {
            counted: counted.into_iter().collect(),
        }
    }

    /// Every level, catch-all buckets included.
    pub fn all_levels() -> Self {
        Self::new(LevelName::ALL)
    }

    pub fn is_counted_level(&self, level: LevelName) -> bool {
        self.counted.contains(&level)
    }
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self::new(LevelName::ALL.into_iter().filter(|l| l.is_curriculum()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub lessons: usize,
    pub completed_lessons: usize,
    pub grammar_points: usize,
    pub completed: usize,
    pub bookmarked: usize,
    /// Whether the policy counts this level toward the level totals.
    pub counted: bool,
}

impl LevelStats {
    pub fn is_complete(&self) -> bool {
        self.grammar_points > 0 && self.completed == self.grammar_points
    }

    pub fn completion_ratio(&self) -> f32 {
        ratio(self.completed, self.grammar_points)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    pub per_level: BTreeMap<LevelName, LevelStats>,
    pub total_levels: usize,
    pub completed_levels: usize,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    pub total_grammar_points: usize,
    pub completed_grammar_points: usize,
    pub bookmarked_grammar_points: usize,
}

impl StatisticsSnapshot {
    pub fn level(&self, level: LevelName) -> Option<&LevelStats> {
        self.per_level.get(&level)
    }

    pub fn completion_ratio(&self) -> f32 {
        ratio(self.completed_grammar_points, self.total_grammar_points)
    }
}

fn ratio(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        0.0
    } else {
        part as f32 / whole as f32
    }
}

/// Single pass over the catalogue. Levels the catalogue lacks contribute
/// nothing; lesson and grammar point totals include every level, level
/// totals only those the policy counts.
pub fn compute_statistics(
    catalogue: &Catalogue,
    store: &ProgressStore,
    policy: &LevelPolicy,
) -> StatisticsSnapshot {
    let mut snapshot = StatisticsSnapshot::default();

    for (level, lessons) in catalogue.levels() {
        let mut stats = LevelStats {
            lessons: lessons.len(),
            counted: policy.is_counted_level(level),
            ..LevelStats::default()
        };

        for lesson in lessons {
            let mut lesson_completed = 0;
            for index in 0..lesson.grammar_points.len() {
                let record = store.get(&GrammarPointKey::derive(level, lesson.lesson_num, index));
                if record.completed {
                    lesson_completed += 1;
                }
                if record.bookmarked {
                    stats.bookmarked += 1;
                }
            }
            let points = lesson.grammar_points.len();
            if points > 0 && lesson_completed == points {
                stats.completed_lessons += 1;
            }
            stats.grammar_points += points;
            stats.completed += lesson_completed;
        }

        snapshot.total_lessons += stats.lessons;
        snapshot.completed_lessons += stats.completed_lessons;
        snapshot.total_grammar_points += stats.grammar_points;
        snapshot.completed_grammar_points += stats.completed;
        snapshot.bookmarked_grammar_points += stats.bookmarked;
        if stats.counted {
            snapshot.total_levels += 1;
            if stats.is_complete() {
                snapshot.completed_levels += 1;
            }
        }
        snapshot.per_level.insert(level, stats);
    }

    snapshot
}
