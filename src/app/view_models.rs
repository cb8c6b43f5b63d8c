use super::*;
use crate::model::LevelName;

impl TrackerApp {
    /// Rows for the whole tree, in display order. Badges come from the
    /// aggregate cache, per-point state from the store.
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        self.catalogue
            .levels()
            .map(|(level, lessons)| {
                let lessons = lessons
                    .iter()
                    .map(|lesson| {
                        let points: Vec<PointRow> = lesson
                            .grammar_points
                            .iter()
                            .enumerate()
                            .map(|(i, gp)| {
                                let key = GrammarPointKey::derive(level, lesson.lesson_num, i);
                                PointRow {
                                    state: self.store.state(&key),
                                    key,
                                    number: i + 1,
                                    text: gp.text.clone(),
                                    link: gp.link.clone(),
                                }
                            })
                            .collect();
                        let id = ContainerId::Lesson {
                            level,
                            lesson_num: lesson.lesson_num,
                        };
                        LessonInfo {
                            id,
                            lesson_num: lesson.lesson_num,
                            aggregates: self.aggregates_for(&id),
                            completed: self.completed_in(&id),
                            points,
                        }
                    })
                    .collect();
                let id = ContainerId::Level(level);
                LevelInfo {
                    id,
                    level,
                    aggregates: self.aggregates_for(&id),
                    stats: self.stats.level(level).cloned().unwrap_or_default(),
                    lessons,
                }
            })
            .collect()
    }

    pub fn level_info(&self, level: LevelName) -> Option<LevelInfo> {
        self.level_infos().into_iter().find(|info| info.level == level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalogue_embedded;
    use crate::model::PointState;

    #[test]
    fn tree_rows_reflect_store_and_cache() {
        let catalogue = read_catalogue_embedded().unwrap();
        let mut app = TrackerApp::new(
            catalogue,
            ProgressStore::in_memory(),
            LevelPolicy::default(),
            Duration::from_millis(500),
        );
        let key = app.key_for(LevelName::N5, 2, 0);
        app.toggle_bookmark(&key);

        let infos = app.level_infos();
        assert_eq!(infos[0].level, LevelName::N5);
        assert_eq!(infos[0].title(), "N5 Grammar");

        let n5 = app.level_info(LevelName::N5).unwrap();
        assert!(n5.aggregates.has_bookmarked);
        let lesson = n5.lessons.iter().find(|l| l.lesson_num == 2).unwrap();
        assert!(lesson.aggregates.has_bookmarked);
        assert_eq!(lesson.points[0].state, PointState::Bookmarked);
        assert_eq!(lesson.points[0].number, 1);
        assert_eq!(lesson.completed, 0);
        assert!(app.level_info(LevelName::N1).is_none());
    }
}
