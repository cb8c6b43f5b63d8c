use crate::model::{Catalogue, ContainerId, GrammarPointKey, LevelName};
use std::collections::{BTreeMap, HashMap};

/// Lookup tables derived once from a catalogue: which containers own a
/// grammar point, and which grammar points sit under a container.
#[derive(Debug, Clone, Default)]
pub struct CatalogueIndex {
    owners: HashMap<GrammarPointKey, (LevelName, u32)>,
    leaves: BTreeMap<ContainerId, Vec<GrammarPointKey>>,
}

impl CatalogueIndex {
    pub fn build(catalogue: &Catalogue) -> Self {
        let mut index = Self::default();
        for (level, lessons) in catalogue.levels() {
            let mut level_keys = Vec::new();
            for lesson in lessons {
                let keys: Vec<GrammarPointKey> = (0..lesson.grammar_points.len())
                    .map(|i| GrammarPointKey::derive(level, lesson.lesson_num, i))
                    .collect();
                for key in &keys {
                    index.owners.insert(key.clone(), (level, lesson.lesson_num));
                }
                level_keys.extend(keys.iter().cloned());
                index.leaves.insert(
                    ContainerId::Lesson {
                        level,
                        lesson_num: lesson.lesson_num,
                    },
                    keys,
                );
            }
            index.leaves.insert(ContainerId::Level(level), level_keys);
        }
        index
    }

    /// Grammar point keys under a container, in catalogue order. Empty for
    /// containers the catalogue does not have.
    pub fn leaves(&self, container: &ContainerId) -> &[GrammarPointKey] {
        self.leaves
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Owning lesson and level of a grammar point, nearest first.
    pub fn ancestors(&self, key: &GrammarPointKey) -> Option<[ContainerId; 2]> {
        let &(level, lesson_num) = self.owners.get(key)?;
        Some([
            ContainerId::Lesson { level, lesson_num },
            ContainerId::Level(level),
        ])
    }

    pub fn containers(&self) -> impl Iterator<Item = (&ContainerId, &[GrammarPointKey])> {
        self.leaves.iter().map(|(id, keys)| (id, keys.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GrammarPoint, Lesson};

    fn lesson(num: u32, points: usize) -> Lesson {
        Lesson {
            lesson_num: num,
            grammar_points: (0..points)
                .map(|i| GrammarPoint {
                    text: format!("gp{i}"),
                    link: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn level_leaves_concatenate_lessons_in_order() {
        let catalogue = Catalogue::from_levels([(LevelName::N4, vec![lesson(3, 2), lesson(1, 1)])]);
        let index = CatalogueIndex::build(&catalogue);

        let keys: Vec<&str> = index
            .leaves(&ContainerId::Level(LevelName::N4))
            .iter()
            .map(GrammarPointKey::as_str)
            .collect();
        assert_eq!(keys, vec!["N4_3_0", "N4_3_1", "N4_1_0"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn ancestors_are_lesson_then_level() {
        let catalogue = Catalogue::from_levels([(LevelName::N1, vec![lesson(7, 1)])]);
        let index = CatalogueIndex::build(&catalogue);
        let key = GrammarPointKey::derive(LevelName::N1, 7, 0);

        assert_eq!(
            index.ancestors(&key),
            Some([
                ContainerId::Lesson {
                    level: LevelName::N1,
                    lesson_num: 7
                },
                ContainerId::Level(LevelName::N1),
            ])
        );
        assert_eq!(
            index.ancestors(&GrammarPointKey::derive(LevelName::N1, 7, 1)),
            None
        );
    }

    #[test]
    fn unknown_container_has_no_leaves() {
        let index = CatalogueIndex::build(&Catalogue::default());
        assert!(index.leaves(&ContainerId::Level(LevelName::N5)).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn empty_lesson_is_still_a_container() {
        let catalogue = Catalogue::from_levels([(LevelName::N2, vec![lesson(1, 0)])]);
        let index = CatalogueIndex::build(&catalogue);
        let ids: Vec<_> = index.containers().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), 2);
    }
}
