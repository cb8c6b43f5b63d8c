use grammar_tracker::engine::bulk_set_completed;
use grammar_tracker::index::CatalogueIndex;
use grammar_tracker::model::{
    Catalogue, ContainerId, GrammarPoint, GrammarPointKey, Lesson, LevelName, ProgressRecord,
};
use grammar_tracker::store::{MemoryBackend, ProgressStore};
use proptest::prelude::*;

fn catalogue() -> Catalogue {
    let lesson = |lesson_num: u32, points: usize| Lesson {
        lesson_num,
        grammar_points: (0..points)
            .map(|i| GrammarPoint {
                text: format!("point {i}"),
                link: String::new(),
            })
            .collect(),
    };
    Catalogue::from_levels([
        (LevelName::N5, vec![lesson(1, 3), lesson(2, 2)]),
        (LevelName::NonJlpt, vec![lesson(1, 2)]),
    ])
}

fn containers() -> Vec<ContainerId> {
    vec![
        ContainerId::Level(LevelName::N5),
        ContainerId::Lesson {
            level: LevelName::N5,
            lesson_num: 1,
        },
        ContainerId::Lesson {
            level: LevelName::N5,
            lesson_num: 2,
        },
        ContainerId::Level(LevelName::NonJlpt),
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Bookmark(usize),
    Complete(usize),
    BulkComplete(usize),
    BulkReset(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..7).prop_map(Op::Bookmark),
        (0usize..7).prop_map(Op::Complete),
        (0usize..4).prop_map(Op::BulkComplete),
        (0usize..4).prop_map(Op::BulkReset),
    ]
}

fn all_keys(index: &CatalogueIndex) -> Vec<GrammarPointKey> {
    let mut keys = index.leaves(&ContainerId::Level(LevelName::N5)).to_vec();
    keys.extend_from_slice(index.leaves(&ContainerId::Level(LevelName::NonJlpt)));
    keys
}

fn apply(store: &mut ProgressStore, index: &CatalogueIndex, keys: &[GrammarPointKey], op: &Op) {
    let containers = containers();
    match op {
        Op::Bookmark(i) => {
            store.toggle_bookmark(&keys[*i]).unwrap();
        }
        Op::Complete(i) => {
            store.toggle_complete(&keys[*i]).unwrap();
        }
        Op::BulkComplete(c) => {
            bulk_set_completed(store, index.leaves(&containers[*c]), true).unwrap();
        }
        Op::BulkReset(c) => {
            bulk_set_completed(store, index.leaves(&containers[*c]), false).unwrap();
        }
    }
}

proptest! {
    /// No sequence of operations leaves a point both bookmarked and completed,
    /// in memory or after a reload.
    #[test]
    fn prop_bookmark_and_complete_are_exclusive(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let index = CatalogueIndex::build(&catalogue());
        let keys = all_keys(&index);
        let backend = MemoryBackend::new();
        let mut store = ProgressStore::load(Box::new(backend.clone()));

        for op in &ops {
            apply(&mut store, &index, &keys, op);
            for key in &keys {
                let record = store.get(key);
                prop_assert!(!(record.bookmarked && record.completed), "{} after {:?}", key, op);
            }
        }

        let reloaded = ProgressStore::load(Box::new(backend));
        prop_assert_eq!(reloaded.records(), store.records());
    }

    /// A second bulk complete over the same keys changes nothing.
    #[test]
    fn prop_bulk_complete_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..20),
        container in 0usize..4,
    ) {
        let index = CatalogueIndex::build(&catalogue());
        let keys = all_keys(&index);
        let mut store = ProgressStore::in_memory();
        for op in &ops {
            apply(&mut store, &index, &keys, op);
        }

        let leaves = index.leaves(&containers()[container]);
        bulk_set_completed(&mut store, leaves, true).unwrap();
        let after_first = store.records().clone();

        let changed = bulk_set_completed(&mut store, leaves, true).unwrap();
        prop_assert!(changed.is_empty());
        prop_assert_eq!(store.records(), &after_first);
        for key in leaves {
            prop_assert_eq!(store.get(key), ProgressRecord::COMPLETED);
        }
    }

    /// Points never written read as unmarked.
    #[test]
    fn prop_unwritten_keys_are_unmarked(lesson in 1u32..50, index in 0usize..50) {
        let store = ProgressStore::in_memory();
        let key = GrammarPointKey::derive(LevelName::N3, lesson, index);
        prop_assert_eq!(store.get(&key), ProgressRecord::UNMARKED);
    }
}
