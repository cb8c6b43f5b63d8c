//! Derived container state.
//!
//! Aggregates are pure functions of the catalogue index and the progress
//! store. They are never stored; callers cache the returned maps and patch
//! them with the output of [`affected_ancestors`].

use crate::error::StoreError;
use crate::index::CatalogueIndex;
use crate::model::{ContainerId, GrammarPointKey, ProgressRecord};
use crate::store::ProgressStore;
use log::info;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Non-empty and every leaf completed.
    pub all_complete: bool,
    /// At least one leaf bookmarked.
    pub has_bookmarked: bool,
}

pub type AggregateMap = BTreeMap<ContainerId, Aggregates>;

pub fn container_aggregates<'k>(
    store: &ProgressStore,
    leaves: impl IntoIterator<Item = &'k GrammarPointKey>,
) -> Aggregates {
    let mut any = false;
    let mut all_complete = true;
    let mut has_bookmarked = false;
    for key in leaves {
        let record = store.get(key);
        any = true;
        all_complete &= record.completed;
        has_bookmarked |= record.bookmarked;
    }
    Aggregates {
        all_complete: any && all_complete,
        has_bookmarked,
    }
}

/// Recomputes the owning lesson and level of `changed`. Unknown keys touch
/// nothing.
pub fn affected_ancestors(
    index: &CatalogueIndex,
    store: &ProgressStore,
    changed: &GrammarPointKey,
) -> AggregateMap {
    index
        .ancestors(changed)
        .into_iter()
        .flatten()
        .map(|container| {
            let aggregates = container_aggregates(store, index.leaves(&container));
            (container, aggregates)
        })
        .collect()
}

pub fn recompute_all(index: &CatalogueIndex, store: &ProgressStore) -> AggregateMap {
    index
        .containers()
        .map(|(container, leaves)| (*container, container_aggregates(store, leaves)))
        .collect()
}

/// Marks every key completed (clearing bookmarks) or, with `completed ==
/// false`, returns every key to unmarked. Keys already in the target state
/// are skipped; the returned set holds the keys that changed. Persists once.
pub fn bulk_set_completed<'k>(
    store: &mut ProgressStore,
    keys: impl IntoIterator<Item = &'k GrammarPointKey>,
    completed: bool,
) -> Result<BTreeSet<GrammarPointKey>, StoreError> {
    if !completed {
        return store.reset_subset(keys);
    }

    let mut changed = BTreeSet::new();
    for key in keys {
        if store.get(key) != ProgressRecord::COMPLETED {
            store.put(key, ProgressRecord::COMPLETED);
            changed.insert(key.clone());
        }
    }
    if !changed.is_empty() {
        store.save()?;
        info!("marked {} grammar points completed", changed.len());
    }
    Ok(changed)
}
