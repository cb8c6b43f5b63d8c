use super::*;
use crate::error::StoreError;
use crate::gesture::HoldEvent;
use log::{debug, warn};

impl TrackerApp {
    pub fn toggle_bookmark(&mut self, key: &GrammarPointKey) {
        let result = self.store.toggle_bookmark(key);
        self.after_leaf_mutation(key, result.map(|_| ()));
    }

    pub fn toggle_complete(&mut self, key: &GrammarPointKey) {
        let result = self.store.toggle_complete(key);
        self.after_leaf_mutation(key, result.map(|_| ()));
    }

    fn after_leaf_mutation(&mut self, key: &GrammarPointKey, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.message.clear(),
            Err(e) => self.report_store_error(&e),
        }
        self.refresh_after_change(key);
    }

    /// Completes or resets every grammar point under a container. Returns
    /// the number of points whose state changed.
    pub fn run_bulk(&mut self, target: HoldTarget) -> usize {
        let completed = target.action == BulkAction::Complete;
        let leaves = self.index.leaves(&target.container);
        let changed = match engine::bulk_set_completed(&mut self.store, leaves, completed) {
            Ok(changed) => {
                info!(
                    "{:?} on {}: {} grammar points changed",
                    target.action,
                    target.container.label(),
                    changed.len()
                );
                self.message = match (target.action, changed.len()) {
                    (_, 0) => format!("{}: nothing to change", target.container.label()),
                    (BulkAction::Complete, n) => {
                        format!("{}: marked {n} grammar points complete", target.container.label())
                    }
                    (BulkAction::Reset, n) => {
                        format!("{}: reset {n} grammar points", target.container.label())
                    }
                };
                changed.len()
            }
            Err(e) => {
                self.report_store_error(&e);
                0
            }
        };
        self.refresh_all();
        changed
    }

    /// Feeds one frame of UI input: advances the hold tracker, then applies
    /// clicks in the order they were collected.
    pub fn apply_input(&mut self, input: FrameInput, now: Duration) {
        match self.holds.update(input.pressed.as_ref(), now) {
            HoldEvent::Fired(target) => {
                self.run_bulk(target);
            }
            HoldEvent::Cancelled(target) => {
                debug!("hold on {} cancelled", target.container.label());
            }
            HoldEvent::Holding { .. } | HoldEvent::Idle => {}
        }
        for action in input.actions {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::ToggleBookmark(key) => self.toggle_bookmark(&key),
            UiAction::ToggleComplete(key) => self.toggle_complete(&key),
            UiAction::ShowView(view) => {
                if self.state != AppState::LoadFailed {
                    self.state = view;
                    self.prefs.view = view;
                }
            }
            UiAction::RequestReset => self.request_reset(),
            UiAction::SetDarkMode(dark) => self.prefs.dark_mode = dark,
        }
    }

    fn report_store_error(&mut self, e: &StoreError) {
        warn!("{e}");
        self.message = format!("⚠ Progress could not be saved ({e}). Changes are kept for this session.");
    }
}
