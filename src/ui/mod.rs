mod helpers;
pub mod layout;
pub mod views;

use crate::app::{FrameInput, TrackerApp, ViewPrefs};
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, Storage, get_value, set_value};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl TrackerApp {
    /// Restores UI preferences saved by eframe on a previous run.
    pub fn restore_from_storage(&mut self, storage: Option<&dyn Storage>) {
        if let Some(prefs) = storage.and_then(|s| get_value::<ViewPrefs>(s, APP_KEY)) {
            self.restore_prefs(prefs);
        }
    }
}

impl App for TrackerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if ctx.style().visuals.dark_mode != self.prefs.dark_mode {
            ctx.set_visuals(if self.prefs.dark_mode {
                Visuals::dark()
            } else {
                Visuals::light()
            });
        }

        let now = ctx.input(|i| Duration::from_secs_f64(i.time));
        let mut input = FrameInput::default();

        if self.state != AppState::LoadFailed {
            top_panel(self, ctx, &mut input);
        }
        bottom_panel(self, ctx, &mut input);

        match self.state {
            AppState::Tree => views::tree::ui_tree(self, ctx, now, &mut input),
            AppState::Statistics => views::statistics::ui_statistics(self, ctx),
            AppState::LoadFailed => views::load_failed::ui_load_failed(self, ctx),
        }

        // Store mutations happen only here, after the frame is drawn.
        self.apply_input(input, now);
        if self.holds.is_active() {
            ctx.request_repaint();
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
