use super::*;
use eframe::egui;

impl TrackerApp {
    /// Opens the confirmation window; nothing is cleared yet.
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Clears every progress record. Only reachable from the confirmation
    /// window.
    pub fn reset_all_progress(&mut self) {
        self.confirm_reset = false;
        self.holds.cancel();
        match self.store.reset_all() {
            Ok(()) => self.message = "All progress cleared.".into(),
            Err(e) => {
                error!("{e}");
                self.message = format!("⚠ Progress cleared for this session only ({e}).");
            }
        }
        self.refresh_all();
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Reset progress")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Clear every bookmark and completed grammar point? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, clear everything").clicked() {
                        self.reset_all_progress();
                    }
                    if ui.button("Cancel").clicked() {
                        self.cancel_reset();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GrammarPoint, Lesson, LevelName};

    fn app(backend: MemoryBackend) -> TrackerApp {
        let catalogue = Catalogue::from_levels([(
            LevelName::N5,
            vec![Lesson {
                lesson_num: 1,
                grammar_points: vec![
                    GrammarPoint {
                        text: "だ".into(),
                        link: String::new(),
                    },
                    GrammarPoint {
                        text: "です".into(),
                        link: String::new(),
                    },
                ],
            }],
        )]);
        TrackerApp::new(
            catalogue,
            ProgressStore::load(Box::new(backend)),
            LevelPolicy::default(),
            Duration::from_millis(500),
        )
    }

    #[test]
    fn request_only_opens_confirmation() {
        let mut app = app(MemoryBackend::new());
        app.toggle_complete(&app.key_for(LevelName::N5, 1, 0));
        app.apply(UiAction::RequestReset);

        assert!(app.confirm_reset);
        assert_eq!(app.stats.completed_grammar_points, 1);

        app.cancel_reset();
        assert!(!app.confirm_reset);
        assert_eq!(app.stats.completed_grammar_points, 1);
    }

    #[test]
    fn confirmed_reset_clears_store_and_statistics() {
        let backend = MemoryBackend::new();
        let mut app = app(backend.clone());
        app.toggle_complete(&app.key_for(LevelName::N5, 1, 0));
        app.toggle_complete(&app.key_for(LevelName::N5, 1, 1));
        assert_eq!(app.stats.completed_levels, 1);

        app.request_reset();
        app.reset_all_progress();

        assert!(!app.confirm_reset);
        assert_eq!(app.stats.completed_grammar_points, 0);
        assert_eq!(app.stats.completed_levels, 0);
        assert!(!app.is_level_completed(LevelName::N5));
        assert!(ProgressStore::load(Box::new(backend)).is_empty());
    }

    #[test]
    fn rejected_reset_is_reported_and_session_is_cleared() {
        let backend = MemoryBackend::new();
        let mut app = app(backend.clone());
        let baseline = app.stats.clone();
        app.toggle_complete(&app.key_for(LevelName::N5, 1, 0));
        app.toggle_bookmark(&app.key_for(LevelName::N5, 1, 1));
        assert_ne!(app.stats, baseline);

        backend.reject_writes(true);
        app.request_reset();
        app.reset_all_progress();

        assert!(app.message.starts_with('⚠'));
        assert!(!app.confirm_reset);
        assert_eq!(app.stats, baseline);
        assert!(!app.aggregates_for(&ContainerId::Level(LevelName::N5)).has_bookmarked);
        assert!(!ProgressStore::load(Box::new(backend)).is_empty());
    }
}
