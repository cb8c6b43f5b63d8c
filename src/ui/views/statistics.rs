use crate::TrackerApp;
use crate::ui::helpers::level_accent;
use egui::{CentralPanel, Context, Grid, ProgressBar, RichText, ScrollArea};

pub fn ui_statistics(app: &TrackerApp, ctx: &Context) {
    let stats = &app.stats;
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.heading("Progress");
            ui.add_space(8.0);

            Grid::new("global_stats")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Levels completed", stats.completed_levels, stats.total_levels),
                        ("Lessons completed", stats.completed_lessons, stats.total_lessons),
                        (
                            "Grammar points completed",
                            stats.completed_grammar_points,
                            stats.total_grammar_points,
                        ),
                    ];
                    for (label, done, total) in rows {
                        ui.label(label);
                        ui.label(format!("{done} / {total}"));
                        ui.end_row();
                    }
                    ui.label("Bookmarked");
                    ui.label(stats.bookmarked_grammar_points.to_string());
                    ui.end_row();
                });
            ui.add_space(6.0);
            ui.add(ProgressBar::new(stats.completion_ratio()).show_percentage());

            ui.add_space(16.0);
            ui.heading("By level");
            ui.add_space(8.0);

            Grid::new("level_stats")
                .striped(true)
                .num_columns(6)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Level", "Lessons", "Points", "Completed", "Bookmarked", ""] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for (level, level_stats) in &stats.per_level {
                        let name = if level_stats.counted {
                            level.to_string()
                        } else {
                            format!("{level} *")
                        };
                        ui.label(RichText::new(name).color(level_accent(*level)));
                        ui.label(format!(
                            "{}/{}",
                            level_stats.completed_lessons, level_stats.lessons
                        ));
                        ui.label(level_stats.grammar_points.to_string());
                        ui.label(level_stats.completed.to_string());
                        ui.label(level_stats.bookmarked.to_string());
                        ui.add(
                            ProgressBar::new(level_stats.completion_ratio())
                                .desired_width(140.0)
                                .show_percentage(),
                        );
                        ui.end_row();
                    }
                });

            if stats.per_level.values().any(|s| !s.counted) {
                ui.add_space(6.0);
                ui.small("* not counted toward levels completed");
            }
        });
    });
}
