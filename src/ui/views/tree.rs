use crate::app::{BulkAction, FrameInput, HoldTarget, LessonInfo, LevelInfo, TrackerApp, UiAction};
use crate::model::{ContainerId, PointState};
use crate::ui::helpers::{hold_button, level_accent, state_toggle};
use egui::collapsing_header::CollapsingState;
use egui::{CentralPanel, Color32, Context, Grid, RichText, ScrollArea, Ui};
use std::time::Duration;

pub fn ui_tree(app: &TrackerApp, ctx: &Context, now: Duration, input: &mut FrameInput) {
    let infos = app.level_infos();
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if infos.is_empty() {
                    ui.label("The catalogue has no grammar points.");
                }
                for info in &infos {
                    level_section(app, ui, info, now, input);
                    ui.add_space(6.0);
                }
            });
    });
}

fn level_section(app: &TrackerApp, ui: &mut Ui, info: &LevelInfo, now: Duration, input: &mut FrameInput) {
    let id = ui.make_persistent_id(info.id);
    CollapsingState::load_with_default_open(ui.ctx(), id, false)
        .show_header(ui, |ui| {
            ui.label(RichText::new("■").color(level_accent(info.level)));
            ui.label(RichText::new(info.label()).strong().size(17.0));
            bulk_buttons(app, ui, info.id, now, input);
        })
        .body(|ui| {
            for lesson in &info.lessons {
                lesson_section(app, ui, lesson, now, input);
            }
        });
}

fn lesson_section(app: &TrackerApp, ui: &mut Ui, lesson: &LessonInfo, now: Duration, input: &mut FrameInput) {
    let id = ui.make_persistent_id(lesson.id);
    CollapsingState::load_with_default_open(ui.ctx(), id, false)
        .show_header(ui, |ui| {
            ui.label(RichText::new(lesson.label()).strong());
            bulk_buttons(app, ui, lesson.id, now, input);
        })
        .body(|ui| {
            Grid::new(lesson.id)
                .striped(true)
                .num_columns(4)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    for row in &lesson.points {
                        ui.label(row.number_label());

                        let mut text = RichText::new(&row.text);
                        if row.state == PointState::Completed {
                            text = text.strikethrough().color(Color32::GRAY);
                        }
                        if row.link.is_empty() {
                            ui.label(text);
                        } else {
                            ui.hyperlink_to(text, &row.link);
                        }

                        if state_toggle(ui, "🔖", row.state == PointState::Bookmarked, "Bookmark") {
                            input.actions.push(UiAction::ToggleBookmark(row.key.clone()));
                        }
                        if state_toggle(ui, "✅", row.state == PointState::Completed, "Mark complete") {
                            input.actions.push(UiAction::ToggleComplete(row.key.clone()));
                        }
                        ui.end_row();
                    }
                });
        });
}

fn bulk_buttons(app: &TrackerApp, ui: &mut Ui, container: ContainerId, now: Duration, input: &mut FrameInput) {
    let buttons = [
        (BulkAction::Complete, "✔ hold: complete all", Color32::from_rgb(90, 170, 90)),
        (BulkAction::Reset, "⟲ hold: reset", Color32::DARK_RED),
    ];
    for (action, label, fill) in buttons {
        let target = HoldTarget { container, action };
        let response = hold_button(ui, label, app.holds.progress(&target, now), fill);
        if response.is_pointer_button_down_on() && response.contains_pointer() {
            input.pressed = Some(target);
        }
    }
}
