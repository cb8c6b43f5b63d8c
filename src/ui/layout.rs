use crate::app::{FrameInput, TrackerApp, UiAction};
use crate::model::AppState;
use egui::{Align, Button, CentralPanel, Color32, Context, Frame, Layout, ProgressBar, RichText, Ui};

pub fn top_panel(app: &TrackerApp, ctx: &Context, input: &mut FrameInput) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let views = [
                (AppState::Tree, "📚 Grammar"),
                (AppState::Statistics, "📊 Statistics"),
            ];
            for (view, label) in views {
                if ui.add(Button::new(label).selected(app.state == view)).clicked() {
                    input.actions.push(UiAction::ShowView(view));
                }
            }

            ui.separator();
            let stats = &app.stats;
            ui.label(format!(
                "{}/{} grammar points completed",
                stats.completed_grammar_points, stats.total_grammar_points
            ));
            ui.add(
                ProgressBar::new(stats.completion_ratio())
                    .desired_width(140.0)
                    .show_percentage(),
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🔄 Reset all progress").clicked() {
                    input.actions.push(UiAction::RequestReset);
                }
            });
        });
    });
}

pub fn bottom_panel(app: &TrackerApp, ctx: &Context, input: &mut FrameInput) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if !app.message.is_empty() && app.state != AppState::LoadFailed {
                let color = if app.message.starts_with('⚠') {
                    Color32::YELLOW
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.label(RichText::new(&app.message).color(color));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    input.actions.push(UiAction::SetDarkMode(true));
                }
                if ui.button("☀ Light mode").clicked() {
                    input.actions.push(UiAction::SetDarkMode(false));
                }
            });
        });
    });
}

/// Panel centred both ways, with a maximum content width.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
