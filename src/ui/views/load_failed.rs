use crate::TrackerApp;
use crate::config::CONFIG_ENV;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_load_failed(app: &TrackerApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 520.0, |ui| {
        ui.label(
            RichText::new("Grammar data unavailable")
                .heading()
                .color(Color32::YELLOW),
        );
        ui.add_space(12.0);
        ui.label(&app.message);
        ui.add_space(12.0);
        ui.label(format!(
            "Check catalogue_path in the configuration file named by {CONFIG_ENV}, \
             or remove it to use the built-in sample."
        ));
    });
}
