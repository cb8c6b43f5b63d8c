// src/ui/helpers.rs
use crate::model::LevelName;
use egui::{Button, Color32, Response, Ui};

/// Header colour for each level.
pub fn level_accent(level: LevelName) -> Color32 {
    match level {
        LevelName::N5 => Color32::from_rgb(0xD9, 0xEA, 0xD3),
        LevelName::N4 => Color32::from_rgb(0xC9, 0xE2, 0xB6),
        LevelName::N3 => Color32::from_rgb(0xFF, 0xF2, 0xCC),
        LevelName::N2 => Color32::from_rgb(0xFF, 0xD8, 0xB2),
        LevelName::N1 => Color32::from_rgb(0xEA, 0x99, 0x99),
        LevelName::NonJlpt => Color32::from_rgb(0xD9, 0xD9, 0xD9),
        LevelName::Unknown => Color32::from_rgb(0xFF, 0x00, 0x00),
    }
}

/// Small button that fills left to right while held. `progress` is `None`
/// when this button is not being held.
pub fn hold_button(ui: &mut Ui, label: &str, progress: Option<f32>, fill: Color32) -> Response {
    let response = ui.add(Button::new(label).small());
    if let Some(progress) = progress {
        let mut rect = response.rect;
        rect.set_width(rect.width() * progress.clamp(0.0, 1.0));
        ui.painter().rect_filled(rect, 3.0, fill.gamma_multiply(0.4));
    }
    response.on_hover_text("Press and hold")
}

/// Toggle shown as a highlighted icon when on. Returns true when clicked.
pub fn state_toggle(ui: &mut Ui, icon: &str, on: bool, hover: &str) -> bool {
    ui.add(Button::new(icon).selected(on))
        .on_hover_text(hover)
        .clicked()
}
