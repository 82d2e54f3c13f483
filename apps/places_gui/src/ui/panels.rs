//! Side panel: mode buttons, the live place list, and usage notes.

use eframe::egui;
use places_core::{
    view::{
        list_view, ListView, EMPTY_LIST_HEADLINE, EMPTY_LIST_HINT, HOW_TO_USE, LIST_HEADING,
        PAUSED_HEADLINE, PAUSED_HINT,
    },
    PlacesState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Collect,
    Done,
    Reset,
}

pub fn show_controls(ui: &mut egui::Ui, collecting: bool) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!collecting, egui::Button::new("Collect"))
            .clicked()
        {
            action = Some(PanelAction::Collect);
        }
        if ui
            .add_enabled(collecting, egui::Button::new("Done"))
            .clicked()
        {
            action = Some(PanelAction::Done);
        }
        if ui.button("Reset").clicked() {
            action = Some(PanelAction::Reset);
        }
    });
    action
}

fn card(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add(ui);
        });
}

pub fn show_place_list(ui: &mut egui::Ui, state: &PlacesState) {
    match list_view(state) {
        ListView::Paused => card(ui, |ui| {
            ui.strong(PAUSED_HEADLINE);
            ui.label(PAUSED_HINT);
        }),
        ListView::Empty => card(ui, |ui| {
            ui.strong(EMPTY_LIST_HEADLINE);
            ui.label(EMPTY_LIST_HINT);
        }),
        ListView::Entries(entries) => card(ui, |ui| {
            ui.heading(LIST_HEADING);
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .max_height((ui.available_height() - 180.0).max(120.0))
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in entries {
                        ui.push_id(entry.id, |ui| {
                            ui.label(egui::RichText::new(entry.title).strong());
                            if entry.has_notes {
                                ui.label(egui::RichText::new(entry.notes).size(13.0));
                            } else {
                                ui.label(egui::RichText::new(entry.notes).size(13.0).italics());
                            }
                            ui.label(
                                egui::RichText::new(entry.coordinates)
                                    .size(12.0)
                                    .color(egui::Color32::from_gray(0x66)),
                            );
                            ui.separator();
                        });
                    }
                });
        }),
    }
}

pub fn show_how_to(ui: &mut egui::Ui) {
    ui.strong("How to use");
    for (idx, step) in HOW_TO_USE.iter().enumerate() {
        ui.label(egui::RichText::new(format!("{}. {step}", idx + 1)).size(13.0));
    }
}
