use std::time::Duration;

use eframe::egui;
use places_core::{ClickOutcome, PlaceId, PlacesController, ResetOutcome};

use crate::config::MapSettings;
use crate::controller::prompts::{PendingPrompt, PromptResponse, PromptStep};
use crate::map::{MapOutput, MapSurface};
use crate::ui::panels::{self, PanelAction};

const SIDE_PANEL_WIDTH: f32 = 360.0;
const LOADING_REPAINT: Duration = Duration::from_millis(50);
const IDLE_REPAINT: Duration = Duration::from_millis(500);

pub struct PlacesApp {
    places: PlacesController,
    map: MapSurface,
    prompt: Option<PendingPrompt>,
    focus_prompt_input: bool,
    open_popup: Option<PlaceId>,
    status: String,
}

impl PlacesApp {
    pub fn new(ctx: &egui::Context, settings: &MapSettings) -> Self {
        Self {
            places: PlacesController::new(),
            map: MapSurface::new(ctx, settings),
            prompt: None,
            focus_prompt_input: false,
            open_popup: None,
            status: String::new(),
        }
    }

    fn show_side_panel(&mut self, ctx: &egui::Context) {
        let modal_open = self.prompt.is_some();
        egui::SidePanel::right("places_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading("Places");
                ui.add_space(6.0);

                let action = ui
                    .add_enabled_ui(!modal_open, |ui| {
                        panels::show_controls(ui, self.places.is_collecting())
                    })
                    .inner;
                if let Some(action) = action {
                    self.apply_panel_action(action);
                }

                ui.add_space(8.0);
                panels::show_place_list(ui, self.places.state());

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(6.0);
                    if !self.status.is_empty() {
                        ui.label(
                            egui::RichText::new(&self.status)
                                .size(12.0)
                                .color(egui::Color32::from_gray(0x80)),
                        );
                        ui.separator();
                    }
                    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                        panels::show_how_to(ui);
                    });
                });
            });
    }

    fn apply_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Collect => self.places.set_collecting(true),
            PanelAction::Done => self.places.set_collecting(false),
            PanelAction::Reset => self.open_prompt(PendingPrompt::ConfirmReset),
        }
    }

    fn show_map(&mut self, ctx: &egui::Context) {
        let interactive = self.prompt.is_none();
        let output = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.map
                    .show(ui, self.places.places(), self.open_popup, interactive)
            })
            .inner;
        self.handle_map_output(output);
    }

    fn handle_map_output(&mut self, output: MapOutput) {
        if output.popup_closed {
            self.open_popup = None;
        }
        if let Some(id) = output.clicked_marker {
            self.open_popup = Some(id);
        } else if let Some(position) = output.clicked_at {
            self.open_popup = None;
            if let Some(prompt) = PendingPrompt::for_click(&self.places, position) {
                self.open_prompt(prompt);
            }
        }
    }

    fn open_prompt(&mut self, prompt: PendingPrompt) {
        self.prompt = Some(prompt);
        self.focus_prompt_input = true;
    }

    fn show_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        let mut response = None;
        egui::Window::new(prompt.window_title())
            .id(egui::Id::new("place_prompt_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.label(prompt.message());
                ui.add_space(6.0);
                if let Some(input) = prompt.input_mut() {
                    let edit = ui.add(
                        egui::TextEdit::singleline(input).desired_width(f32::INFINITY),
                    );
                    if self.focus_prompt_input {
                        edit.request_focus();
                        self.focus_prompt_input = false;
                    }
                }
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        response = Some(PromptResponse::Accept);
                    }
                    if ui.button("Cancel").clicked() {
                        response = Some(PromptResponse::Cancel);
                    }
                });
            });

        if response.is_none() {
            response = ctx.input(|i| {
                if i.key_pressed(egui::Key::Escape) {
                    Some(PromptResponse::Cancel)
                } else if i.key_pressed(egui::Key::Enter) {
                    Some(PromptResponse::Accept)
                } else {
                    None
                }
            });
        }

        if let (Some(response), Some(prompt)) = (response, self.prompt.take()) {
            let step = prompt.respond(&mut self.places, response);
            self.finish_prompt_step(step);
        }
    }

    fn finish_prompt_step(&mut self, step: PromptStep) {
        match step {
            PromptStep::Open(next) => self.open_prompt(next),
            PromptStep::Click(ClickOutcome::Added(id)) => {
                if let Some(place) = self.places.get(id) {
                    self.status = format!("Added \"{}\" at {}", place.title, place.position);
                }
            }
            PromptStep::Click(ClickOutcome::Cancelled) => {
                self.status = "Place discarded".to_string();
            }
            PromptStep::Click(ClickOutcome::Ignored) => {}
            PromptStep::Reset(ResetOutcome::Cleared { removed }) => {
                self.open_popup = None;
                self.status = format!("Cleared {removed} place(s)");
            }
            PromptStep::Reset(ResetOutcome::Declined) => {}
        }
    }
}

impl eframe::App for PlacesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panel first so the central map gets the remaining space.
        self.show_side_panel(ctx);
        self.show_map(ctx);
        self.show_prompt(ctx);

        // walkers repaints when a tile lands; this covers the tail of a burst.
        if self.map.tiles_in_flight() > 0 {
            ctx.request_repaint_after(LOADING_REPAINT);
        } else {
            ctx.request_repaint_after(IDLE_REPAINT);
        }
    }
}
