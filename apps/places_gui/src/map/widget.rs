use eframe::egui;
use places_core::view::marker_popup;
use shared::domain::{LatLng, Place, PlaceId};
use walkers::{lat_lon, HttpTiles, Map, MapMemory, Plugin, Position, Projector};

use crate::config::MapSettings;
use crate::map::bounds::{clamp_zoom, geo_at, to_position, world_clamped_center};

const PIN_FILL: egui::Color32 = egui::Color32::from_rgb(0x2a, 0x81, 0xcb);
const PIN_SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(0xe0, 0x5a, 0x2b);
const PIN_HEAD_RADIUS: f32 = 8.0;
const PIN_HEIGHT: f32 = 22.0;
const MARKER_HIT_RADIUS: f32 = 14.0;

#[derive(Debug, Default)]
pub struct MapOutput {
    /// A click on open map, not on a marker or control.
    pub clicked_at: Option<LatLng>,
    pub clicked_marker: Option<PlaceId>,
    pub popup_closed: bool,
}

/// Tiles plus camera state for the central map.
pub struct MapSurface {
    tiles: HttpTiles,
    memory: MapMemory,
    home: Position,
    min_zoom: f64,
    max_zoom: f64,
    attribution: &'static str,
}

impl MapSurface {
    pub fn new(ctx: &egui::Context, settings: &MapSettings) -> Self {
        let source = settings.tile_source();
        let attribution = source.attribution_text();
        let tiles = HttpTiles::with_options(source, settings.http_options(), ctx.clone());

        let [lat, lng] = settings.initial_center;
        let home = lat_lon(lat, lng);
        let mut memory = MapMemory::default();
        if let Err(err) = memory.set_zoom(settings.initial_zoom) {
            tracing::warn!(zoom = settings.initial_zoom, ?err, "initial zoom rejected");
        }
        memory.center_at(home);

        Self {
            tiles,
            memory,
            home,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            attribution,
        }
    }

    pub fn tiles_in_flight(&self) -> usize {
        self.tiles.stats().in_progress
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        places: &[Place],
        open_popup: Option<PlaceId>,
        interactive: bool,
    ) -> MapOutput {
        let mut output = MapOutput::default();
        let (min_zoom, max_zoom) = (self.min_zoom, self.max_zoom);
        let attribution = self.attribution;
        let pins = PinsPlugin {
            places,
            open_popup,
            interactive,
            output: &mut output,
        };
        let pan_buttons = if interactive {
            egui::DragPanButtons::PRIMARY
        } else {
            egui::DragPanButtons::empty()
        };

        let (zoom_step, recenter) = Map::new(Some(&mut self.tiles), &mut self.memory, self.home)
            .with_plugin(pins)
            .zoom_with_ctrl(false)
            .zoom_gesture(interactive)
            .panning(interactive)
            .double_click_to_zoom(false)
            .drag_pan_buttons(pan_buttons)
            .show(ui, |ui, _response, projector, memory| {
                let rect = ui.max_rect();
                let zoom_step = if interactive {
                    show_zoom_controls(ui, rect, memory.zoom(), min_zoom, max_zoom)
                } else {
                    None
                };
                paint_attribution(ui.painter(), rect, attribution);
                (zoom_step, world_clamped_center(projector, rect))
            })
            .inner;

        if let Some(step) = zoom_step {
            let target = (self.memory.zoom() + step).clamp(min_zoom, max_zoom);
            if let Err(err) = self.memory.set_zoom(target) {
                tracing::warn!(zoom = target, ?err, "zoom button rejected");
            }
        }
        let mut changed = zoom_step.is_some() || clamp_zoom(&mut self.memory, min_zoom, max_zoom);
        if let Some(center) = recenter {
            self.memory.center_at(center);
            changed = true;
        }
        if changed {
            ui.ctx().request_repaint();
        }

        output
    }
}

struct PinsPlugin<'a> {
    places: &'a [Place],
    open_popup: Option<PlaceId>,
    interactive: bool,
    output: &'a mut MapOutput,
}

impl Plugin for PinsPlugin<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let this = *self;
        let rect = response.rect;
        let painter = ui.painter().with_clip_rect(rect);

        let mut heads = Vec::with_capacity(this.places.len());
        for place in this.places {
            let tip = projector.project(to_position(place.position)).to_pos2();
            let head = tip - egui::vec2(0.0, PIN_HEIGHT - PIN_HEAD_RADIUS);
            heads.push((place, head));
            if rect.expand(PIN_HEIGHT).contains(tip) {
                paint_pin(&painter, tip, head, this.open_popup == Some(place.id));
            }
        }

        if this.interactive && response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let hit = heads
                    .iter()
                    .map(|(place, head)| (place.id, head.distance(pointer)))
                    .filter(|(_, distance)| *distance <= MARKER_HIT_RADIUS)
                    .min_by(|a, b| a.1.total_cmp(&b.1));
                match hit {
                    Some((id, _)) => this.output.clicked_marker = Some(id),
                    None => this.output.clicked_at = geo_at(projector, pointer),
                }
            }
        }

        if let Some(id) = this.open_popup {
            if let Some((place, head)) = heads.iter().find(|(place, _)| place.id == id) {
                this.output.popup_closed = show_popup(ui.ctx(), place, *head);
            }
        }
    }
}

fn paint_pin(painter: &egui::Painter, tip: egui::Pos2, head: egui::Pos2, selected: bool) {
    let fill = if selected { PIN_SELECTED_FILL } else { PIN_FILL };
    painter.add(egui::Shape::convex_polygon(
        vec![
            head + egui::vec2(-PIN_HEAD_RADIUS * 0.8, PIN_HEAD_RADIUS * 0.5),
            head + egui::vec2(PIN_HEAD_RADIUS * 0.8, PIN_HEAD_RADIUS * 0.5),
            tip,
        ],
        fill,
        egui::Stroke::NONE,
    ));
    painter.circle(
        head,
        PIN_HEAD_RADIUS,
        fill,
        egui::Stroke::new(1.5, egui::Color32::WHITE),
    );
    painter.circle_filled(head, PIN_HEAD_RADIUS * 0.35, egui::Color32::WHITE);
}

/// Returns the zoom change requested by the +/- buttons.
fn show_zoom_controls(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
) -> Option<f64> {
    let controls =
        egui::Rect::from_min_size(rect.min + egui::vec2(10.0, 10.0), egui::vec2(28.0, 62.0));
    let mut step = None;
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(controls)
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.spacing_mut().item_spacing.y = 4.0;
    let button_size = egui::vec2(28.0, 28.0);
    if child
        .add_enabled(zoom < max_zoom, egui::Button::new("+").min_size(button_size))
        .clicked()
    {
        step = Some(1.0);
    }
    if child
        .add_enabled(zoom > min_zoom, egui::Button::new("−").min_size(button_size))
        .clicked()
    {
        step = Some(-1.0);
    }
    step
}

/// Info bubble above a pin. Returns `true` when its close button was pressed.
fn show_popup(ctx: &egui::Context, place: &Place, head: egui::Pos2) -> bool {
    let popup = marker_popup(place);
    let mut close = false;
    egui::Area::new(egui::Id::new(("place_popup", place.id)))
        .order(egui::Order::Foreground)
        .fixed_pos(head - egui::vec2(0.0, PIN_HEAD_RADIUS + 6.0))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(260.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(popup.title).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.small_button("✕").clicked() {
                            close = true;
                        }
                    });
                });
                ui.add_space(6.0);
                if popup.has_notes {
                    ui.label(popup.notes);
                } else {
                    ui.label(egui::RichText::new(popup.notes).italics());
                }
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(&popup.coordinates)
                        .small()
                        .color(egui::Color32::from_gray(0x66)),
                );
            });
        });
    close
}

fn paint_attribution(painter: &egui::Painter, rect: egui::Rect, attribution: &str) {
    let galley = painter.layout_no_wrap(
        attribution.to_string(),
        egui::FontId::proportional(11.0),
        egui::Color32::from_gray(0x33),
    );
    let padding = egui::vec2(4.0, 2.0);
    let text_pos = rect.max - galley.size() - padding;
    let background = egui::Rect::from_min_size(text_pos - padding, galley.size() + padding * 2.0);
    painter.rect_filled(
        background,
        egui::CornerRadius::same(2),
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200),
    );
    painter.galley(text_pos, galley, egui::Color32::from_gray(0x33));
}
