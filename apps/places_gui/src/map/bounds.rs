use eframe::egui::{Pos2, Rect, Vec2};
use shared::domain::LatLng;
use walkers::{lat_lon, MapMemory, Position, Projector};

/// Web Mercator stops here; tiles above it do not exist.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_6;

pub fn to_position(position: LatLng) -> Position {
    lat_lon(position.lat(), position.lng())
}

/// Geographic point under `pos`, or `None` off the edge of the world.
pub fn geo_at(projector: &Projector, pos: Pos2) -> Option<LatLng> {
    let position = projector.unproject(pos.to_vec2());
    LatLng::new(position.y(), position.x()).ok()
}

/// Screen rectangle covered by the whole world at the current zoom.
pub fn world_rect(projector: &Projector) -> Rect {
    let north_west = projector.project(lat_lon(MAX_MERCATOR_LAT, -180.0));
    let south_east = projector.project(lat_lon(-MAX_MERCATOR_LAT, 180.0));
    Rect::from_min_max(north_west.to_pos2(), south_east.to_pos2())
}

/// Screen offset to move the view center by so no blank space shows past the
/// world's edges. A world smaller than the view is centered on that axis.
pub fn keep_in_world(world: Rect, view: Rect) -> Vec2 {
    fn axis(world_min: f32, world_max: f32, view_min: f32, view_max: f32) -> f32 {
        if world_max - world_min <= view_max - view_min {
            (world_min + world_max) / 2.0 - (view_min + view_max) / 2.0
        } else if world_min > view_min {
            world_min - view_min
        } else if world_max < view_max {
            world_max - view_max
        } else {
            0.0
        }
    }
    Vec2::new(
        axis(world.min.x, world.max.x, view.min.x, view.max.x),
        axis(world.min.y, world.max.y, view.min.y, view.max.y),
    )
}

/// New map center when the view has drifted past the world, else `None`.
pub fn world_clamped_center(projector: &Projector, view: Rect) -> Option<Position> {
    let shift = keep_in_world(world_rect(projector), view);
    if shift.length() < 0.5 {
        return None;
    }
    Some(projector.unproject(view.center().to_vec2() + shift))
}

/// Pulls the zoom back inside `min..=max`. Returns `true` when it changed.
pub fn clamp_zoom(memory: &mut MapMemory, min: f64, max: f64) -> bool {
    let zoom = memory.zoom();
    let clamped = zoom.clamp(min, max);
    if clamped == zoom {
        return false;
    }
    if let Err(err) = memory.set_zoom(clamped) {
        tracing::warn!(zoom = clamped, ?err, "zoom outside the tile range");
        return false;
    }
    true
}
