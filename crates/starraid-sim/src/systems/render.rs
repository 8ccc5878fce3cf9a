//! Render pass: projects every entity slot into a screen-space record.
//!
//! Read-only over the pools. Records come out in a fixed order (stars,
//! missiles, bogeys, debris) with one record per slot, so the renderer can
//! hide what is no longer drawn.

use glam::{DVec2, DVec3};

use starraid_core::config::FieldConfig;
use starraid_core::enums::{BogeySlot, EntityKind, MissileSlot};
use starraid_core::state::{DrawRecord, FieldFrame, Viewport};
use starraid_core::types::{Location, SimTime};

use crate::pools::{Bogey, DebrisCloud, Missile, Star};
use crate::projection::View;

/// Everything the render pass reads.
pub struct RenderInput<'a> {
    pub view: &'a View,
    pub viewport: &'a Viewport,
    pub config: &'a FieldConfig,
    pub time: SimTime,
    pub display: bool,
    pub mirrored: bool,
    pub stars: &'a [Star],
    pub missiles: &'a [Missile],
    pub bogeys: &'a [Bogey],
    pub debris: &'a DebrisCloud,
}

/// Screen-unit position of a point under the active view, mirror included.
pub fn screen_point(view: &View, mirrored: bool, point: DVec3) -> Option<DVec2> {
    let mut projected = view.projector.project_in_range(point)?;
    if mirrored {
        projected.x = -projected.x;
    }
    Some(projected)
}

/// Refill `frame` from the current state. Reuses the record buffer.
pub fn build_frame(frame: &mut FieldFrame, input: &RenderInput<'_>) {
    frame.time = input.time;
    frame.mode = input.view.mode();
    frame.display = input.display;
    frame.mirrored = input.mirrored;
    frame.records.clear();

    let base = input.config.size_factor;

    for (i, star) in input.stars.iter().enumerate() {
        frame
            .records
            .push(record(input, EntityKind::Star(i), &star.location, base));
    }
    for slot in MissileSlot::ALL {
        let missile = &input.missiles[slot.index()];
        frame
            .records
            .push(record(input, EntityKind::Missile(slot), &missile.location, base));
    }
    for slot in BogeySlot::ALL {
        let bogey = &input.bogeys[slot.index()];
        frame.records.push(record(
            input,
            EntityKind::Bogey(slot),
            &bogey.location,
            base * bogey.size_scale,
        ));
    }
    let debris_base = base * input.config.debris_size_scale;
    for (i, particle) in input.debris.particles.iter().enumerate() {
        frame.records.push(record(
            input,
            EntityKind::Debris(i),
            &particle.location,
            debris_base,
        ));
    }

    log::trace!(
        "frame {}: {} of {} records visible",
        frame.time.tick,
        frame.visible_records().count(),
        frame.records.len()
    );
}

fn record(input: &RenderInput<'_>, kind: EntityKind, location: &Location, base: f64) -> DrawRecord {
    if !input.display || !location.visible {
        return DrawRecord::hidden(kind);
    }
    let Some(projected) = screen_point(input.view, input.mirrored, location.position) else {
        return DrawRecord::hidden(kind);
    };

    let (screen_x, screen_y) = input.viewport.to_screen(projected);
    let size = input.view.projector.size(location.position, base);
    DrawRecord {
        kind,
        screen_x,
        screen_y,
        size_px: input.viewport.to_pixels(size),
        visible: true,
    }
}
