//! Render output handed to the renderer each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::enums::*;
use crate::types::SimTime;

/// Mapping from projected coordinates to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pixel x of the screen centre.
    pub center_x: f64,
    /// Pixel y of the screen centre.
    pub center_y: f64,
    /// Pixels per projected unit.
    pub scale: f64,
    /// Largest size in pixels any entity is drawn at.
    pub max_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_window(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

impl Viewport {
    /// Fit a viewport to a window: projected unit 1 reaches the nearer edge.
    pub fn from_window(width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let scale = center_x.min(center_y);
        Self {
            center_x,
            center_y,
            scale,
            max_size: scale / 4.0,
        }
    }

    /// Pixel position of a projected point.
    pub fn to_screen(&self, projected: DVec2) -> (i32, i32) {
        let x = projected.x * self.scale + self.center_x;
        let y = projected.y * self.scale + self.center_y;
        (x.floor() as i32, y.floor() as i32)
    }

    /// Pixel size for a projected size, clamped to `[1, max_size]`.
    pub fn to_pixels(&self, size: f64) -> u32 {
        let px = size * self.scale;
        let px = if px.is_nan() { 1.0 } else { px.clamp(1.0, self.max_size.max(1.0)) };
        px.floor() as u32
    }
}

/// One entity as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub kind: EntityKind,
    pub screen_x: i32,
    pub screen_y: i32,
    pub size_px: u32,
    /// False when the entity is hidden, cannot be projected or is out of range.
    pub visible: bool,
}

impl DrawRecord {
    /// A record telling the renderer to hide this entity.
    pub fn hidden(kind: EntityKind) -> Self {
        Self {
            kind,
            screen_x: 0,
            screen_y: 0,
            size_px: 0,
            visible: false,
        }
    }
}

/// Complete render output for one tick.
///
/// Holds one record per entity slot, in a fixed order: stars, missiles,
/// bogeys, debris.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldFrame {
    pub time: SimTime,
    pub mode: ViewMode,
    /// Whether the field is shown at all.
    pub display: bool,
    pub mirrored: bool,
    pub records: Vec<DrawRecord>,
}

impl FieldFrame {
    /// Records currently drawn.
    pub fn visible_records(&self) -> impl Iterator<Item = &DrawRecord> {
        self.records.iter().filter(|r| r.visible)
    }

    /// The record for a given entity, if present.
    pub fn record(&self, kind: EntityKind) -> Option<&DrawRecord> {
        self.records.iter().find(|r| r.kind == kind)
    }
}
