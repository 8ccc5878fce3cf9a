//! Projection strategies: forward perspective, aft mirrored perspective and
//! the long-range overhead scan.
//!
//! A `View` bundles the active projector with the box stars are recycled in.
//! The box is only used for stars; bogeys and missiles are culled by the
//! projector's own validity test plus the depth limit in `Projector::in_range`.

use glam::{DVec2, DVec3};
use rand::Rng;

use starraid_core::config::FieldConfig;
use starraid_core::constants::{FIELD_NEAR, MIN_SIZE_DEPTH};
use starraid_core::enums::ViewMode;

/// Axis-aligned box in field space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub min: DVec3,
    pub max: DVec3,
}

impl Volume {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Inclusive containment on all three axes.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Uniformly random coordinate on one axis.
    pub fn random_on_axis<R: Rng>(&self, axis: usize, rng: &mut R) -> f64 {
        rng.gen_range(self.min[axis]..self.max[axis])
    }

    /// Uniformly random point inside the box.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> DVec3 {
        DVec3::new(
            self.random_on_axis(0, rng),
            self.random_on_axis(1, rng),
            self.random_on_axis(2, rng),
        )
    }

    /// Fold a coordinate that left the box on `axis` back in from the
    /// opposite face, keeping the distance it travelled past the seam.
    pub fn wrap_axis(&self, axis: usize, value: f64) -> f64 {
        let min = self.min[axis];
        min + (value - min).rem_euclid(self.max[axis] - min)
    }
}

/// One of the three projection strategies with its constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projector {
    /// Perspective looking down +z.
    Forward {
        observer_distance: f64,
        max_depth: f64,
    },
    /// Perspective looking down -z, mirrored so left stays left.
    Aft {
        observer_distance: f64,
        max_depth: f64,
    },
    /// Orthographic top-down map; altitude is not shown.
    Scan { distance: f64, size: f64 },
}

impl Projector {
    pub fn for_mode(mode: ViewMode, config: &FieldConfig) -> Self {
        match mode {
            ViewMode::Forward => Projector::Forward {
                observer_distance: config.observer_distance,
                max_depth: config.max_view_depth,
            },
            ViewMode::Aft => Projector::Aft {
                observer_distance: config.observer_distance,
                max_depth: config.max_view_depth,
            },
            ViewMode::Scan => Projector::Scan {
                distance: config.scan_distance,
                size: config.scan_size,
            },
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Projector::Forward { .. } => ViewMode::Forward,
            Projector::Aft { .. } => ViewMode::Aft,
            Projector::Scan { .. } => ViewMode::Scan,
        }
    }

    /// Project a point to screen units, or `None` if this mode cannot show it.
    ///
    /// The perspective divides never see a zero denominator: the validity
    /// checks keep `observer_distance + |z|` at or above `observer_distance`.
    pub fn project(&self, point: DVec3) -> Option<DVec2> {
        match *self {
            Projector::Forward {
                observer_distance, ..
            } => {
                if point.z < 0.0 {
                    return None;
                }
                let depth = observer_distance + point.z;
                Some(DVec2::new(point.x, point.y) * observer_distance / depth)
            }
            Projector::Aft {
                observer_distance, ..
            } => {
                if point.z > 0.0 {
                    return None;
                }
                let depth = point.z - observer_distance;
                Some(-(DVec2::new(point.x, point.y) * observer_distance) / depth)
            }
            Projector::Scan { distance, .. } => {
                if point.x.abs() > distance || point.z.abs() > distance {
                    return None;
                }
                Some(DVec2::new(point.x / distance, -point.z / distance))
            }
        }
    }

    /// Size in screen units for an entity with the given base size factor.
    pub fn size(&self, point: DVec3, base_size: f64) -> f64 {
        match *self {
            Projector::Forward { .. } => base_size / point.z.max(MIN_SIZE_DEPTH),
            Projector::Aft { .. } => -base_size / point.z.min(-MIN_SIZE_DEPTH),
            Projector::Scan { size, .. } => size * base_size,
        }
    }

    /// Depth limit applied by callers on top of `project`.
    pub fn in_range(&self, point: DVec3) -> bool {
        match *self {
            Projector::Forward { max_depth, .. } => point.z <= max_depth,
            Projector::Aft { max_depth, .. } => point.z >= -max_depth,
            Projector::Scan { .. } => true,
        }
    }

    /// `project` followed by the depth limit.
    pub fn project_in_range(&self, point: DVec3) -> Option<DVec2> {
        if !self.in_range(point) {
            return None;
        }
        self.project(point)
    }
}

/// The active projector together with its star recycling volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub projector: Projector,
    pub volume: Volume,
}

impl View {
    pub fn new(mode: ViewMode, config: &FieldConfig) -> Self {
        Self {
            projector: Projector::for_mode(mode, config),
            volume: recycling_volume(mode, config),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.projector.mode()
    }
}

/// Box in which stars live for a given mode.
pub fn recycling_volume(mode: ViewMode, config: &FieldConfig) -> Volume {
    let hw = config.field_half_width;
    match mode {
        ViewMode::Forward => Volume::new(
            DVec3::new(-hw, -hw, FIELD_NEAR),
            DVec3::new(hw, hw, config.field_depth),
        ),
        ViewMode::Aft => Volume::new(
            DVec3::new(-hw, -hw, -config.field_depth),
            DVec3::new(hw, hw, -FIELD_NEAR),
        ),
        ViewMode::Scan => {
            let d = config.scan_distance;
            Volume::new(DVec3::new(-d, -hw, -d), DVec3::new(d, hw, d))
        }
    }
}
