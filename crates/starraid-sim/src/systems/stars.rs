//! Starfield: placement and torus recycling.
//!
//! Stars never disappear. One that leaves the view's volume re-enters from
//! the opposite face at the same overflow distance, with fresh random
//! coordinates on the other two axes.

use rand::Rng;

use starraid_core::types::Location;

use crate::pools::Star;
use crate::projection::Volume;
use crate::systems::motion::Motion;

/// Axes checked for overflow, in priority order: depth first.
const WRAP_ORDER: [usize; 3] = [2, 0, 1];

/// Scatter every star uniformly through the volume.
pub fn generate<R: Rng>(stars: &mut [Star], volume: &Volume, rng: &mut R) {
    for star in stars.iter_mut() {
        star.location = Location::at(volume.random_point(rng));
    }
}

/// Move every star by the player's motion and recycle the ones that left.
pub fn run<R: Rng>(stars: &mut [Star], motion: &Motion, volume: &Volume, rng: &mut R) {
    for star in stars.iter_mut() {
        motion.apply(&mut star.location.position);
        recycle(&mut star.location, volume, rng);
    }
}

/// Wrap one star back into the volume. Returns true if it was moved.
pub fn recycle<R: Rng>(location: &mut Location, volume: &Volume, rng: &mut R) -> bool {
    let pos = &mut location.position;
    for axis in WRAP_ORDER {
        if pos[axis] < volume.min[axis] || pos[axis] > volume.max[axis] {
            pos[axis] = volume.wrap_axis(axis, pos[axis]);
            for other in (0..3).filter(|&a| a != axis) {
                pos[other] = volume.random_on_axis(other, rng);
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn volume() -> Volume {
        Volume::new(DVec3::new(-100.0, -100.0, 0.0), DVec3::new(100.0, 100.0, 140.0))
    }

    #[test]
    fn test_inside_star_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut loc = Location::at(DVec3::new(5.0, 6.0, 7.0));
        assert!(!recycle(&mut loc, &volume(), &mut rng));
        assert_eq!(loc.position, DVec3::new(5.0, 6.0, 7.0));
    }

    #[test]
    fn test_depth_overflow_keeps_remaining_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut loc = Location::at(DVec3::new(5.0, 6.0, -2.5));
        assert!(recycle(&mut loc, &volume(), &mut rng));
        assert!((loc.position.z - 137.5).abs() < 1e-12);
        assert!(volume().contains(loc.position));
    }

    #[test]
    fn test_side_overflow_wraps_x() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut loc = Location::at(DVec3::new(101.0, 6.0, 50.0));
        assert!(recycle(&mut loc, &volume(), &mut rng));
        assert!((loc.position.x + 99.0).abs() < 1e-12);
        assert!(volume().contains(loc.position));
    }

    #[test]
    fn test_generate_fills_volume() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut stars = [Star::default(); 24];
        generate(&mut stars, &volume(), &mut rng);
        for star in &stars {
            assert!(star.location.visible);
            assert!(volume().contains(star.location.position));
        }
    }
}
