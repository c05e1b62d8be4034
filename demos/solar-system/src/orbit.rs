/// Circular orbit advance: pure math plus the per-frame pass over the registry.
///
/// Angles are f64 (they accumulate without bound); positions drop to f32
/// only when written into a `Vec3`.

use glam::Vec3;

use crate::registry::{BodyId, BodyKind, BodyRegistry, CelestialBody};

/// Per-kind multiplier applied to `angular_speed * speed` each tick.
pub const PLANET_ORBIT_SCALE: f64 = 0.001;
pub const MOON_ORBIT_SCALE: f64 = 0.002;
pub const ASTEROID_ORBIT_SCALE: f64 = 1.0;

/// A circle of fixed radius in the XZ plane around a parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    pub radius: f64,
    /// Baseline angular speed before the simulation speed and kind scale.
    pub angular_speed: f64,
    /// Current angle in radians. Never wrapped.
    pub angle: f64,
}

impl CircularOrbit {
    pub fn new(radius: f64, angular_speed: f64, angle: f64) -> Self {
        Self { radius, angular_speed, angle }
    }

    /// `angle += angular_speed * speed * scale`. Zero speed freezes,
    /// negative speed runs backwards.
    pub fn advance(&mut self, speed: f64, scale: f64) {
        self.angle += self.angular_speed * speed * scale;
    }

    /// Offset from the parent at the current angle.
    pub fn offset(&self) -> Vec3 {
        circular_offset(self.radius, self.angle)
    }
}

/// `(r cos a, 0, r sin a)`.
pub fn circular_offset(radius: f64, angle: f64) -> Vec3 {
    Vec3::new((radius * angle.cos()) as f32, 0.0, (radius * angle.sin()) as f32)
}

/// Position on a circle around `parent`.
pub fn circular_position(radius: f64, angle: f64, parent: Vec3) -> Vec3 {
    parent + circular_offset(radius, angle)
}

/// Advance one body and recompute its position. `parent_pos` must already
/// reflect this tick for moons.
pub fn advance_body(body: &mut CelestialBody, parent_pos: Vec3, speed: f64) {
    match &mut body.kind {
        BodyKind::Star { spin_speed, .. } => {
            body.spin_angle += *spin_speed * speed;
        }
        BodyKind::Planet { orbit, spin_speed, .. } => {
            orbit.advance(speed, PLANET_ORBIT_SCALE);
            body.spin_angle += *spin_speed * speed;
            body.position = circular_position(orbit.radius, orbit.angle, Vec3::ZERO);
        }
        BodyKind::Moon { orbit, .. } => {
            orbit.advance(speed, MOON_ORBIT_SCALE);
            body.position = circular_position(orbit.radius, orbit.angle, parent_pos);
        }
        BodyKind::Asteroid { orbit, height } => {
            orbit.advance(speed, ASTEROID_ORBIT_SCALE);
            body.position = orbit.offset() + Vec3::new(0.0, *height, 0.0);
        }
    }
}

/// One tick for every body, in registry order (parents before children).
///
/// `speed == 0.0` leaves angles untouched and only re-derives positions,
/// which is how the registry places bodies at construction.
pub fn advance_all(registry: &mut BodyRegistry, speed: f64) {
    for index in 0..registry.len() {
        let id = BodyId(index);
        let parent_pos = registry.parent_position(id);
        if let Some(body) = registry.get_mut(id) {
            advance_body(body, parent_pos, speed);
        }
    }
}
