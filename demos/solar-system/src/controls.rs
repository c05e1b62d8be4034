/// Orbit controls: primary drag orbits the camera around its look-at point,
/// secondary drag pans, middle drag and the wheel dolly. Rotation and pan
/// both continue damped after release.
///
/// Rotation is accumulated as spherical deltas and bled into the camera a
/// fraction per frame, so a flick keeps turning for a while after the
/// pointer is released.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use orrery_engine::{Camera3D, PointerButton};

/// Viewport-pixel distance before a press becomes a drag.
pub const DRAG_THRESHOLD: f32 = 5.0;
/// Fraction of the pending rotation applied per frame.
pub const DAMPING_FACTOR: f32 = 0.05;
/// Distance multiplier per wheel step.
const ZOOM_SCALE: f32 = 0.95;
const EPS: f32 = 1e-6;

pub struct OrbitControls {
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    /// Pending pan in viewport pixels.
    pan_delta: Vec2,
    pressed: Option<PointerButton>,
    drag_moved: bool,
    drag_start: Vec2,
    last: Vec2,
}

impl OrbitControls {
    pub fn new() -> Self {
        Self {
            damping_factor: DAMPING_FACTOR,
            rotate_speed: 1.0,
            min_distance: 1.0,
            max_distance: f32::INFINITY,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            pan_delta: Vec2::ZERO,
            pressed: None,
            drag_moved: false,
            drag_start: Vec2::ZERO,
            last: Vec2::ZERO,
        }
    }

    pub fn pointer_down(&mut self, at: Vec2, button: PointerButton) {
        self.pressed = Some(button);
        self.drag_moved = false;
        self.drag_start = at;
        self.last = at;
    }

    /// Moves the camera only once the pointer has left the click threshold.
    pub fn pointer_move(&mut self, at: Vec2, viewport_height: f32) {
        let Some(button) = self.pressed else {
            return;
        };
        if !self.drag_moved && at.distance(self.drag_start) > DRAG_THRESHOLD {
            self.drag_moved = true;
        }
        if !self.drag_moved {
            return;
        }
        let delta = at - self.last;
        self.last = at;
        match button {
            PointerButton::Primary => {
                let h = viewport_height.max(1.0);
                self.theta_delta -= TAU * delta.x / h * self.rotate_speed;
                self.phi_delta -= TAU * delta.y / h * self.rotate_speed;
            }
            PointerButton::Secondary => self.pan_delta += delta,
            PointerButton::Middle => self.wheel(delta.y),
        }
    }

    /// Returns the click position when a primary press never turned into a
    /// drag.
    pub fn pointer_up(&mut self, at: Vec2) -> Option<Vec2> {
        let click = (self.pressed == Some(PointerButton::Primary) && !self.drag_moved).then_some(at);
        self.pressed = None;
        self.drag_moved = false;
        click
    }

    /// Positive delta dollies out, negative dollies in.
    pub fn wheel(&mut self, delta: f32) {
        if delta > 0.0 {
            self.scale /= ZOOM_SCALE;
        } else if delta < 0.0 {
            self.scale *= ZOOM_SCALE;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed.is_some() && self.drag_moved
    }

    fn has_pending(&self) -> bool {
        self.theta_delta.abs() > EPS
            || self.phi_delta.abs() > EPS
            || (self.scale - 1.0).abs() > EPS
            || self.pan_delta.length() > EPS
    }

    fn settle(&mut self) {
        self.theta_delta = 0.0;
        self.phi_delta = 0.0;
        self.scale = 1.0;
        self.pan_delta = Vec2::ZERO;
    }

    /// Apply pending motion to the camera. Returns whether the
    /// camera moved, which counts as a user manipulation.
    pub fn update(&mut self, camera: &mut Camera3D) -> bool {
        if !self.has_pending() {
            self.settle();
            return false;
        }

        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius < EPS {
            self.settle();
            return false;
        }

        let step = if self.damping_factor > 0.0 { self.damping_factor } else { 1.0 };
        let (d_theta, d_phi) = (self.theta_delta * step, self.phi_delta * step);
        camera.target += pan_shift(camera, self.pan_delta * step, radius);

        let theta = offset.x.atan2(offset.z) + d_theta;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + d_phi).clamp(EPS, PI - EPS);
        let radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_phi = phi.sin();
        camera.position = camera.target
            + Vec3::new(radius * sin_phi * theta.sin(), radius * phi.cos(), radius * sin_phi * theta.cos());

        self.theta_delta *= 1.0 - step;
        self.phi_delta *= 1.0 - step;
        self.pan_delta *= 1.0 - step;
        self.scale = 1.0;
        true
    }
}

/// World-space translation for a screen-space pan of `pixels`. One viewport
/// height of drag moves the look-at point by the visible height at
/// `distance`, so the scene tracks the pointer.
fn pan_shift(camera: &Camera3D, pixels: Vec2, distance: f32) -> Vec3 {
    if pixels == Vec2::ZERO {
        return Vec3::ZERO;
    }
    let forward = (camera.target - camera.position).normalize_or_zero();
    let right = forward.cross(camera.up).normalize_or_zero();
    let up = right.cross(forward);
    let half_height = distance * (camera.fov_y_degrees.to_radians() * 0.5).tan();
    let per_pixel = 2.0 * half_height / camera.viewport_height.max(1.0);
    (up * pixels.y - right * pixels.x) * per_pixel
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::new(1280.0, 720.0).with_position(Vec3::new(0.0, -300.0, 150.0))
    }

    #[test]
    fn press_and_release_in_place_is_a_click() {
        let mut controls = OrbitControls::new();
        controls.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary);
        controls.pointer_move(Vec2::new(102.0, 101.0), 720.0);
        assert_eq!(controls.pointer_up(Vec2::new(102.0, 101.0)), Some(Vec2::new(102.0, 101.0)));

        let mut cam = camera();
        let before = cam.position;
        assert!(!controls.update(&mut cam));
        assert_eq!(cam.position, before);
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut controls = OrbitControls::new();
        assert_eq!(controls.pointer_up(Vec2::ZERO), None);
    }

    #[test]
    fn drag_rotates_and_suppresses_click() {
        let mut controls = OrbitControls::new();
        let mut cam = camera();
        let before = cam.position;
        controls.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Primary);
        controls.pointer_move(Vec2::new(160.0, 100.0), 720.0);
        assert!(controls.is_dragging());
        assert!(controls.update(&mut cam));
        assert_eq!(controls.pointer_up(Vec2::new(160.0, 100.0)), None);
        assert!((cam.position - before).length() > 1e-3);
    }

    #[test]
    fn rotation_keeps_distance_to_target() {
        let mut controls = OrbitControls::new();
        let mut cam = camera();
        let dist = (cam.position - cam.target).length();
        controls.pointer_down(Vec2::ZERO, PointerButton::Primary);
        controls.pointer_move(Vec2::new(200.0, 50.0), 720.0);
        for _ in 0..30 {
            controls.update(&mut cam);
        }
        assert!(((cam.position - cam.target).length() - dist).abs() < 1e-2);
    }

    #[test]
    fn damping_continues_then_settles() {
        let mut controls = OrbitControls::new();
        let mut cam = camera();
        controls.pointer_down(Vec2::ZERO, PointerButton::Primary);
        controls.pointer_move(Vec2::new(50.0, 0.0), 720.0);
        controls.pointer_up(Vec2::new(50.0, 0.0));

        assert!(controls.update(&mut cam));
        assert!(controls.update(&mut cam));
        for _ in 0..600 {
            controls.update(&mut cam);
        }
        assert!(!controls.update(&mut cam));
    }

    #[test]
    fn wheel_dollies_in_and_out() {
        let mut controls = OrbitControls::new();
        controls.damping_factor = 0.0;
        let mut cam = camera();
        let dist = (cam.position - cam.target).length();

        controls.wheel(-1.0);
        assert!(controls.update(&mut cam));
        let closer = (cam.position - cam.target).length();
        assert!((closer - dist * ZOOM_SCALE).abs() < 1e-2);

        controls.wheel(1.0);
        controls.update(&mut cam);
        assert!(((cam.position - cam.target).length() - dist).abs() < 1e-2);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut controls = OrbitControls::new();
        controls.damping_factor = 0.0;
        let mut cam = camera();
        let dist = (cam.position - cam.target).length();
        controls.pointer_down(Vec2::ZERO, PointerButton::Primary);
        controls.pointer_move(Vec2::new(0.0, -5000.0), 720.0);
        controls.update(&mut cam);
        let offset = cam.position - cam.target;
        assert!(offset.is_finite());
        assert!((offset.y + dist).abs() < 1e-2);
    }

    #[test]
    fn secondary_drag_pans_target_and_camera_together() {
        let mut controls = OrbitControls::new();
        controls.damping_factor = 0.0;
        let mut cam = camera();
        let offset = cam.position - cam.target;
        controls.pointer_down(Vec2::new(100.0, 100.0), PointerButton::Secondary);
        controls.pointer_move(Vec2::new(200.0, 100.0), 720.0);
        assert!(controls.update(&mut cam));

        assert!(cam.target.length() > 1.0);
        assert!(((cam.position - cam.target) - offset).length() < 1e-2);
        // Dragging right slides the view toward the camera's left.
        let forward = -offset.normalize();
        let right = forward.cross(Vec3::Y).normalize();
        assert!(cam.target.dot(right) < 0.0);
    }

    #[test]
    fn pan_moves_one_visible_height_per_viewport_height() {
        let mut controls = OrbitControls::new();
        controls.damping_factor = 0.0;
        let mut cam = camera();
        let distance = (cam.position - cam.target).length();
        controls.pointer_down(Vec2::ZERO, PointerButton::Secondary);
        controls.pointer_move(Vec2::new(0.0, 720.0), 720.0);
        controls.update(&mut cam);
        let visible = 2.0 * distance * (cam.fov_y_degrees.to_radians() * 0.5).tan();
        // The first few pixels inside the click threshold still count.
        assert!((cam.target.length() - visible).abs() < 1e-1);
    }

    #[test]
    fn secondary_release_is_never_a_click() {
        let mut controls = OrbitControls::new();
        controls.pointer_down(Vec2::new(10.0, 10.0), PointerButton::Secondary);
        assert_eq!(controls.pointer_up(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn middle_drag_dollies() {
        let mut controls = OrbitControls::new();
        controls.damping_factor = 0.0;
        let mut cam = camera();
        let dist = (cam.position - cam.target).length();
        controls.pointer_down(Vec2::ZERO, PointerButton::Middle);
        controls.pointer_move(Vec2::new(0.0, -20.0), 720.0);
        controls.update(&mut cam);
        assert!((cam.position - cam.target).length() < dist);
    }
}
