/// Camera follow: keeps the camera at a fixed offset from a moving body,
/// easing toward it a fixed fraction each frame.

use glam::Vec3;
use orrery_engine::Camera3D;

use crate::registry::{BodyId, BodyRegistry};

/// Fraction of the remaining distance covered per frame.
pub const FOLLOW_LERP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FollowState {
    #[default]
    Free,
    Following { target: BodyId, offset: Vec3 },
}

impl FollowState {
    pub fn target(&self) -> Option<BodyId> {
        match *self {
            FollowState::Free => None,
            FollowState::Following { target, .. } => Some(target),
        }
    }

    pub fn is_following(&self) -> bool {
        matches!(self, FollowState::Following { .. })
    }

    /// Start following `target`, capturing the current camera offset so the
    /// first frame does not jump.
    pub fn begin(&mut self, target: BodyId, camera_pos: Vec3, target_pos: Vec3) {
        *self = FollowState::Following { target, offset: camera_pos - target_pos };
    }

    /// A click on a body. Re-selecting the current target releases it.
    /// Returns whether the camera is following afterwards.
    pub fn select(&mut self, target: BodyId, camera_pos: Vec3, target_pos: Vec3) -> bool {
        if self.target() == Some(target) {
            self.cancel();
            false
        } else {
            self.begin(target, camera_pos, target_pos);
            true
        }
    }

    /// Back to free camera. Returns whether anything was being followed.
    pub fn cancel(&mut self) -> bool {
        let was = self.is_following();
        *self = FollowState::Free;
        was
    }

    /// The user moved the camera: keep following from the new viewpoint.
    pub fn on_camera_manipulated(&mut self, camera_pos: Vec3, registry: &BodyRegistry) {
        if let FollowState::Following { target, offset } = self {
            if let Some(target_pos) = registry.position(*target) {
                *offset = camera_pos - target_pos;
            }
        }
    }

    /// Ease the camera toward `target + offset` and its look-at toward the target.
    pub fn update(&self, camera: &mut Camera3D, registry: &BodyRegistry) {
        let FollowState::Following { target, offset } = *self else {
            return;
        };
        let Some(target_pos) = registry.position(target) else {
            return;
        };
        let desired = target_pos + offset;
        camera.position = camera.position.lerp(desired, FOLLOW_LERP);
        camera.target = camera.target.lerp(target_pos, FOLLOW_LERP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyCatalog;
    use crate::orbit;
    use crate::registry::BodyCategory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (BodyRegistry, Camera3D, BodyId) {
        let reg = BodyRegistry::from_catalog(&BodyCatalog::builtin(), &mut ChaCha8Rng::seed_from_u64(9));
        let earth = reg.find(BodyCategory::Planet, "Earth").unwrap();
        let cam = Camera3D::new(1280.0, 720.0).with_position(Vec3::new(0.0, -300.0, 150.0));
        (reg, cam, earth)
    }

    #[test]
    fn free_does_not_move_camera() {
        let (reg, mut cam, _) = setup();
        let before = cam.position;
        FollowState::Free.update(&mut cam, &reg);
        assert_eq!(cam.position, before);
    }

    #[test]
    fn no_jump_on_begin() {
        let (reg, mut cam, earth) = setup();
        let mut follow = FollowState::Free;
        let target_pos = reg.position(earth).unwrap();
        follow.begin(earth, cam.position, target_pos);
        let before = cam.position;
        follow.update(&mut cam, &reg);
        assert!((cam.position - before).length() < 1e-4);
    }

    #[test]
    fn camera_target_eases_toward_body() {
        let (reg, mut cam, earth) = setup();
        let target_pos = reg.position(earth).unwrap();
        let mut follow = FollowState::Free;
        follow.begin(earth, cam.position, target_pos);
        follow.update(&mut cam, &reg);
        let expected = Vec3::ZERO.lerp(target_pos, FOLLOW_LERP);
        assert!((cam.target - expected).length() < 1e-4);
    }

    #[test]
    fn converges_on_a_moving_body() {
        let (mut reg, mut cam, earth) = setup();
        let mut follow = FollowState::Free;
        let offset = Vec3::new(0.0, 20.0, 40.0);
        follow.begin(earth, reg.position(earth).unwrap() + offset, reg.position(earth).unwrap());
        for _ in 0..200 {
            orbit::advance_all(&mut reg, 1.0);
            follow.update(&mut cam, &reg);
        }
        // Steady-state lag is about 9 frames of travel (0.1 units each).
        let desired = reg.position(earth).unwrap() + offset;
        assert!((cam.position - desired).length() < 1.5);
    }

    #[test]
    fn select_toggles_and_retargets() {
        let (reg, cam, earth) = setup();
        let mars = reg.find(BodyCategory::Planet, "Mars").unwrap();
        let mut follow = FollowState::Free;

        assert!(follow.select(earth, cam.position, reg.position(earth).unwrap()));
        assert_eq!(follow.target(), Some(earth));
        assert!(follow.select(mars, cam.position, reg.position(mars).unwrap()));
        assert_eq!(follow.target(), Some(mars));
        assert!(!follow.select(mars, cam.position, reg.position(mars).unwrap()));
        assert_eq!(follow, FollowState::Free);
    }

    #[test]
    fn cancel_reports_previous_state() {
        let mut follow = FollowState::Following { target: BodyId(3), offset: Vec3::ONE };
        assert!(follow.cancel());
        assert!(!follow.cancel());
    }

    #[test]
    fn manipulation_recomputes_offset() {
        let (reg, _, earth) = setup();
        let target_pos = reg.position(earth).unwrap();
        let mut follow = FollowState::Following { target: earth, offset: Vec3::ONE };
        let cam_pos = target_pos + Vec3::new(5.0, 6.0, 7.0);
        follow.on_camera_manipulated(cam_pos, &reg);
        match follow {
            FollowState::Following { offset, .. } => {
                assert!((offset - Vec3::new(5.0, 6.0, 7.0)).length() < 1e-4)
            }
            FollowState::Free => panic!("expected Following"),
        }
    }

    #[test]
    fn manipulation_while_free_is_ignored() {
        let (reg, _, _) = setup();
        let mut follow = FollowState::Free;
        follow.on_camera_manipulated(Vec3::ONE, &reg);
        assert_eq!(follow, FollowState::Free);
    }
}
