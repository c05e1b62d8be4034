/// Name labels: which bodies get one, and where on screen it goes.

use glam::{Vec2, Vec3};
use orrery_engine::{Camera3D, EntityId, LabelInstance};

use crate::registry::{BodyCategory, BodyRegistry};

/// Which labelled categories are shown when labels are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFilter {
    #[default]
    All,
    Planet,
    Moon,
}

impl NameFilter {
    /// Decode the UI value: 0 all, 1 planet, 2 moon. Anything else,
    /// fractional or NaN included, is rejected.
    pub fn from_wire(value: f32) -> Option<Self> {
        if value == 0.0 {
            Some(NameFilter::All)
        } else if value == 1.0 {
            Some(NameFilter::Planet)
        } else if value == 2.0 {
            Some(NameFilter::Moon)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelPolicy {
    pub show_all: bool,
    pub filter: NameFilter,
}

impl LabelPolicy {
    pub fn shows(&self, category: BodyCategory) -> bool {
        if !self.show_all {
            return false;
        }
        match category {
            BodyCategory::Planet => matches!(self.filter, NameFilter::All | NameFilter::Planet),
            BodyCategory::Moon => matches!(self.filter, NameFilter::All | NameFilter::Moon),
            BodyCategory::Star | BodyCategory::Asteroid => false,
        }
    }
}

/// Only planets and moons carry a label at all.
pub fn is_labelled(category: BodyCategory) -> bool {
    matches!(category, BodyCategory::Planet | BodyCategory::Moon)
}

/// Screen pixel for a world point. Off-screen and behind-camera points
/// are not clipped.
pub fn project(world: Vec3, camera: &Camera3D) -> Vec2 {
    camera.world_to_screen(world)
}

/// One record per labelled body, every frame. `entities` maps `BodyId.0`
/// to the body's scene entity.
pub fn project_labels(
    registry: &BodyRegistry,
    entities: &[EntityId],
    camera: &Camera3D,
    policy: LabelPolicy,
    out: &mut Vec<LabelInstance>,
) {
    for (id, body) in registry.iter() {
        let category = body.category();
        if !is_labelled(category) {
            continue;
        }
        let Some(&entity) = entities.get(id.0) else {
            continue;
        };
        if policy.shows(category) {
            out.push(LabelInstance::shown(entity, project(body.position, camera)));
        } else {
            out.push(LabelInstance::hidden(entity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyCatalog;
    use crate::registry::BodyId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scene() -> (BodyRegistry, Vec<EntityId>, Camera3D) {
        let reg = BodyRegistry::from_catalog(&BodyCatalog::builtin(), &mut ChaCha8Rng::seed_from_u64(11));
        let ids = (0..reg.len() as u32).map(|i| EntityId(i + 1)).collect();
        let cam = Camera3D::new(1280.0, 720.0).with_position(Vec3::new(0.0, -300.0, 150.0));
        (reg, ids, cam)
    }

    #[test]
    fn filter_from_wire() {
        assert_eq!(NameFilter::from_wire(0.0), Some(NameFilter::All));
        assert_eq!(NameFilter::from_wire(1.0), Some(NameFilter::Planet));
        assert_eq!(NameFilter::from_wire(2.0), Some(NameFilter::Moon));
        assert_eq!(NameFilter::from_wire(5.0), None);
    }

    #[test]
    fn malformed_filter_values_are_rejected() {
        assert_eq!(NameFilter::from_wire(f32::NAN), None);
        assert_eq!(NameFilter::from_wire(0.4), None);
        assert_eq!(NameFilter::from_wire(1.5), None);
        assert_eq!(NameFilter::from_wire(-1.0), None);
        assert_eq!(NameFilter::from_wire(f32::INFINITY), None);
    }

    #[test]
    fn policy_matrix() {
        let off = LabelPolicy::default();
        assert!(!off.shows(BodyCategory::Planet));

        let all = LabelPolicy { show_all: true, filter: NameFilter::All };
        assert!(all.shows(BodyCategory::Planet));
        assert!(all.shows(BodyCategory::Moon));
        assert!(!all.shows(BodyCategory::Star));
        assert!(!all.shows(BodyCategory::Asteroid));

        let moons = LabelPolicy { show_all: true, filter: NameFilter::Moon };
        assert!(!moons.shows(BodyCategory::Planet));
        assert!(moons.shows(BodyCategory::Moon));
    }

    #[test]
    fn one_record_per_planet_and_moon() {
        let (reg, ids, cam) = scene();
        let mut out = Vec::new();
        project_labels(&reg, &ids, &cam, LabelPolicy::default(), &mut out);
        assert_eq!(out.len(), 18);
        assert!(!out.iter().any(|l| l.id == ids[BodyId(0).0].as_f32()));
    }

    #[test]
    fn toggle_off_hides_every_label() {
        let (reg, ids, cam) = scene();
        let mut out = Vec::new();
        project_labels(&reg, &ids, &cam, LabelPolicy { show_all: true, filter: NameFilter::All }, &mut out);
        assert!(out.iter().all(|l| l.is_visible()));

        out.clear();
        project_labels(&reg, &ids, &cam, LabelPolicy { show_all: false, filter: NameFilter::All }, &mut out);
        assert_eq!(out.len(), 18);
        assert!(out.iter().all(|l| !l.is_visible()));
    }

    #[test]
    fn planet_filter_shows_only_planets() {
        let (reg, ids, cam) = scene();
        let mut out = Vec::new();
        project_labels(&reg, &ids, &cam, LabelPolicy { show_all: true, filter: NameFilter::Planet }, &mut out);
        assert_eq!(out.iter().filter(|l| l.is_visible()).count(), 9);
    }

    #[test]
    fn projection_is_deterministic() {
        let (reg, _, cam) = scene();
        let earth = reg.find(BodyCategory::Planet, "Earth").unwrap();
        let pos = reg.position(earth).unwrap();
        assert_eq!(project(pos, &cam), project(pos, &cam));
    }

    #[test]
    fn label_sits_at_projected_position() {
        let (reg, ids, cam) = scene();
        let mars = reg.find(BodyCategory::Planet, "Mars").unwrap();
        let mut out = Vec::new();
        project_labels(&reg, &ids, &cam, LabelPolicy { show_all: true, filter: NameFilter::All }, &mut out);
        let label = out.iter().find(|l| l.id == ids[mars.0].as_f32()).unwrap();
        let expected = project(reg.position(mars).unwrap(), &cam);
        assert_eq!((label.x, label.y), (expected.x, expected.y));
    }
}
