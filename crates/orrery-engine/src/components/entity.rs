use glam::Vec3;
use crate::api::types::EntityId;

/// Fat Entity: a single struct with the fields the renderer needs.
/// Every entity is drawn as a sphere-bounded object; the renderer decides
/// what mesh to attach based on the tag.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Rotation about the world Y axis in radians.
    pub rotation_y: f32,
    /// Uniform scale multiplier applied on top of `radius`.
    pub scale: f32,
    /// Bounding sphere radius in world units (before scale).
    pub radius: f32,
    /// Whether pointer picking considers this entity.
    pub pickable: bool,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation_y: 0.0,
            scale: 1.0,
            radius: 1.0,
            pickable: true,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation_y(mut self, rotation_y: f32) -> Self {
        self.rotation_y = rotation_y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_pickable(mut self, pickable: bool) -> Self {
        self.pickable = pickable;
        self
    }

    /// World-space bounding sphere radius.
    pub fn world_radius(&self) -> f32 {
        self.radius * self.scale
    }
}
