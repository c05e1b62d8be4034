use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use crate::api::types::EntityId;

/// Screen-space anchor for an overlay text label.
/// Wire format (4 floats): `[id, x, y, visible]`. The renderer looks up the
/// label text once per id and only moves/toggles it per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LabelInstance {
    pub id: f32,
    /// Viewport pixels, origin top-left.
    pub x: f32,
    pub y: f32,
    /// 1.0 shown, 0.0 hidden.
    pub visible: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 4;

    pub fn shown(id: EntityId, at: Vec2) -> Self {
        Self { id: id.as_f32(), x: at.x, y: at.y, visible: 1.0 }
    }

    pub fn hidden(id: EntityId) -> Self {
        Self { id: id.as_f32(), x: 0.0, y: 0.0, visible: 0.0 }
    }

    pub fn is_visible(&self) -> bool {
        self.visible > 0.5
    }
}
