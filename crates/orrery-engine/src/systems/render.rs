use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Inactive entities are skipped entirely.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        buffer.push(RenderInstance {
            id: entity.id.as_f32(),
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation_y: entity.rotation_y,
            scale: entity.scale,
            radius: entity.radius,
            visible: 1.0,
        });
    }
}
