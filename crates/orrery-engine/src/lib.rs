pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use core::scene::Scene;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{Camera3D, CameraUniform, Ray};
pub use renderer::label::LabelInstance;
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use bridge::protocol::{ProtocolLayout, FrameCounts, LIGHT_FLOATS, DEFAULT_MAX_LIGHTS};
pub use systems::render::build_render_buffer;
pub use systems::lighting::{Light, LightKind, LightState};
