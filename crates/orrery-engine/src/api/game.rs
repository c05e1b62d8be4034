use glam::Vec3;

use crate::api::types::{EntityId, GameEvent};
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::label::LabelInstance;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels (replaced on the first resize).
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    /// Near clip distance (default: 0.1).
    pub near: f32,
    /// Far clip distance (default: 3000).
    pub far: f32,
    /// Initial camera eye position.
    pub camera_position: Vec3,
    /// Initial camera look-at point.
    pub camera_target: Vec3,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of labels per frame (default: 64).
    pub max_labels: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of lights (default: 8).
    pub max_lights: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 3000.0,
            camera_position: Vec3::new(0.0, 0.0, 100.0),
            camera_target: Vec3::ZERO,
            max_instances: 512,
            max_labels: 64,
            max_events: 32,
            max_lights: DEFAULT_MAX_LIGHTS,
        }
    }
}

impl GameConfig {
    /// Build the initial camera described by this config.
    pub fn camera(&self) -> Camera3D {
        Camera3D::new(self.viewport_width, self.viewport_height)
            .with_lens(self.fov_y_degrees, self.near, self.far)
            .with_position(self.camera_position)
            .with_target(self.camera_target)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. Called exactly once per rendered frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// JSON description of an entity for UI readback (hover panels, label text).
    fn entity_info(&self, _id: EntityId) -> Option<String> {
        None
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub labels: Vec<LabelInstance>,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized and posed by a game's config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_instances),
            camera: config.camera(),
            labels: Vec::with_capacity(config.max_labels),
            lights: LightState::with_capacity(config.max_lights),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (events, labels).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.labels.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
