use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::{
    build_render_buffer, CameraUniform, EngineContext, EntityId, FrameCounts, Game, GameConfig,
    InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
///
/// One `tick()` is one animation frame: the game updates exactly once, so
/// per-frame smoothing in the game stays frame-rate dependent.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    camera: CameraUniform,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::from_config(&config),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            game,
            input: InputQueue::new(),
            layout,
            config,
            initialized: false,
            frame: 0,
            camera: CameraUniform::default(),
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.camera = self.ctx.camera.uniform();
        self.initialized = true;
        log::debug!(
            "runner: {} entities, buffer {} floats",
            self.ctx.scene.len(),
            self.layout.buffer_total_floats
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Viewport resize; takes effect for the next projection.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            log::warn!("runner: ignoring degenerate viewport {width}x{height}");
            return;
        }
        self.ctx.camera.resize(width, height);
    }

    /// Run one frame: update game once, then rebuild the output buffers.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input);
        self.input.clear();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();

        self.frame = self.frame.wrapping_add(1);
        let counts = FrameCounts {
            instances: self.render_buffer.instances.len(),
            labels: self.ctx.labels.len(),
            events: self.ctx.events.len(),
            lights: self.ctx.lights.count(),
        };
        self.header = self.layout.header(
            self.frame,
            counts,
            (self.ctx.camera.viewport_width, self.ctx.camera.viewport_height),
        );
    }

    pub fn entity_info(&self, id: u32) -> Option<String> {
        self.game.entity_info(EntityId(id))
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instances.len().min(self.layout.max_instances) as u32
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.ctx.labels.as_ptr() as *const f32
    }

    pub fn label_count(&self) -> u32 {
        self.ctx.labels.len().min(self.layout.max_labels) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.camera.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.camera.viewport_height
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.layout.max_labels as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
