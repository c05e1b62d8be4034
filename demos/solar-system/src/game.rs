/// Solar System: interactive orrery on circular orbits.
///
/// Per frame: input, orbit advance, camera follow, orbit controls, labels,
/// then lights and UI events. Everything runs once per rendered frame;
/// there is no fixed timestep.

use glam::{Vec2, Vec3};
use orrery_engine::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::bodies::BodyCatalog;
use crate::clock::ClockReading;
use crate::controls::OrbitControls;
use crate::labels::{self, LabelPolicy, NameFilter};
use crate::orbit;
use crate::registry::{BodyCategory, BodyId, BodyRegistry};
use crate::state::SimulationState;

// ── Custom event kinds from the UI ───────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 1;
const CUSTOM_SET_SIZE_SCALE: u32 = 2;
const CUSTOM_SET_SHOW_LABELS: u32 = 3;
const CUSTOM_SET_NAME_FILTER: u32 = 4;
const CUSTOM_CLEAR_FOLLOW: u32 = 5;
const CUSTOM_SET_ZOOM: u32 = 6;
const CUSTOM_SET_EXTERNAL_LIGHT: u32 = 7;

const KEY_ESCAPE: u32 = 27;

// ── Game event kinds to the UI ───────────────────────────────────────

const EVENT_HOVER: f32 = 1.0;
const EVENT_HOVER_END: f32 = 2.0;
const EVENT_CLOCK: f32 = 3.0;
const EVENT_FOLLOW: f32 = 4.0;

// ── Scene defaults ───────────────────────────────────────────────────

const DEFAULT_SEED: u64 = 0x0_5eed_2024;
const INITIAL_CAMERA: Vec3 = Vec3::new(0.0, -300.0, 150.0);

const SUN_LIGHT_INTENSITY: f32 = 2.0;
const EXTERNAL_LIGHT_POS: Vec3 = Vec3::new(100.0, 100.0, 100.0);
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Placeholder for display fields a body does not have.
const NOT_AVAILABLE: &str = "N/A";

/// Scene construction inputs.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    pub catalog: BodyCatalog,
    /// Seeds initial orbit angles and the asteroid belt.
    pub seed: u64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self { catalog: BodyCatalog::builtin(), seed: DEFAULT_SEED }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ExternalLight {
    enabled: bool,
    intensity: f32,
}

/// Hover readback payload for `get_entity_info`.
#[derive(Debug, Serialize)]
struct BodyInfo<'a> {
    name: &'a str,
    kind: BodyCategory,
    radius: f32,
    size: &'a str,
    temperature: &'a str,
    distance: String,
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

// ── Game struct ──────────────────────────────────────────────────────

pub struct Orrery {
    registry: BodyRegistry,
    /// Scene entity per body, indexed by `BodyId`.
    entities: Vec<EntityId>,
    state: SimulationState,
    labels: LabelPolicy,
    controls: OrbitControls,
    external_light: ExternalLight,
    hovered: Option<BodyId>,
    /// Last follow target reported to the UI.
    announced_follow: Option<BodyId>,
    earth: Option<BodyId>,
}

impl Orrery {
    pub fn new() -> Self {
        Self::with_config(OrreryConfig::default())
    }

    pub fn with_config(config: OrreryConfig) -> Self {
        let catalog = match config.catalog.validate() {
            Ok(()) => config.catalog,
            Err(err) => {
                log::warn!("invalid body catalog, using built-in: {err}");
                BodyCatalog::builtin()
            }
        };
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let registry = BodyRegistry::from_catalog(&catalog, &mut rng);
        let earth = registry.find(BodyCategory::Planet, "Earth");
        Self {
            entities: Vec::with_capacity(registry.len()),
            registry,
            state: SimulationState::new(),
            labels: LabelPolicy::default(),
            controls: OrbitControls::new(),
            external_light: ExternalLight { enabled: false, intensity: 1.0 },
            hovered: None,
            announced_follow: None,
            earth,
        }
    }

    fn body_of(&self, entity: EntityId) -> Option<BodyId> {
        self.entities.iter().position(|e| *e == entity).map(BodyId)
    }

    fn entity_of(&self, body: BodyId) -> Option<EntityId> {
        self.entities.get(body.0).copied()
    }

    /// Nearest body under a viewport pixel.
    fn pick(&self, ctx: &EngineContext, at: Vec2) -> Option<BodyId> {
        let ray = ctx.camera.screen_ray(at);
        ctx.scene.pick(&ray).and_then(|entity| self.body_of(entity))
    }

    // ── Input ────────────────────────────────────────────────────────

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => self.state.set_speed(a as f64),
            CUSTOM_SET_SIZE_SCALE => self.state.set_size_scale(a),
            CUSTOM_SET_SHOW_LABELS => self.labels.show_all = a != 0.0,
            CUSTOM_SET_NAME_FILTER => match NameFilter::from_wire(a) {
                Some(filter) => self.labels.filter = filter,
                None => log::warn!("ignoring unknown name filter {a}"),
            },
            CUSTOM_CLEAR_FOLLOW => self.cancel_follow(),
            CUSTOM_SET_ZOOM => self.apply_zoom_preset(ctx, a),
            CUSTOM_SET_EXTERNAL_LIGHT => {
                self.external_light.enabled = a != 0.0;
                if b.is_finite() && b >= 0.0 {
                    self.external_light.intensity = b;
                } else {
                    log::warn!("ignoring external light intensity {b}");
                }
            }
            _ => log::warn!("unknown custom event kind {kind}"),
        }
    }

    /// Preset camera distance. Ignored while following a body.
    fn apply_zoom_preset(&mut self, ctx: &mut EngineContext, zoom: f32) {
        if !zoom.is_finite() {
            log::warn!("ignoring zoom {zoom}");
            return;
        }
        if self.state.follow.is_following() {
            return;
        }
        ctx.camera.position = Vec3::new(0.0, -zoom * 3.0, zoom * 1.5);
    }

    fn cancel_follow(&mut self) {
        if self.state.follow.cancel() {
            log::debug!("follow: released");
        }
    }

    fn hover(&mut self, ctx: &mut EngineContext, at: Vec2) {
        match self.pick(ctx, at) {
            Some(body) if self.hovered != Some(body) => {
                self.hovered = Some(body);
                if let Some(entity) = self.entity_of(body) {
                    ctx.emit_event(GameEvent::new(EVENT_HOVER, entity.as_f32(), at.x, at.y));
                }
            }
            Some(_) => {}
            None => {
                if self.hovered.take().is_some() {
                    ctx.emit_event(GameEvent::new(EVENT_HOVER_END, 0.0, 0.0, 0.0));
                }
            }
        }
    }

    fn click(&mut self, ctx: &EngineContext, at: Vec2) {
        let Some(body) = self.pick(ctx, at) else {
            return;
        };
        let Some(target_pos) = self.registry.position(body) else {
            return;
        };
        if self.state.follow.select(body, ctx.camera.position, target_pos) {
            log::debug!("follow: {}", self.registry.get(body).map_or("?", |b| b.name.as_str()));
        } else {
            log::debug!("follow: released");
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, b, .. } => self.handle_custom(ctx, kind, a, b),
                InputEvent::KeyDown { key_code: KEY_ESCAPE } => self.cancel_follow(),
                InputEvent::PointerDown { x, y, button } => self.controls.pointer_down(Vec2::new(x, y), button),
                InputEvent::PointerMove { x, y } => {
                    let at = Vec2::new(x, y);
                    self.controls.pointer_move(at, ctx.camera.viewport_height);
                    self.hover(ctx, at);
                }
                InputEvent::PointerUp { x, y } => {
                    if let Some(at) = self.controls.pointer_up(Vec2::new(x, y)) {
                        self.click(ctx, at);
                    }
                }
                InputEvent::Wheel { delta } => self.controls.wheel(delta),
                InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => {}
            }
        }
    }

    // ── Output ───────────────────────────────────────────────────────

    /// Copy body state into scene entities. The scene holds exactly the
    /// registry's bodies, spawned in registry order.
    fn sync_scene(&self, ctx: &mut EngineContext) {
        let size_scale = self.state.size_scale();
        for (entity, (_, body)) in ctx.scene.iter_mut().zip(self.registry.iter()) {
            entity.pos = body.position;
            entity.rotation_y = body.spin_angle as f32;
            entity.scale = match body.category() {
                BodyCategory::Planet => size_scale,
                _ => 1.0,
            };
        }
    }

    fn rebuild_lights(&self, ctx: &mut EngineContext) {
        ctx.lights.clear();
        let star = self.registry.position(BodyId(0)).unwrap_or(Vec3::ZERO);
        ctx.lights.add(Light::point(star, WHITE, SUN_LIGHT_INTENSITY));
        if self.external_light.enabled {
            ctx.lights.add(Light::directional(EXTERNAL_LIGHT_POS, WHITE, self.external_light.intensity));
        }
    }

    fn emit_clock(&self, ctx: &mut EngineContext) {
        let Some(earth) = self.earth.and_then(|id| self.registry.get(id)) else {
            return;
        };
        let orbit_angle = earth.orbit().map_or(0.0, |o| o.angle);
        let clock = ClockReading::from_angles(earth.spin_angle, orbit_angle);
        ctx.emit_event(GameEvent::new(
            EVENT_CLOCK,
            clock.minute_of_day() as f32,
            clock.days as f32,
            clock.years as f32,
        ));
    }

    fn emit_follow_change(&mut self, ctx: &mut EngineContext) {
        let target = self.state.follow.target();
        if target == self.announced_follow {
            return;
        }
        self.announced_follow = target;
        let id = target.and_then(|b| self.entity_of(b)).map_or(-1.0, |e| e.as_f32());
        ctx.emit_event(GameEvent::new(EVENT_FOLLOW, id, 0.0, 0.0));
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        let labelled = self
            .registry
            .iter()
            .filter(|(_, b)| labels::is_labelled(b.category()))
            .count();
        GameConfig {
            camera_position: INITIAL_CAMERA,
            camera_target: Vec3::ZERO,
            max_instances: self.registry.len().max(512),
            max_labels: labelled.max(64),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.entities.clear();
        for (_, body) in self.registry.iter() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.name.as_str())
                    .with_pos(body.position)
                    .with_radius(body.radius)
                    .with_rotation_y(body.spin_angle as f32),
            );
            self.entities.push(id);
        }
        self.rebuild_lights(ctx);

        log::info!(
            "orrery: {} planets, {} moons, {} asteroids",
            self.registry.count(BodyCategory::Planet),
            self.registry.count(BodyCategory::Moon),
            self.registry.count(BodyCategory::Asteroid),
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        orbit::advance_all(&mut self.registry, self.state.speed());

        self.state.follow.update(&mut ctx.camera, &self.registry);
        if self.controls.update(&mut ctx.camera) {
            self.state.follow.on_camera_manipulated(ctx.camera.position, &self.registry);
        }

        self.sync_scene(ctx);
        labels::project_labels(&self.registry, &self.entities, &ctx.camera, self.labels, &mut ctx.labels);

        self.rebuild_lights(ctx);
        self.emit_clock(ctx);
        self.emit_follow_change(ctx);
    }

    fn entity_info(&self, id: EntityId) -> Option<String> {
        let body = self.registry.get(self.body_of(id)?)?;
        let info = body.info();
        let distance = match (info, body.orbit()) {
            (Some(info), _) => or_na(&info.distance).to_string(),
            (None, Some(orbit)) => orbit.radius.to_string(),
            (None, None) => NOT_AVAILABLE.to_string(),
        };
        let payload = BodyInfo {
            name: &body.name,
            kind: body.category(),
            radius: body.radius,
            size: info.map_or(NOT_AVAILABLE, |i| or_na(&i.size)),
            temperature: info.map_or(NOT_AVAILABLE, |i| or_na(&i.temperature)),
            distance,
        };
        serde_json::to_string(&payload).ok()
    }
}
