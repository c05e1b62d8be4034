/// Light list for the 3D renderer.
///
/// Games rebuild the list each frame (it is tiny). The engine serializes
/// active lights to the SAB for the renderer's lighting setup.

use glam::Vec3;

/// Kind discriminant written into the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    /// Omnidirectional light at a position. Falloff distance is the
    /// renderer's choice.
    Point,
    /// Parallel light arriving from `position` toward the origin.
    Directional,
}

impl LightKind {
    fn wire(self) -> f32 {
        match self {
            LightKind::Point => 0.0,
            LightKind::Directional => 1.0,
        }
    }
}

/// A scene light.
///
/// Wire format (8 floats / 32 bytes):
/// `[kind, x, y, z, r, g, b, intensity]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Light {
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
}

impl Light {
    /// Point light at `pos`.
    pub fn point(pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self::new(LightKind::Point, pos, color, intensity)
    }

    /// Directional light shining from `from` toward the origin.
    pub fn directional(from: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self::new(LightKind::Directional, from, color, intensity)
    }

    fn new(kind: LightKind, pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            kind: kind.wire(),
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
        }
    }

    pub fn kind(&self) -> LightKind {
        if self.kind > 0.5 {
            LightKind::Directional
        } else {
            LightKind::Point
        }
    }

    pub fn pos(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Lights active this frame.
pub struct LightState {
    lights: Vec<Light>,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self { lights: Vec::with_capacity(max_lights) }
    }

    pub fn add(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
