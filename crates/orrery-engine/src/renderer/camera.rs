use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera for 3D scenes.
/// Right-handed, Y-up, OpenGL clip depth (-1..1) so NDC matches the
/// browser-side renderer exactly.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
    /// Up direction (usually +Y).
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
}

/// A ray in world space. `dir` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Distance along the ray to the first intersection with a sphere,
    /// or `None` if the sphere is missed or entirely behind the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        let far = -b + s;
        if far < 0.0 {
            return None;
        }
        let near = -b - s;
        Some(if near >= 0.0 { near } else { far })
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Camera snapshot for the renderer.
/// Wire format (12 floats): `[px, py, pz, tx, ty, tz, fov_y, near, far, aspect, 0, 0]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
    pub _pad: [f32; 2],
}

impl CameraUniform {
    pub const FLOATS: usize = 12;
}

impl Camera3D {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 3000.0,
            viewport_width,
            viewport_height,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    pub fn with_lens(mut self, fov_y_degrees: f32, near: f32, far: f32) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self.near = near;
        self.far = far;
        self
    }

    /// Resize the viewport (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect(),
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World position to normalized device coordinates (with perspective divide).
    /// Points behind the camera are not clipped; their NDC is mirrored.
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// NDC to viewport pixels, origin top-left, Y down.
    pub fn ndc_to_screen(&self, ndc: Vec3) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.viewport_width,
            (-ndc.y * 0.5 + 0.5) * self.viewport_height,
        )
    }

    /// World position to viewport pixels.
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        self.ndc_to_screen(self.project(world))
    }

    /// Viewport pixels to NDC (x, y only).
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / self.viewport_width) * 2.0 - 1.0,
            -(screen.y / self.viewport_height) * 2.0 + 1.0,
        )
    }

    /// Picking ray from the eye through a viewport pixel.
    pub fn screen_ray(&self, screen: Vec2) -> Ray {
        let ndc = self.screen_to_ndc(screen);
        let inv = self.view_projection().inverse();
        let through = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray {
            origin: self.position,
            dir: (through - self.position).normalize_or_zero(),
        }
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            target: self.target.to_array(),
            fov_y_degrees: self.fov_y_degrees,
            near: self.near,
            far: self.far,
            aspect: self.aspect(),
            _pad: [0.0; 2],
        }
    }
}
