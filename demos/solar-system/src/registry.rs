/// Body registry: a flat arena built once from the catalog.
///
/// Parents always precede their children, so a single forward pass can
/// advance the whole system. Moons point at their planet by `BodyId`.

use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

use crate::bodies::{BeltDesc, BodyCatalog};
use crate::orbit::{self, CircularOrbit};

/// Index into the registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyCategory {
    Star,
    Planet,
    Moon,
    Asteroid,
}

/// Immutable strings shown on hover. Empty means "not available".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayInfo {
    pub size: String,
    pub temperature: String,
    pub distance: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyKind {
    Star { spin_speed: f64, info: DisplayInfo },
    Planet { orbit: CircularOrbit, spin_speed: f64, info: DisplayInfo },
    Moon { orbit: CircularOrbit, parent: BodyId, info: DisplayInfo },
    /// Asteroids carry no display strings; `height` is a fixed Y offset.
    Asteroid { orbit: CircularOrbit, height: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub kind: BodyKind,
    /// Unscaled sphere radius.
    pub radius: f32,
    pub position: Vec3,
    /// Accumulated self-rotation about Y. Stays 0 for moons and asteroids.
    pub spin_angle: f64,
}

impl CelestialBody {
    pub fn category(&self) -> BodyCategory {
        match self.kind {
            BodyKind::Star { .. } => BodyCategory::Star,
            BodyKind::Planet { .. } => BodyCategory::Planet,
            BodyKind::Moon { .. } => BodyCategory::Moon,
            BodyKind::Asteroid { .. } => BodyCategory::Asteroid,
        }
    }

    pub fn orbit(&self) -> Option<&CircularOrbit> {
        match &self.kind {
            BodyKind::Star { .. } => None,
            BodyKind::Planet { orbit, .. }
            | BodyKind::Moon { orbit, .. }
            | BodyKind::Asteroid { orbit, .. } => Some(orbit),
        }
    }

    pub fn info(&self) -> Option<&DisplayInfo> {
        match &self.kind {
            BodyKind::Star { info, .. } | BodyKind::Planet { info, .. } | BodyKind::Moon { info, .. } => Some(info),
            BodyKind::Asteroid { .. } => None,
        }
    }

    pub fn parent(&self) -> Option<BodyId> {
        match self.kind {
            BodyKind::Moon { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

fn million_km(distance: f64) -> String {
    format!("{distance} million km")
}

pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    /// Build the arena: star, then each planet followed by its moons, then
    /// the belt. Initial orbit angles come from `rng`.
    pub fn from_catalog<R: Rng>(catalog: &BodyCatalog, rng: &mut R) -> Self {
        let mut bodies = Vec::with_capacity(catalog.body_count());

        let star = &catalog.star;
        bodies.push(CelestialBody {
            name: star.name.clone(),
            kind: BodyKind::Star {
                spin_speed: star.self_rotation_speed,
                info: DisplayInfo {
                    size: star.size.clone(),
                    temperature: star.temperature.clone(),
                    distance: "0 km".to_string(),
                },
            },
            radius: star.radius,
            position: Vec3::ZERO,
            spin_angle: 0.0,
        });

        for planet in &catalog.planets {
            let parent = BodyId(bodies.len());
            bodies.push(CelestialBody {
                name: planet.name.clone(),
                kind: BodyKind::Planet {
                    orbit: CircularOrbit::new(planet.distance, planet.speed, rng.random_range(0.0..TAU)),
                    spin_speed: planet.self_rotation_speed,
                    info: DisplayInfo {
                        size: planet.size.clone(),
                        temperature: planet.temperature.clone(),
                        distance: million_km(planet.distance),
                    },
                },
                radius: planet.radius,
                position: Vec3::ZERO,
                spin_angle: 0.0,
            });

            for moon in &planet.moons {
                bodies.push(CelestialBody {
                    name: moon.name.clone(),
                    kind: BodyKind::Moon {
                        orbit: CircularOrbit::new(moon.distance, moon.speed, rng.random_range(0.0..TAU)),
                        parent,
                        info: DisplayInfo {
                            size: moon.size.clone(),
                            temperature: moon.temperature.clone(),
                            distance: million_km(moon.distance),
                        },
                    },
                    radius: moon.radius,
                    position: Vec3::ZERO,
                    spin_angle: 0.0,
                });
            }
        }

        if let Some(belt) = &catalog.belt {
            push_belt(&mut bodies, belt, rng);
        }

        let mut registry = Self { bodies };
        orbit::advance_all(&mut registry, 0.0);
        registry
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn position(&self, id: BodyId) -> Option<Vec3> {
        self.get(id).map(|b| b.position)
    }

    /// Position of the body's parent, or the origin when it has none.
    pub fn parent_position(&self, id: BodyId) -> Vec3 {
        self.get(id)
            .and_then(|b| b.parent())
            .and_then(|p| self.position(p))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn ids_of(&self, category: BodyCategory) -> impl Iterator<Item = BodyId> + '_ {
        self.iter().filter(move |(_, b)| b.category() == category).map(|(id, _)| id)
    }

    pub fn count(&self, category: BodyCategory) -> usize {
        self.ids_of(category).count()
    }

    /// Look a body up by category and name.
    pub fn find(&self, category: BodyCategory, name: &str) -> Option<BodyId> {
        self.iter()
            .find(|(_, b)| b.category() == category && b.name == name)
            .map(|(id, _)| id)
    }
}

fn push_belt<R: Rng>(bodies: &mut Vec<CelestialBody>, belt: &BeltDesc, rng: &mut R) {
    for n in 0..belt.count {
        let radius = rng.random_range(belt.inner_radius..=belt.outer_radius);
        let angle = rng.random_range(0.0..TAU);
        let height = rng.random_range(-belt.max_height..=belt.max_height);
        let speed = rng.random_range(belt.min_speed..=belt.max_speed);
        let size = rng.random_range(belt.min_size..=belt.max_size);
        bodies.push(CelestialBody {
            name: format!("Asteroid {}", n + 1),
            kind: BodyKind::Asteroid { orbit: CircularOrbit::new(radius, speed, angle), height },
            radius: size,
            position: Vec3::ZERO,
            spin_angle: 0.0,
        });
    }
}
