/// Body catalog: the static description the scene is built from.
///
/// Radii, distances and speeds are scene units, not physical ones. The
/// display strings (size, temperature) are carried through untouched for
/// the hover panel.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ── Descriptions ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub star: StarDesc,
    #[serde(default)]
    pub planets: Vec<PlanetDesc>,
    #[serde(default)]
    pub belt: Option<BeltDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDesc {
    pub name: String,
    pub radius: f32,
    #[serde(default)]
    pub self_rotation_speed: f64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub temperature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDesc {
    pub name: String,
    pub radius: f32,
    /// Orbital radius around the star.
    pub distance: f64,
    /// Orbital angular speed baseline (radians per tick before scaling).
    pub speed: f64,
    #[serde(default)]
    pub self_rotation_speed: f64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub moons: Vec<MoonDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonDesc {
    pub name: String,
    pub radius: f32,
    /// Orbital radius around the parent planet.
    pub distance: f64,
    pub speed: f64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub temperature: String,
}

/// Parameters for the randomly generated asteroid belt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltDesc {
    pub count: usize,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub min_size: f32,
    pub max_size: f32,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Vertical displacement is drawn from `[-max_height, max_height]`.
    pub max_height: f32,
}

impl Default for BeltDesc {
    fn default() -> Self {
        Self {
            count: 300,
            inner_radius: 180.0,
            outer_radius: 240.0,
            min_size: 0.2,
            max_size: 0.7,
            min_speed: 0.0005,
            max_speed: 0.002,
            max_height: 2.0,
        }
    }
}

// ── Built-in table ───────────────────────────────────────────────────

fn moon(name: &str, radius: f32, distance: f64, speed: f64, temperature: &str, size: &str) -> MoonDesc {
    MoonDesc {
        name: name.to_string(),
        radius,
        distance,
        speed,
        size: size.to_string(),
        temperature: temperature.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn planet(
    name: &str,
    radius: f32,
    distance: f64,
    speed: f64,
    self_rotation_speed: f64,
    size: &str,
    temperature: &str,
    moons: Vec<MoonDesc>,
) -> PlanetDesc {
    PlanetDesc {
        name: name.to_string(),
        radius,
        distance,
        speed,
        self_rotation_speed,
        size: size.to_string(),
        temperature: temperature.to_string(),
        moons,
    }
}

impl BodyCatalog {
    /// The default scene: Sun, nine planets, nine moons, 300 asteroids.
    pub fn builtin() -> Self {
        Self {
            star: StarDesc {
                name: "Sun".to_string(),
                radius: 20.0,
                self_rotation_speed: 0.001,
                size: "1,392,700 km".to_string(),
                temperature: "5505°C".to_string(),
            },
            planets: vec![
                planet("Mercury", 5.0, 40.0, 4.15, 0.005, "4,879 km", "167°C", vec![]),
                planet("Venus", 9.0, 70.0, 1.62, 0.002, "12,104 km", "464°C", vec![]),
                planet("Earth", 10.0, 100.0, 1.0, 0.02, "12,742 km", "15°C", vec![
                    moon("Moon", 2.7, 15.0, 2.5, "−20°C", "3,474 km"),
                ]),
                planet("Mars", 7.0, 150.0, 0.53, 0.018, "6,779 km", "−60°C", vec![
                    moon("Phobos", 1.5, 7.0, 4.0, "−40°C", "22 km"),
                    moon("Deimos", 1.0, 12.0, 3.5, "−40°C", "12 km"),
                ]),
                planet("Jupiter", 18.0, 250.0, 0.08, 0.04, "139,820 km", "−108°C", vec![
                    moon("Io", 3.0, 25.0, 1.8, "110°C", "3,643 km"),
                    moon("Europa", 2.5, 30.0, 1.3, "−160°C", "3,121 km"),
                ]),
                planet("Saturn", 15.0, 400.0, 0.03, 0.03, "116,460 km", "−139°C", vec![
                    moon("Titan", 4.0, 35.0, 1.1, "−179°C", "5,151 km"),
                ]),
                planet("Uranus", 12.0, 600.0, 0.01, 0.025, "50,724 km", "−195°C", vec![
                    moon("Titania", 2.0, 20.0, 0.8, "−200°C", "1,578 km"),
                ]),
                planet("Neptune", 11.0, 800.0, 0.006, 0.03, "49,244 km", "−200°C", vec![
                    moon("Triton", 2.5, 15.0, 0.7, "−235°C", "2,706 km"),
                ]),
                planet("Pluto", 4.0, 1000.0, 0.002, 0.01, "2,376 km", "−225°C", vec![
                    moon("Charon", 1.5, 10.0, 0.5, "−210°C", "1,212 km"),
                ]),
            ],
            belt: Some(BeltDesc::default()),
        }
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn moon_count(&self) -> usize {
        self.planets.iter().map(|p| p.moons.len()).sum()
    }

    pub fn asteroid_count(&self) -> usize {
        self.belt.as_ref().map_or(0, |b| b.count)
    }

    /// Total number of bodies the registry will hold.
    pub fn body_count(&self) -> usize {
        1 + self.planets.len() + self.moon_count() + self.asteroid_count()
    }

    /// Check names and numeric ranges.
    ///
    /// Speeds may be zero or negative; they only have to be finite.
    pub fn validate(&self) -> Result<(), CatalogError> {
        positive(&self.star.name, "radius", self.star.radius as f64)?;
        finite(&self.star.name, "self_rotation_speed", self.star.self_rotation_speed)?;

        let mut planet_names = HashSet::new();
        let mut moon_names = HashSet::new();
        for p in &self.planets {
            if !planet_names.insert(p.name.as_str()) {
                return Err(CatalogError::DuplicateName { category: "planet", name: p.name.clone() });
            }
            positive(&p.name, "radius", p.radius as f64)?;
            non_negative(&p.name, "distance", p.distance)?;
            finite(&p.name, "speed", p.speed)?;
            finite(&p.name, "self_rotation_speed", p.self_rotation_speed)?;

            for m in &p.moons {
                if !moon_names.insert(m.name.as_str()) {
                    return Err(CatalogError::DuplicateName { category: "moon", name: m.name.clone() });
                }
                positive(&m.name, "radius", m.radius as f64)?;
                non_negative(&m.name, "distance", m.distance)?;
                finite(&m.name, "speed", m.speed)?;
            }
        }

        if let Some(belt) = &self.belt {
            ordered("radius", belt.inner_radius, belt.outer_radius)?;
            ordered("size", belt.min_size as f64, belt.max_size as f64)?;
            ordered("speed", belt.min_speed, belt.max_speed)?;
            non_negative("asteroid belt", "inner_radius", belt.inner_radius)?;
            positive("asteroid belt", "min_size", belt.min_size as f64)?;
            non_negative("asteroid belt", "max_height", belt.max_height as f64)?;
        }
        Ok(())
    }
}

// ── Validation helpers ───────────────────────────────────────────────

fn invalid(name: &str, field: &'static str, requirement: &'static str, value: f64) -> CatalogError {
    CatalogError::InvalidValue { name: name.to_string(), field, requirement, value }
}

fn finite(name: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, field, "finite", value))
    }
}

fn positive(name: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, field, "positive", value))
    }
}

fn non_negative(name: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, field, "non-negative", value))
    }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), CatalogError> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(invalid("asteroid belt", field, "finite", if min.is_finite() { max } else { min }));
    }
    if min > max {
        return Err(CatalogError::InvertedRange { field, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_counts() {
        let catalog = BodyCatalog::builtin();
        assert_eq!(catalog.planets.len(), 9);
        assert_eq!(catalog.moon_count(), 9);
        assert_eq!(catalog.asteroid_count(), 300);
        assert_eq!(catalog.body_count(), 319);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn builtin_mercury_values() {
        let catalog = BodyCatalog::builtin();
        let mercury = &catalog.planets[0];
        assert_eq!(mercury.name, "Mercury");
        assert_eq!(mercury.distance, 40.0);
        assert_eq!(mercury.speed, 4.15);
        assert!(mercury.moons.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_catalog() {
        let catalog = BodyCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(BodyCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "star": { "name": "Sol", "radius": 10 },
            "planets": [
                { "name": "Rock", "radius": 2, "distance": 50, "speed": 1,
                  "moons": [ { "name": "Pebble", "radius": 0.5, "distance": 4, "speed": 2 } ] }
            ]
        }"#;
        let catalog = BodyCatalog::from_json(json).unwrap();
        assert!(catalog.belt.is_none());
        assert_eq!(catalog.planets[0].self_rotation_speed, 0.0);
        assert_eq!(catalog.planets[0].moons[0].size, "");
        assert_eq!(catalog.body_count(), 3);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = BodyCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn duplicate_planet_name_rejected() {
        let mut catalog = BodyCatalog::builtin();
        catalog.planets[1].name = "Mercury".to_string();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { category: "planet", .. }));
    }

    #[test]
    fn same_name_in_different_categories_is_fine() {
        let mut catalog = BodyCatalog::builtin();
        catalog.planets[2].moons[0].name = "Mars".to_string();
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn non_finite_speed_rejected_but_negative_allowed() {
        let mut catalog = BodyCatalog::builtin();
        catalog.planets[0].speed = -4.15;
        assert!(catalog.validate().is_ok());
        catalog.planets[0].speed = f64::NAN;
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { field: "speed", .. }));
    }

    #[test]
    fn zero_radius_rejected() {
        let mut catalog = BodyCatalog::builtin();
        catalog.planets[3].moons[1].radius = 0.0;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("Deimos"));
    }

    #[test]
    fn inverted_belt_rejected() {
        let mut catalog = BodyCatalog::builtin();
        if let Some(belt) = catalog.belt.as_mut() {
            belt.inner_radius = 300.0;
        }
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::InvertedRange { field: "radius", .. }));
    }
}
