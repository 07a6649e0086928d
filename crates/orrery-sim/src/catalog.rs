//! The fixed body catalog: one table for scale multipliers, rates, and overlay text.

use serde::Serialize;

/// Whether a body sits at the center or travels on an orbit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BodyKind {
    /// The central star. Never orbits, only spins.
    Star,
    /// An orbiting body.
    Planet,
}

/// Descriptive text shown by the info overlay for a focused body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BodyInfo {
    /// Time for one orbit around the sun.
    pub orbital_period: &'static str,
    /// Time for one turn about the body's own axis.
    pub rotation_period: &'static str,
    /// Mean distance from the sun.
    pub distance: &'static str,
    /// Equatorial diameter.
    pub diameter: &'static str,
}

/// Static description of a catalog entry, in catalog units.
///
/// Scene sizes and orbital radii are these multipliers times the configured
/// base scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    /// Unique display name, also the lookup key.
    pub name: &'static str,
    /// Star or planet.
    pub kind: BodyKind,
    /// Visual radius multiplier.
    pub size_multiplier: f32,
    /// Orbital radius multiplier. Zero for the star.
    pub radius_multiplier: f32,
    /// Self-rotation in radians per simulated second. Negative is retrograde.
    pub rotation_rate: f64,
    /// Orbital period in days; `None` for bodies that do not orbit.
    pub orbital_period_days: Option<f64>,
    /// Orbital angle at startup, radians.
    pub initial_angle: f64,
    /// Overlay text.
    pub info: BodyInfo,
}

/// Every body in the system, in presentation order.
pub const CATALOG: [BodySpec; 4] = [
    BodySpec {
        name: "Sun",
        kind: BodyKind::Star,
        size_multiplier: 10.0,
        radius_multiplier: 0.0,
        rotation_rate: 0.04,
        orbital_period_days: None,
        initial_angle: 0.0,
        info: BodyInfo {
            orbital_period: "NA",
            rotation_period: "25-35 days",
            distance: "NA",
            diameter: "1,392,700 km",
        },
    },
    BodySpec {
        name: "Mercury",
        kind: BodyKind::Planet,
        size_multiplier: 0.38,
        radius_multiplier: 45.0,
        rotation_rate: 0.017,
        orbital_period_days: Some(88.0),
        initial_angle: 0.0,
        info: BodyInfo {
            orbital_period: "88 days",
            rotation_period: "59 days",
            distance: "57.9 million km",
            diameter: "4,880 km",
        },
    },
    BodySpec {
        name: "Venus",
        kind: BodyKind::Planet,
        size_multiplier: 0.95,
        radius_multiplier: 84.0,
        rotation_rate: -0.0041,
        orbital_period_days: Some(224.0),
        initial_angle: 0.0,
        info: BodyInfo {
            orbital_period: "224.7 days",
            rotation_period: "243 days",
            distance: "108.2 million km",
            diameter: "12,104 km",
        },
    },
    BodySpec {
        name: "Earth",
        kind: BodyKind::Planet,
        size_multiplier: 1.0,
        radius_multiplier: 117.0,
        rotation_rate: 1.0,
        orbital_period_days: Some(365.0),
        initial_angle: 0.0,
        info: BodyInfo {
            orbital_period: "365.2 days",
            rotation_period: "24 hours",
            distance: "149.6 million km",
            diameter: "12,742 km",
        },
    },
];

impl BodySpec {
    /// Orbital angular rate in radians per simulated second.
    ///
    /// Earth's spin rate is 1 rad/s, so one simulated day is `TAU` seconds
    /// and a period of `n` days maps to `1 / n` rad/s.
    pub fn orbital_rate(&self) -> f64 {
        match self.orbital_period_days {
            Some(days) if days != 0.0 => 1.0 / days,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_only_the_sun_is_a_star() {
        let stars: Vec<_> = CATALOG
            .iter()
            .filter(|s| s.kind == BodyKind::Star)
            .map(|s| s.name)
            .collect();
        assert_eq!(stars, vec!["Sun"]);
    }

    #[test]
    fn test_star_does_not_orbit() {
        let sun = &CATALOG[0];
        assert_eq!(sun.radius_multiplier, 0.0);
        assert_eq!(sun.orbital_rate(), 0.0);
    }

    #[test]
    fn test_orbital_rate_is_inverse_period() {
        let earth = CATALOG.iter().find(|s| s.name == "Earth").unwrap();
        assert!((earth.orbital_rate() - 1.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_period_gives_negative_rate() {
        let spec = BodySpec {
            orbital_period_days: Some(-88.0),
            ..CATALOG[1]
        };
        assert!((spec.orbital_rate() + 1.0 / 88.0).abs() < 1e-12);
    }

    #[test]
    fn test_venus_spins_retrograde() {
        let venus = CATALOG.iter().find(|s| s.name == "Venus").unwrap();
        assert!(venus.rotation_rate < 0.0);
    }
}
