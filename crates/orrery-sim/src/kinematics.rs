//! Fixed-rate circular orbits and self-rotation, advanced once per frame.
//!
//! Each body keeps its own mutable angle and spin. Consumers never get a
//! handle to that record; they read [`BodyTransform`] copies instead.

use bevy_ecs::prelude::*;
use glam::Vec3;

use crate::registry::{Body, Registry};

/// Height of the orbital plane.
pub const ORBIT_PLANE_Y: f32 = 0.0;

/// Immutable per-frame view of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransform {
    /// World position.
    pub position: Vec3,
    /// Spin about the Y axis in radians.
    pub rotation_y: f64,
    /// Current orbital angle in radians. Zero for the sun.
    pub angle: f64,
    /// Visual radius, carried along so framing needs no registry lookup.
    pub size: f32,
}

/// Advance an orbital angle and spin by one frame.
///
/// Positive orbital rates move clockwise when viewed from +Y, hence the sign
/// flip on the angle. Returns `(angle, rotation_y)`.
pub fn step_orbit(
    angle: f64,
    rotation_y: f64,
    dt: f64,
    orbital_rate: f64,
    rotation_rate: f64,
    speed: f64,
) -> (f64, f64) {
    (
        angle + dt * orbital_rate * speed * -1.0,
        rotation_y + dt * rotation_rate * speed,
    )
}

/// Position on a circular orbit of `radius` at `angle`.
pub fn orbit_position(angle: f64, radius: f32) -> Vec3 {
    let r = f64::from(radius);
    Vec3::new((angle.cos() * r) as f32, ORBIT_PLANE_Y, (angle.sin() * r) as f32)
}

/// Mutable kinematic record for one body.
#[derive(Clone, Debug)]
pub struct BodyState {
    body: Body,
    angle: f64,
    rotation_y: f64,
    position: Vec3,
}

impl BodyState {
    /// Place a body at its initial angle with no spin.
    pub fn new(body: Body) -> Self {
        let angle = if body.orbits() { body.initial_angle } else { 0.0 };
        Self {
            body,
            angle,
            rotation_y: 0.0,
            position: orbit_position(angle, body.orbital_radius),
        }
    }

    /// Static configuration.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Orbital angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Spin about +Y in radians.
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// Position on the orbital plane.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Advance by `dt` real seconds at `speed`. A zero speed freezes the body.
    pub fn advance(&mut self, dt: f32, speed: f64) {
        if speed == 0.0 {
            return;
        }
        let orbital_rate = if self.body.orbits() {
            self.body.orbital_rate
        } else {
            0.0
        };
        let (angle, rotation_y) = step_orbit(
            self.angle,
            self.rotation_y,
            f64::from(dt),
            orbital_rate,
            self.body.rotation_rate,
            speed,
        );
        self.rotation_y = rotation_y;
        if self.body.orbits() {
            self.angle = angle;
            self.position = orbit_position(angle, self.body.orbital_radius);
        }
    }

    /// Snapshot for consumers.
    pub fn transform(&self) -> BodyTransform {
        BodyTransform {
            position: self.position,
            rotation_y: self.rotation_y,
            angle: self.angle,
            size: self.body.size,
        }
    }
}

/// Kinematic state of every body, in catalog order.
#[derive(Resource, Clone, Debug)]
pub struct BodySet {
    states: Vec<BodyState>,
}

impl BodySet {
    /// One state per registry entry.
    pub fn new(registry: &Registry) -> Self {
        Self {
            states: registry.iter().copied().map(BodyState::new).collect(),
        }
    }

    /// Advance every body by one frame.
    pub fn advance(&mut self, dt: f32, speed: f64) {
        for state in &mut self.states {
            state.advance(dt, speed);
        }
    }

    /// State for a body, if known.
    pub fn get(&self, name: &str) -> Option<&BodyState> {
        self.states.iter().find(|s| s.body.name == name)
    }

    /// Transform for a body, if known.
    pub fn transform(&self, name: &str) -> Option<BodyTransform> {
        self.get(name).map(BodyState::transform)
    }

    /// All transforms in catalog order.
    pub fn transforms(&self) -> impl Iterator<Item = (&'static str, BodyTransform)> + '_ {
        self.states.iter().map(|s| (s.body.name, s.transform()))
    }

    /// Bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BodySpec, CATALOG};
    use std::f64::consts::FRAC_PI_2;

    fn bodies() -> BodySet {
        BodySet::new(&Registry::default())
    }

    #[test]
    fn test_step_orbit_formula() {
        let (angle, rot) = step_orbit(0.5, 1.0, 0.1, 2.0, 3.0, 4.0);
        assert!((angle - (0.5 - 0.1 * 2.0 * 4.0)).abs() < 1e-12);
        assert!((rot - (1.0 + 0.1 * 3.0 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_orbit_position_on_circle() {
        let p = orbit_position(FRAC_PI_2, 10.0);
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, ORBIT_PLANE_Y);
        assert!((p.z - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_initial_positions_at_angle_zero() {
        let set = bodies();
        let earth = set.transform("Earth").unwrap();
        assert!((earth.position - Vec3::new(17.55, 0.0, 0.0)).length() < 1e-4);
        assert_eq!(set.transform("Sun").unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_angle_advance_is_linear_in_ticks() {
        let mut set = bodies();
        let earth0 = set.transform("Earth").unwrap();
        let rate = set.get("Earth").unwrap().body().orbital_rate;
        let (dt, speed, n) = (1.0_f32 / 60.0, 50.0, 600);

        for _ in 0..n {
            set.advance(dt, speed);
        }

        let expected = earth0.angle - rate * speed * f64::from(dt) * n as f64;
        let angle = set.transform("Earth").unwrap().angle;
        assert!((angle - expected).abs() < 1e-9, "angle={angle} expected={expected}");
    }

    #[test]
    fn test_negative_speed_reverses_motion() {
        let mut forward = bodies();
        let mut backward = bodies();
        forward.advance(1.0, 10.0);
        backward.advance(1.0, -10.0);
        let f = forward.transform("Mercury").unwrap().angle;
        let b = backward.transform("Mercury").unwrap().angle;
        assert!((f + b).abs() < 1e-12);
        assert!(f < 0.0);
    }

    #[test]
    fn test_zero_speed_freezes_everything() {
        let mut set = bodies();
        set.advance(1.0, 5.0);
        let before: Vec<_> = set.transforms().collect();
        for _ in 0..100 {
            set.advance(0.5, 0.0);
        }
        let after: Vec<_> = set.transforms().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sun_only_rotates() {
        let mut set = bodies();
        set.advance(2.0, 1.0);
        let sun = set.transform("Sun").unwrap();
        assert_eq!(sun.position, Vec3::ZERO);
        assert_eq!(sun.angle, 0.0);
        assert!((sun.rotation_y - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_retrograde_spin() {
        let mut set = bodies();
        set.advance(1.0, 1.0);
        assert!(set.transform("Venus").unwrap().rotation_y < 0.0);
        assert!(set.transform("Earth").unwrap().rotation_y > 0.0);
    }

    #[test]
    fn test_planets_stay_on_their_orbits() {
        let mut set = bodies();
        for _ in 0..1000 {
            set.advance(0.1, 200.0);
        }
        for state in set.iter().filter(|s| s.body().orbits()) {
            let r = state.position().length();
            assert!(
                (r - state.body().orbital_radius).abs() < 1e-3,
                "{} drifted to r={r}",
                state.body().name
            );
        }
    }

    #[test]
    fn test_retrograde_orbit_advances_the_other_way() {
        let earth = CATALOG[3];
        assert_eq!(earth.name, "Earth");
        let retro = BodySpec {
            name: "Retro",
            orbital_period_days: Some(-365.0),
            ..earth
        };

        let mut set = BodySet::new(&Registry::from_specs(&[earth, retro], 0.15));
        let rate = set.get("Retro").unwrap().body().orbital_rate;
        assert!((rate + 1.0 / 365.0).abs() < 1e-12);

        for _ in 0..60 {
            set.advance(1.0 / 60.0, 10.0);
        }
        let prograde = set.transform("Earth").unwrap().angle;
        let retrograde = set.transform("Retro").unwrap().angle;
        assert!(prograde < 0.0);
        assert!(retrograde > 0.0);
        assert!((prograde + retrograde).abs() < 1e-12);
    }

    #[test]
    fn test_transform_carries_size() {
        let set = bodies();
        assert!((set.transform("Mercury").unwrap().size - 0.057).abs() < 1e-6);
    }
}
