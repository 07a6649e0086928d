//! Scaled, read-only view of the catalog used by the rest of the session.

use bevy_ecs::prelude::*;
use orrery_config::SimulationConfig;

use crate::catalog::{BodyInfo, BodyKind, BodySpec, CATALOG};

/// A catalog entry resolved to scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Unique name.
    pub name: &'static str,
    /// Star or planet.
    pub kind: BodyKind,
    /// Visual radius in scene units.
    pub size: f32,
    /// Distance from the sun in scene units.
    pub orbital_radius: f32,
    /// Self-rotation rate, radians per simulated second.
    pub rotation_rate: f64,
    /// Orbital rate, radians per simulated second.
    pub orbital_rate: f64,
    /// Orbital angle at startup.
    pub initial_angle: f64,
    /// Overlay text.
    pub info: BodyInfo,
}

impl Body {
    fn from_spec(spec: &BodySpec, base_scale: f32) -> Self {
        Self {
            name: spec.name,
            kind: spec.kind,
            size: spec.size_multiplier * base_scale,
            orbital_radius: spec.radius_multiplier * base_scale,
            rotation_rate: spec.rotation_rate,
            orbital_rate: spec.orbital_rate(),
            initial_angle: spec.initial_angle,
            info: spec.info,
        }
    }

    /// True for bodies that travel on an orbit.
    pub fn orbits(&self) -> bool {
        self.kind == BodyKind::Planet && self.orbital_radius > 0.0
    }
}

/// Ordered catalog of bodies. Immutable once built.
#[derive(Resource, Clone, Debug)]
pub struct Registry {
    bodies: Vec<Body>,
}

impl Registry {
    /// Scale the built-in catalog by `base_scale`.
    pub fn new(base_scale: f32) -> Self {
        Self::from_specs(&CATALOG, base_scale)
    }

    /// Build from an explicit catalog.
    pub fn from_specs(specs: &[BodySpec], base_scale: f32) -> Self {
        Self {
            bodies: specs
                .iter()
                .map(|spec| Body::from_spec(spec, base_scale))
                .collect(),
        }
    }

    /// Build from the simulation section of the config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.base_scale)
    }

    /// Look up a body by name.
    pub fn get(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Overlay text for a body.
    pub fn info(&self, name: &str) -> Option<&BodyInfo> {
        self.get(name).map(|b| &b.info)
    }

    /// True if `name` is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bodies in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bodies.iter().map(|b| b.name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}
