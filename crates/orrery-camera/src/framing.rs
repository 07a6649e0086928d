//! Where to put the camera to look at a body.

use glam::Vec3;
use orrery_config::FocusConfig;
use orrery_sim::{BodyKind, BodyTransform};

use crate::transition::CameraPose;

/// Offsets used to frame a focused body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Fixed offset from the sun.
    pub sun_offset: Vec3,
    /// Base outward distance from a planet.
    pub distance_multiplier: f32,
    /// Extra outward distance per unit of planet size.
    pub size_distance_factor: f32,
    /// Height above a planet per unit of planet size.
    pub height_multiplier: f32,
}

impl Framing {
    /// Offsets and multipliers from the focus settings.
    pub fn from_config(config: &FocusConfig) -> Self {
        Self {
            sun_offset: Vec3::from_array(config.sun_offset),
            distance_multiplier: config.planet_distance_multiplier,
            size_distance_factor: config.planet_size_distance_factor,
            height_multiplier: config.planet_height_multiplier,
        }
    }

    /// Camera pose that frames a body at its current transform.
    ///
    /// The sun gets a fixed offset. A planet is viewed from outside its
    /// orbit, along the radial direction of its current angle, slightly
    /// above the orbital plane.
    pub fn frame(&self, kind: BodyKind, transform: &BodyTransform) -> CameraPose {
        let target = transform.position;
        let position = match kind {
            BodyKind::Star => target + self.sun_offset,
            BodyKind::Planet => {
                let outward = Vec3::new(
                    transform.angle.cos() as f32,
                    0.0,
                    transform.angle.sin() as f32,
                );
                let distance = self.distance_multiplier + transform.size * self.size_distance_factor;
                let height = transform.size * self.height_multiplier;
                target + outward * distance + Vec3::Y * height
            }
        };
        CameraPose { position, target }
    }
}

impl Default for Framing {
    fn default() -> Self {
        Self::from_config(&FocusConfig::default())
    }
}
