//! Read-only frame view for the presentation surface and the info overlay.

use serde::Serialize;

use orrery_camera::CameraPose;
use orrery_sim::BodyInfo;

/// One body as the renderer needs it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub name: &'static str,
    pub position: [f32; 3],
    pub rotation_y: f64,
    pub hovered: bool,
    /// Draw the highlight ring.
    pub highlighted: bool,
}

/// Camera pose as plain arrays, plus the lens the renderer should use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraSnapshot {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl CameraSnapshot {
    /// Flatten `pose` for output.
    pub fn new(pose: CameraPose, fov_degrees: f32) -> Self {
        Self {
            position: pose.position.to_array(),
            target: pose.target.to_array(),
            fov_degrees,
        }
    }
}

/// Everything the presentation reads after a frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    /// Real seconds since the session started.
    pub elapsed: f64,
    pub bodies: Vec<BodySnapshot>,
    /// `None` until the presentation attaches a camera.
    pub camera: Option<CameraSnapshot>,
    pub focused: Option<&'static str>,
    /// Overlay text for the focused body.
    pub focused_info: Option<BodyInfo>,
    pub speed: f64,
    /// Slider position for `speed`.
    pub speed_index: Option<usize>,
    pub rings_visible: bool,
    pub transitioning: bool,
}

impl FrameSnapshot {
    /// Look up one body by name.
    pub fn body(&self, name: &str) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.name == name)
    }
}
