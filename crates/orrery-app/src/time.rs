//! Frame time resource.

use bevy_ecs::prelude::*;

/// Longest frame the simulation will integrate in one step. Longer frames
/// (a stalled tab, a debugger pause) are clamped rather than replayed.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Per-frame timing, written once at the start of each frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameTime {
    /// Wall-clock seconds elapsed since the previous frame, after clamping.
    pub delta: f32,
    /// Sum of all deltas so far.
    pub elapsed: f64,
    /// Frames completed.
    pub frame: u64,
}

impl FrameTime {
    /// Record the start of a new frame.
    pub fn begin_frame(&mut self, delta: f32) {
        self.delta = delta;
        self.elapsed += f64::from(delta);
    }

    /// Record the end of the current frame.
    pub fn end_frame(&mut self) {
        self.frame += 1;
    }
}
