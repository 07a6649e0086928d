//! Frame systems, one per stage.

use bevy_ecs::prelude::*;
use orrery_camera::FocusController;
use orrery_input::{DisplayState, InputError, InputEvent, InteractionDispatcher};
use orrery_sim::{BodySet, SimulationClock};

use crate::time::FrameTime;

/// Input waiting for the next input stage, plus what the last run rejected.
#[derive(Resource, Debug, Default)]
pub struct PendingInput {
    queue: Vec<InputEvent>,
    rejected: Vec<InputError>,
}

impl PendingInput {
    /// Queue `event` for the next input stage.
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Errors from the most recent input stage, oldest first.
    pub fn take_rejected(&mut self) -> Vec<InputError> {
        std::mem::take(&mut self.rejected)
    }
}

/// Drain queued input through the dispatcher.
pub fn input_system(
    mut pending: ResMut<PendingInput>,
    bodies: Res<BodySet>,
    mut dispatcher: ResMut<InteractionDispatcher>,
    mut controller: ResMut<FocusController>,
    mut clock: ResMut<SimulationClock>,
    mut display: ResMut<DisplayState>,
) {
    let events = std::mem::take(&mut pending.queue);
    for event in events {
        if let Err(err) =
            dispatcher.dispatch(event, &bodies, &mut controller, &mut clock, &mut display)
        {
            pending.rejected.push(err);
        }
    }
}

/// Advance the clock and every body by this frame's delta.
pub fn orbit_system(
    time: Res<FrameTime>,
    mut clock: ResMut<SimulationClock>,
    mut bodies: ResMut<BodySet>,
) {
    clock.advance(time.delta);
    let speed = clock.speed();
    bodies.advance(time.delta, speed);
}

/// Advance the camera against the bodies' post-orbit transforms.
pub fn camera_system(
    time: Res<FrameTime>,
    bodies: Res<BodySet>,
    mut controller: ResMut<FocusController>,
    mut clock: ResMut<SimulationClock>,
) {
    controller.tick(time.delta, &bodies, &mut clock);
}
