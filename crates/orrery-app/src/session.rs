//! The session facade: one world, one schedule, commands in, snapshots out.

use bevy_ecs::prelude::*;
use tracing::{info, warn};

use orrery_camera::{CameraPose, FocusController};
use orrery_config::Config;
use orrery_input::{DisplayState, InputError, InputEvent, InteractionDispatcher, PointerEvent};
use orrery_sim::{BodySet, Registry, SimulationClock};

use crate::error::AppError;
use crate::schedule::{FrameSchedules, FrameStage};
use crate::snapshot::{BodySnapshot, CameraSnapshot, FrameSnapshot};
use crate::systems::PendingInput;
use crate::time::{FrameTime, MAX_FRAME_TIME};
use crate::world::{build_schedules, create_world};

/// A running orrery.
///
/// Commands take effect immediately: each one is queued and the input stage
/// runs before the call returns, so a cancel can never be outlived by the
/// transition it cancels.
pub struct Orrery {
    world: World,
    schedules: FrameSchedules,
    fov_degrees: f32,
}

impl Orrery {
    /// Build a session from a validated config.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        config.validate()?;
        let registry_len = Registry::from_config(&config.simulation).len();
        info!(
            bodies = registry_len,
            speed = config.simulation.default_speed,
            "orrery session created"
        );
        Ok(Self {
            world: create_world(config),
            schedules: build_schedules(),
            fov_degrees: config.camera.fov_degrees,
        })
    }

    /// Adopt a reloaded config's camera, focus and display settings.
    ///
    /// Speed presets and body scale shape the world itself and are only
    /// read when the session is created.
    pub fn apply_config(&mut self, config: &Config) -> Result<(), AppError> {
        config.validate()?;
        self.fov_degrees = config.camera.fov_degrees;
        self.world.resource_mut::<FocusController>().retune(config);
        self.world.resource_mut::<DisplayState>().rings_visible = config.display.show_orbit_rings;
        info!(
            transition = config.focus.transition_seconds,
            fov = config.camera.fov_degrees,
            rings = config.display.show_orbit_rings,
            "session settings updated"
        );
        Ok(())
    }

    /// Presentation mounted its camera at `pose`.
    ///
    /// Mounting again ends any focus and gives back a held speed.
    pub fn attach_camera(&mut self, pose: CameraPose) {
        self.world
            .resource_scope(|world, mut clock: Mut<SimulationClock>| {
                world
                    .resource_mut::<FocusController>()
                    .attach_camera(pose, &mut clock);
            });
    }

    /// Attach a camera at the configured default framing.
    pub fn attach_default_camera(&mut self) {
        let pose = self.world.resource::<FocusController>().default_pose();
        self.attach_camera(pose);
    }

    /// Apply one input event now.
    ///
    /// The queue is drained on every call and every frame, so the input
    /// stage sees exactly this event and rejects it at most once.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<(), InputError> {
        self.world.resource_mut::<PendingInput>().push(event);
        self.schedules.run_stage(FrameStage::Input, &mut self.world);
        let mut rejected = self.world.resource_mut::<PendingInput>().take_rejected();
        debug_assert!(rejected.len() <= 1, "one event, {} rejections", rejected.len());
        match rejected.pop() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Fly to `name` and pause the clock until the camera arrives.
    pub fn focus(&mut self, name: &str) -> Result<(), InputError> {
        self.dispatch(InputEvent::Focus(name.to_string()))
    }

    /// Hover or click on a body.
    pub fn pointer(&mut self, event: PointerEvent) -> Result<(), InputError> {
        self.dispatch(InputEvent::Pointer(event))
    }

    /// Fly back to the default framing and drop focus.
    pub fn reset_camera(&mut self) {
        self.dispatch_infallible(InputEvent::ResetCamera);
    }

    /// The user grabbed the camera.
    pub fn on_user_control_start(&mut self) {
        self.dispatch_infallible(InputEvent::UserControlStart);
    }

    /// Pick a speed preset by value.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), InputError> {
        self.dispatch(InputEvent::SetSpeed(speed))
    }

    /// Pick a speed preset by slider position.
    pub fn set_speed_index(&mut self, index: usize) -> Result<(), InputError> {
        self.dispatch(InputEvent::SetSpeedIndex(index))
    }

    /// Flip ring visibility, returning the new value.
    pub fn toggle_rings(&mut self) -> bool {
        self.dispatch_infallible(InputEvent::ToggleRings);
        self.display().rings_visible
    }

    fn dispatch_infallible(&mut self, event: InputEvent) {
        let result = self.dispatch(event);
        debug_assert!(result.is_ok(), "command cannot be rejected: {result:?}");
    }

    /// Run one frame of `dt` real seconds.
    pub fn step(&mut self, dt: f32) {
        let mut dt = dt.max(0.0);
        if dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            dt = MAX_FRAME_TIME;
        }
        self.world.resource_mut::<FrameTime>().begin_frame(dt);
        self.schedules.run(&mut self.world);
        self.world.resource_mut::<FrameTime>().end_frame();
    }

    /// Copy out everything the presentation reads.
    pub fn snapshot(&self) -> FrameSnapshot {
        let controller = self.controller();
        let clock = self.clock();
        let hover = self.world.resource::<InteractionDispatcher>().hover();
        let registry = self.world.resource::<Registry>();
        let time = self.world.resource::<FrameTime>();
        let focused = controller.focused();

        let bodies = self
            .bodies()
            .iter()
            .map(|state| {
                let body = state.body();
                BodySnapshot {
                    name: body.name,
                    position: state.position().to_array(),
                    rotation_y: state.rotation_y(),
                    hovered: hover.is_hovered(body.name),
                    highlighted: hover.is_highlighted(body, focused),
                }
            })
            .collect();

        FrameSnapshot {
            frame: time.frame,
            elapsed: time.elapsed,
            bodies,
            camera: controller
                .camera()
                .map(|pose| CameraSnapshot::new(pose, self.fov_degrees)),
            focused,
            focused_info: focused.and_then(|name| registry.info(name)).copied(),
            speed: clock.speed(),
            speed_index: clock.preset_index(),
            rings_visible: self.display().rings_visible,
            transitioning: controller.is_transitioning(),
        }
    }

    /// Read-only views of the session resources.
    pub fn controller(&self) -> &FocusController {
        self.world.resource::<FocusController>()
    }

    /// Speed and elapsed time.
    pub fn clock(&self) -> &SimulationClock {
        self.world.resource::<SimulationClock>()
    }

    /// Current body transforms.
    pub fn bodies(&self) -> &BodySet {
        self.world.resource::<BodySet>()
    }

    pub fn display(&self) -> &DisplayState {
        self.world.resource::<DisplayState>()
    }

    /// The underlying ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }
}
