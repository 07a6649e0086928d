//! Focus state machine and the single active camera transition.
//!
//! The controller owns the camera pose. It reads body transforms every tick
//! and never writes them. At most one [`CameraTransition`] is active; every
//! start or cancel bumps the generation so a replaced transition can never
//! write the camera again.

use bevy_ecs::prelude::*;
use glam::Vec3;
use orrery_config::Config;
use orrery_sim::{BodySet, SimulationClock};
use tracing::{debug, trace};

use crate::framing::Framing;
use crate::transition::{CameraPose, CameraTransition, EasingFunction, TransitionGoal};

/// Which body, if any, the camera is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusState {
    /// No body focused; the user drives the camera or it returns to the default framing.
    #[default]
    Free,
    /// The camera frames this body.
    Focused(&'static str),
}

impl FocusState {
    /// Name of the focused body, `None` when free.
    pub fn focused(&self) -> Option<&'static str> {
        match *self {
            FocusState::Free => None,
            FocusState::Focused(name) => Some(name),
        }
    }
}

/// Rejected focus requests. The controller state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FocusError {
    /// No body with this name exists.
    #[error("unknown body `{0}`")]
    UnknownBody(String),
    /// The presentation surface has not attached a camera yet.
    #[error("camera not attached")]
    CameraDetached,
}

/// What a call to [`FocusController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do (no camera, or free and idle).
    Idle,
    /// A transition advanced and is still running.
    InProgress,
    /// A transition reached its end this tick.
    Completed,
    /// No transition; the camera moved with the focused body.
    Following,
}

/// Owns the camera pose, the focus state, and the active transition.
#[derive(Resource, Debug, Clone)]
pub struct FocusController {
    framing: Framing,
    default_pose: CameraPose,
    duration: f32,
    easing: EasingFunction,
    camera: Option<CameraPose>,
    state: FocusState,
    active: Option<CameraTransition>,
    generation: u64,
    held_speed: Option<f64>,
    follow_anchor: Option<Vec3>,
}

impl FocusController {
    /// A detached controller. Nothing moves until [`attach_camera`](Self::attach_camera).
    pub fn new(
        default_pose: CameraPose,
        framing: Framing,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            framing,
            default_pose,
            duration,
            easing,
            camera: None,
            state: FocusState::Free,
            active: None,
            generation: 0,
            held_speed: None,
            follow_anchor: None,
        }
    }

    /// Default pose, framing, duration and easing from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CameraPose::new(
                Vec3::from_array(config.camera.default_position),
                Vec3::from_array(config.camera.default_target),
            ),
            Framing::from_config(&config.focus),
            config.focus.transition_seconds,
            config.focus.easing.into(),
        )
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current camera pose, `None` until a camera is attached.
    pub fn camera(&self) -> Option<CameraPose> {
        self.camera
    }

    /// Focus as the state machine sees it.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Name of the focused body.
    pub fn focused(&self) -> Option<&'static str> {
        self.state.focused()
    }

    /// True while a focus or reset flight is running.
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The single running transition, if any.
    pub fn active_transition(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    /// Bumped on every transition start or cancel.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Speed that will be restored when the pending transition completes.
    pub fn held_speed(&self) -> Option<f64> {
        self.held_speed
    }

    /// Where `reset_camera` flies to.
    pub fn default_pose(&self) -> CameraPose {
        self.default_pose
    }

    /// Per-body camera placement rules.
    pub fn framing(&self) -> &Framing {
        &self.framing
    }

    /// Adopt new camera and focus settings from a reloaded config.
    ///
    /// A running transition keeps its duration and easing; a tracked one
    /// picks up the new framing on its next tick.
    pub fn retune(&mut self, config: &Config) {
        let fresh = Self::from_config(config);
        self.framing = fresh.framing;
        self.default_pose = fresh.default_pose;
        self.duration = fresh.duration;
        self.easing = fresh.easing;
        debug!(
            duration = self.duration,
            easing = ?self.easing,
            "camera settings retuned"
        );
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Hand the controller a camera. Until then every command is a no-op.
    ///
    /// Re-attaching replaces the pose and ends any focus the way manual
    /// control does: the transition is dropped, the state goes `Free`, and a
    /// held pre-focus speed is restored.
    pub fn attach_camera(&mut self, pose: CameraPose, clock: &mut SimulationClock) {
        if self.camera.is_some() {
            self.release_focus(clock);
        }
        self.camera = Some(pose);
        debug!(position = ?pose.position, target = ?pose.target, "camera attached");
    }

    /// Start framing `name`, replacing any running transition.
    ///
    /// Pauses the clock; the speed that was running before the first pause is
    /// restored when the transition completes. Focusing the already-focused
    /// body restarts the transition.
    pub fn focus(
        &mut self,
        name: &str,
        bodies: &BodySet,
        clock: &mut SimulationClock,
    ) -> Result<(), FocusError> {
        let camera = self.camera.ok_or(FocusError::CameraDetached)?;
        let state = bodies
            .get(name)
            .ok_or_else(|| FocusError::UnknownBody(name.to_string()))?;
        let body = state.body();
        let end = self.framing.frame(body.kind, &state.transform());

        let prior = clock.pause();
        if self.held_speed.is_none() {
            self.held_speed = Some(prior);
        }

        self.begin(camera, TransitionGoal::Track(body.name), end);
        self.state = FocusState::Focused(body.name);
        self.follow_anchor = None;
        debug!(
            body = body.name,
            generation = self.generation,
            "focus transition started"
        );
        Ok(())
    }

    /// Return to the default framing and drop focus.
    pub fn reset_camera(&mut self) {
        let Some(camera) = self.camera else {
            trace!("reset ignored: camera not attached");
            return;
        };
        let goal = self.default_pose;
        self.begin(camera, TransitionGoal::Fixed(goal), goal);
        self.state = FocusState::Free;
        self.follow_anchor = None;
        debug!(generation = self.generation, "reset transition started");
    }

    /// The user grabbed the camera: stop everything and leave it where it is.
    ///
    /// A held pre-focus speed is restored right away.
    pub fn on_user_control_start(&mut self, clock: &mut SimulationClock) {
        if self.camera.is_none() {
            return;
        }
        self.release_focus(clock);
        debug!(generation = self.generation, "manual camera control");
    }

    /// Forget the held speed; the user picked a new one.
    pub fn release_held_speed(&mut self) -> Option<f64> {
        self.held_speed.take()
    }

    /// Advance the active transition, or follow the focused body once settled.
    pub fn tick(&mut self, dt: f32, bodies: &BodySet, clock: &mut SimulationClock) -> TickOutcome {
        let Some(camera) = self.camera else {
            return TickOutcome::Idle;
        };

        if let Some(mut transition) = self.active.take() {
            if transition.generation != self.generation {
                debug!(
                    stale = transition.generation,
                    current = self.generation,
                    "dropping stale transition"
                );
                return TickOutcome::Idle;
            }

            let end = self.resolve_end(&transition, bodies);
            let pose = transition.step(dt, end);
            self.camera = Some(pose);

            if !transition.is_complete() {
                self.active = Some(transition);
                return TickOutcome::InProgress;
            }

            if let Some(speed) = self.held_speed.take() {
                clock.resume(speed);
            }
            self.follow_anchor = self
                .state
                .focused()
                .and_then(|name| bodies.transform(name))
                .map(|t| t.position);
            debug!(generation = self.generation, "transition complete");
            return TickOutcome::Completed;
        }

        if let (Some(name), Some(anchor)) = (self.state.focused(), self.follow_anchor)
            && let Some(transform) = bodies.transform(name)
        {
            let delta = transform.position - anchor;
            self.camera = Some(camera.translated(delta));
            self.follow_anchor = Some(transform.position);
            return TickOutcome::Following;
        }

        TickOutcome::Idle
    }

    // ── Internals ───────────────────────────────────────────────────

    fn begin(&mut self, from: CameraPose, goal: TransitionGoal, end: CameraPose) {
        self.generation += 1;
        self.active = Some(CameraTransition::new(
            from,
            goal,
            end,
            self.duration,
            self.easing,
            self.generation,
        ));
    }

    fn release_focus(&mut self, clock: &mut SimulationClock) {
        self.cancel();
        self.state = FocusState::Free;
        self.follow_anchor = None;
        if let Some(speed) = self.held_speed.take() {
            clock.resume(speed);
        }
    }

    fn cancel(&mut self) {
        if let Some(t) = self.active.take() {
            trace!(generation = t.generation, "transition cancelled");
        }
        self.generation += 1;
    }

    fn resolve_end(&self, transition: &CameraTransition, bodies: &BodySet) -> CameraPose {
        match transition.goal {
            TransitionGoal::Fixed(pose) => pose,
            TransitionGoal::Track(name) => bodies
                .get(name)
                .map(|s| self.framing.frame(s.body().kind, &s.transform()))
                .unwrap_or(transition.end),
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
