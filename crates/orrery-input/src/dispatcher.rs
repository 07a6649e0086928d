//! Routes UI and pointer input to the component that owns the affected state.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use orrery_camera::{FocusController, FocusError};
use orrery_config::DisplayConfig;
use orrery_sim::{BodySet, ClockError, SimulationClock};

use crate::pointer::{HoverState, PointerEvent};

/// Everything the user can do between frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Hover or click on a body.
    Pointer(PointerEvent),
    /// Focus a body by name (e.g. from a menu).
    Focus(String),
    /// Return the camera to its default framing.
    ResetCamera,
    /// The user started dragging or zooming the camera.
    UserControlStart,
    /// Pick a speed preset by value.
    SetSpeed(f64),
    /// Pick a speed preset by slider position.
    SetSpeedIndex(usize),
    /// Show or hide the orbital guide rings.
    ToggleRings,
}

/// Input that could not be applied. State is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Focus(#[from] FocusError),
    #[error(transparent)]
    Clock(#[from] ClockError),
    /// Hover event for a name that is not in the catalog.
    #[error("pointer event on unknown body `{0}`")]
    UnknownPointerTarget(String),
}

/// Presentation toggles the core owns.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    /// Whether orbital guide rings are drawn.
    pub rings_visible: bool,
}

impl DisplayState {
    /// Initial toggles from the display settings.
    pub fn from_config(config: &DisplayConfig) -> Self {
        Self {
            rings_visible: config.show_orbit_rings,
        }
    }

    /// Flip ring visibility, returning the new value.
    pub fn toggle_rings(&mut self) -> bool {
        self.rings_visible = !self.rings_visible;
        self.rings_visible
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Stateless router apart from the per-body hover flags.
#[derive(Resource, Clone, Debug, Default)]
pub struct InteractionDispatcher {
    hover: HoverState,
}

impl InteractionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-body hover flags.
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Apply one input event.
    ///
    /// Rejected events are logged at `warn` and returned as errors; nothing
    /// is modified in that case.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        bodies: &BodySet,
        controller: &mut FocusController,
        clock: &mut SimulationClock,
        display: &mut DisplayState,
    ) -> Result<(), InputError> {
        let result = self.apply(&event, bodies, controller, clock, display);
        if let Err(ref err) = result {
            warn!(?event, %err, "input rejected");
        }
        result
    }

    fn apply(
        &mut self,
        event: &InputEvent,
        bodies: &BodySet,
        controller: &mut FocusController,
        clock: &mut SimulationClock,
        display: &mut DisplayState,
    ) -> Result<(), InputError> {
        match event {
            InputEvent::Pointer(pointer) => self.pointer(pointer, bodies, controller, clock),
            InputEvent::Focus(name) => Ok(controller.focus(name, bodies, clock)?),
            InputEvent::ResetCamera => {
                controller.reset_camera();
                Ok(())
            }
            InputEvent::UserControlStart => {
                controller.on_user_control_start(clock);
                Ok(())
            }
            InputEvent::SetSpeed(speed) => {
                clock.set_speed(*speed)?;
                controller.release_held_speed();
                Ok(())
            }
            InputEvent::SetSpeedIndex(index) => {
                clock.set_speed_index(*index)?;
                controller.release_held_speed();
                Ok(())
            }
            InputEvent::ToggleRings => {
                let visible = display.toggle_rings();
                debug!(visible, "orbit rings toggled");
                Ok(())
            }
        }
    }

    fn pointer(
        &mut self,
        event: &PointerEvent,
        bodies: &BodySet,
        controller: &mut FocusController,
        clock: &mut SimulationClock,
    ) -> Result<(), InputError> {
        match event {
            PointerEvent::Click(name) => Ok(controller.focus(name, bodies, clock)?),
            PointerEvent::Over(name) | PointerEvent::Out(name) => {
                let state = bodies
                    .get(name)
                    .ok_or_else(|| InputError::UnknownPointerTarget(name.clone()))?;
                let hovered = matches!(event, PointerEvent::Over(_));
                self.hover.set_hovered(state.body().name, hovered);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_camera::FocusState;
    use orrery_sim::Registry;

    struct Harness {
        dispatcher: InteractionDispatcher,
        bodies: BodySet,
        controller: FocusController,
        clock: SimulationClock,
        display: DisplayState,
    }

    impl Harness {
        fn new() -> Self {
            let mut controller = FocusController::default();
            let mut clock = SimulationClock::default();
            let pose = controller.default_pose();
            controller.attach_camera(pose, &mut clock);
            Self {
                dispatcher: InteractionDispatcher::new(),
                bodies: BodySet::new(&Registry::default()),
                controller,
                clock,
                display: DisplayState::default(),
            }
        }

        fn send(&mut self, event: InputEvent) -> Result<(), InputError> {
            self.dispatcher.dispatch(
                event,
                &self.bodies,
                &mut self.controller,
                &mut self.clock,
                &mut self.display,
            )
        }
    }

    fn click(name: &str) -> InputEvent {
        InputEvent::Pointer(PointerEvent::Click(name.to_string()))
    }

    #[test]
    fn test_click_focuses_body() {
        let mut h = Harness::new();
        h.send(click("Earth")).unwrap();
        assert_eq!(h.controller.state(), FocusState::Focused("Earth"));
        assert_eq!(h.clock.speed(), 0.0);
    }

    #[test]
    fn test_click_unknown_body_changes_nothing() {
        let mut h = Harness::new();
        let err = h.send(click("Vulcan")).unwrap_err();
        assert_eq!(
            err,
            InputError::Focus(FocusError::UnknownBody("Vulcan".to_string()))
        );
        assert_eq!(h.controller.state(), FocusState::Free);
        assert_eq!(h.clock.speed(), 1.0);
    }

    #[test]
    fn test_hover_over_and_out() {
        let mut h = Harness::new();
        h.send(InputEvent::Pointer(PointerEvent::Over("Mercury".into())))
            .unwrap();
        assert!(h.dispatcher.hover().is_hovered("Mercury"));
        h.send(InputEvent::Pointer(PointerEvent::Out("Mercury".into())))
            .unwrap();
        assert!(!h.dispatcher.hover().is_hovered("Mercury"));
        // hovering never touches focus
        assert_eq!(h.controller.state(), FocusState::Free);
    }

    #[test]
    fn test_hover_unknown_body_rejected() {
        let mut h = Harness::new();
        assert!(
            h.send(InputEvent::Pointer(PointerEvent::Over("Nibiru".into())))
                .is_err()
        );
        assert!(h.dispatcher.hover().is_empty());
    }

    #[test]
    fn test_slider_index_zero() {
        let mut h = Harness::new();
        h.send(InputEvent::SetSpeedIndex(0)).unwrap();
        assert_eq!(h.clock.speed(), -500.0);
    }

    #[test]
    fn test_speed_outside_presets_rejected() {
        let mut h = Harness::new();
        assert!(h.send(InputEvent::SetSpeed(3.0)).is_err());
        assert_eq!(h.clock.speed(), 1.0);
    }

    #[test]
    fn test_speed_change_during_focus_wins() {
        let mut h = Harness::new();
        h.send(click("Venus")).unwrap();
        assert_eq!(h.controller.held_speed(), Some(1.0));
        h.send(InputEvent::SetSpeed(10.0)).unwrap();
        assert_eq!(h.controller.held_speed(), None);
        assert_eq!(h.clock.speed(), 10.0);
    }

    #[test]
    fn test_toggle_rings() {
        let mut h = Harness::new();
        assert!(h.display.rings_visible);
        h.send(InputEvent::ToggleRings).unwrap();
        assert!(!h.display.rings_visible);
        h.send(InputEvent::ToggleRings).unwrap();
        assert!(h.display.rings_visible);
    }

    #[test]
    fn test_user_control_and_reset_route_to_controller() {
        let mut h = Harness::new();
        h.send(click("Earth")).unwrap();
        h.send(InputEvent::UserControlStart).unwrap();
        assert_eq!(h.controller.state(), FocusState::Free);
        assert!(!h.controller.is_transitioning());

        h.send(InputEvent::ResetCamera).unwrap();
        assert!(h.controller.is_transitioning());
    }

    #[test]
    fn test_events_parse_from_ron() {
        let events: Vec<InputEvent> =
            ron::from_str(r#"[Pointer(Click("Earth")), SetSpeedIndex(0), ToggleRings]"#).unwrap();
        assert_eq!(events[0], click("Earth"));
        assert_eq!(events[1], InputEvent::SetSpeedIndex(0));
        assert_eq!(events[2], InputEvent::ToggleRings);
    }
}
