//! Camera focus controller: framing, eased transitions, and the focus state machine.

pub mod controller;
pub mod framing;
pub mod transition;

pub use controller::{FocusController, FocusError, FocusState, TickOutcome};
pub use framing::Framing;
pub use transition::{CameraPose, CameraTransition, EasingFunction, TransitionGoal};
