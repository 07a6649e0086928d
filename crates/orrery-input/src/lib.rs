//! Interaction dispatch: pointer hover/click on bodies and the UI commands.

pub mod dispatcher;
pub mod pointer;

pub use dispatcher::{DisplayState, InputError, InputEvent, InteractionDispatcher};
pub use pointer::{HoverState, PointerEvent};
