//! Pointer events on rendered bodies and the per-body hover flags they drive.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use orrery_sim::{Body, BodyKind};

/// A pointer event the presentation surface raised on a body mesh.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer entered the body.
    Over(String),
    /// Pointer left the body.
    Out(String),
    /// Body was clicked.
    Click(String),
}

impl PointerEvent {
    /// Name of the body the event targets.
    pub fn body(&self) -> &str {
        match self {
            PointerEvent::Over(name) | PointerEvent::Out(name) | PointerEvent::Click(name) => name,
        }
    }
}

/// Which bodies are under the pointer. Purely presentational.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    hovered: HashSet<&'static str>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a body hovered. Returns true if the flag changed.
    pub fn set_hovered(&mut self, name: &'static str, hovered: bool) -> bool {
        if hovered {
            self.hovered.insert(name)
        } else {
            self.hovered.remove(name)
        }
    }

    /// True while the pointer is over `name`.
    pub fn is_hovered(&self, name: &str) -> bool {
        self.hovered.contains(name)
    }

    /// Whether the presentation should draw the highlight ring.
    ///
    /// Any hovered body is highlighted; the sun also stays highlighted while
    /// it is the focused body.
    pub fn is_highlighted(&self, body: &Body, focused: Option<&str>) -> bool {
        self.is_hovered(body.name) || (body.kind == BodyKind::Star && focused == Some(body.name))
    }

    /// Number of hovered bodies.
    pub fn len(&self) -> usize {
        self.hovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hovered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_sim::Registry;

    #[test]
    fn test_hover_toggles() {
        let mut hover = HoverState::new();
        assert!(hover.set_hovered("Earth", true));
        assert!(!hover.set_hovered("Earth", true));
        assert!(hover.is_hovered("Earth"));
        assert!(hover.set_hovered("Earth", false));
        assert!(!hover.is_hovered("Earth"));
        assert!(hover.is_empty());
    }

    #[test]
    fn test_sun_highlighted_while_focused() {
        let registry = Registry::default();
        let hover = HoverState::new();
        let sun = registry.get("Sun").unwrap();
        let earth = registry.get("Earth").unwrap();

        assert!(hover.is_highlighted(sun, Some("Sun")));
        assert!(!hover.is_highlighted(sun, None));
        // planets only highlight on hover
        assert!(!hover.is_highlighted(earth, Some("Earth")));
    }

    #[test]
    fn test_hovered_planet_highlighted() {
        let registry = Registry::default();
        let mut hover = HoverState::new();
        hover.set_hovered("Venus", true);
        assert!(hover.is_highlighted(registry.get("Venus").unwrap(), None));
    }

    #[test]
    fn test_event_body_name() {
        assert_eq!(PointerEvent::Click("Earth".into()).body(), "Earth");
        assert_eq!(PointerEvent::Out("Sun".into()).body(), "Sun");
    }
}
