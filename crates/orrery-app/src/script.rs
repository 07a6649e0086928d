//! Frame-indexed input scripts for headless runs.
//!
//! A script is a RON list of steps:
//!
//! ```ron
//! [
//!     (frame: 0, event: Pointer(Over("Earth"))),
//!     (frame: 1, event: Pointer(Click("Earth"))),
//!     (frame: 200, event: SetSpeedIndex(0)),
//!     (frame: 260, event: UserControlStart),
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use orrery_input::InputEvent;

use crate::error::AppError;

/// One event and the frame before which it is applied.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScriptStep {
    pub frame: u64,
    pub event: InputEvent,
}

/// Steps sorted by frame; equal frames keep file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    /// Sort `steps` by frame, stable for equal frames.
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|s| s.frame);
        Self { steps }
    }

    /// Parse a RON step list.
    pub fn parse(source: &str) -> Result<Self, AppError> {
        let steps: Vec<ScriptStep> = ron::from_str(source).map_err(AppError::ScriptParse)?;
        Ok(Self::new(steps))
    }

    /// Read and parse a script file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path).map_err(|source| AppError::ScriptRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Events scheduled for `frame`.
    pub fn events_at(&self, frame: u64) -> impl Iterator<Item = &InputEvent> {
        self.steps
            .iter()
            .filter(move |s| s.frame == frame)
            .map(|s| &s.event)
    }

    /// Append a step, keeping frame order.
    pub fn push(&mut self, frame: u64, event: InputEvent) {
        let at = self.steps.partition_point(|s| s.frame <= frame);
        self.steps.insert(at, ScriptStep { frame, event });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
