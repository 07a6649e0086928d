//! Frame stage labels and the ordered, single-threaded stage runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, IntoSystemConfigs, ScheduleLabel};

/// Labels for each frame stage.
///
/// Stages run in the order listed, top to bottom, every frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameStage {
    /// Apply queued user input.
    Input,
    /// Advance the clock and body kinematics.
    Simulation,
    /// Advance the camera transition or follow the focused body.
    Camera,
}

impl FrameStage {
    /// Every stage in execution order.
    pub const ORDER: [FrameStage; 3] = [
        FrameStage::Input,
        FrameStage::Simulation,
        FrameStage::Camera,
    ];
}

/// Ordered collection of [`Schedule`]s that drives one frame.
///
/// Each schedule uses the single-threaded executor so systems within a
/// stage observe each other's writes in registration order.
pub struct FrameSchedules {
    schedules: Vec<(FrameStage, Schedule)>,
}

impl FrameSchedules {
    /// One empty single-threaded schedule per stage.
    pub fn new() -> Self {
        let schedules = FrameStage::ORDER
            .into_iter()
            .map(|label| {
                let mut schedule = Schedule::new(label.clone());
                schedule.set_executor_kind(ExecutorKind::SingleThreaded);
                (label, schedule)
            })
            .collect();

        Self { schedules }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: FrameStage, system: impl IntoSystemConfigs<M>) {
        if let Some(schedule) = self.get_schedule_mut(&stage) {
            schedule.add_systems(system);
        }
    }

    /// Run all stages in order for one frame.
    pub fn run(&mut self, world: &mut World) {
        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Run a single stage.
    pub fn run_stage(&mut self, stage: FrameStage, world: &mut World) {
        if let Some(schedule) = self.get_schedule_mut(&stage) {
            schedule.run(world);
        }
    }

    /// The schedule behind `stage`.
    pub fn get_schedule_mut(&mut self, stage: &FrameStage) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }
}

impl Default for FrameSchedules {
    fn default() -> Self {
        Self::new()
    }
}
