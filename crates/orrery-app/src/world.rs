//! World factory and schedule wiring.

use bevy_ecs::prelude::*;
use orrery_camera::FocusController;
use orrery_config::Config;
use orrery_input::{DisplayState, InteractionDispatcher};
use orrery_sim::{BodySet, Registry, SimulationClock};

use crate::schedule::{FrameSchedules, FrameStage};
use crate::systems::{PendingInput, camera_system, input_system, orbit_system};
use crate::time::FrameTime;

/// Insert every session resource, built from `config`.
pub fn register_resources(world: &mut World, config: &Config) {
    let registry = Registry::from_config(&config.simulation);
    world.insert_resource(BodySet::new(&registry));
    world.insert_resource(registry);
    world.insert_resource(SimulationClock::from_config(&config.simulation));
    world.insert_resource(FocusController::from_config(config));
    world.insert_resource(InteractionDispatcher::new());
    world.insert_resource(DisplayState::from_config(&config.display));
    world.insert_resource(PendingInput::default());
    world.insert_resource(FrameTime::default());
}

/// A world with all session resources inserted.
pub fn create_world(config: &Config) -> World {
    let mut world = World::new();
    register_resources(&mut world, config);
    world
}

/// The per-frame systems in their stages.
pub fn build_schedules() -> FrameSchedules {
    let mut schedules = FrameSchedules::new();
    schedules.add_system(FrameStage::Input, input_system);
    schedules.add_system(FrameStage::Simulation, orbit_system);
    schedules.add_system(FrameStage::Camera, camera_system);
    schedules
}
