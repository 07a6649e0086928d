//! Body catalog, orbit kinematics, and the global simulation clock.

pub mod catalog;
pub mod clock;
pub mod kinematics;
pub mod registry;

pub use catalog::{BodyInfo, BodyKind, BodySpec, CATALOG};
pub use clock::{ClockError, SimulationClock};
pub use kinematics::{BodySet, BodyState, BodyTransform, ORBIT_PLANE_Y, orbit_position, step_orbit};
pub use registry::{Body, Registry};
