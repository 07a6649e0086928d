//! Headless orrery session: the ECS world, the per-frame schedule, input
//! scripts, and serializable frame snapshots for a presentation layer.

pub mod error;
pub mod schedule;
pub mod script;
pub mod session;
pub mod snapshot;
pub mod systems;
pub mod time;
pub mod world;

pub use error::AppError;
pub use schedule::{FrameSchedules, FrameStage};
pub use script::{Script, ScriptStep};
pub use session::Orrery;
pub use snapshot::{BodySnapshot, CameraSnapshot, FrameSnapshot};
pub use systems::PendingInput;
pub use time::{FrameTime, MAX_FRAME_TIME};
pub use world::{build_schedules, create_world, register_resources};
