pub mod angle;
pub mod constants;
pub mod error;
pub mod policy;
pub mod pool;
pub mod preferences;
pub mod random;
pub mod render;
pub mod shared_wheel_game;
pub mod validation;

pub use error::{PoolError, SpinRejected, UnlockError, WheelError};
pub use policy::{GatedWheel, HostLock, KeyValueStore, MemoryStore, SpinLimit};
pub use pool::NamePool;
pub use random::{FixedIndex, RandomIndex, SequenceIndex, ThreadRngIndex};
pub use render::{layout, paint, Palette, Segment, WheelFrame, WheelGeometry, WheelSurface};
pub use shared_wheel_game::{
    Clock, FrameScheduler, NameWheel, SpinPlan, SpinTick, WheelConfig, WheelState, WinnerEvent,
};
