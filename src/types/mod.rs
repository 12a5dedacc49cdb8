pub mod sample;
pub mod motion_state;
pub mod frame;

pub use sample::{ImuSample, GRAVITY};
pub use motion_state::MotionState;
pub use frame::TickFrame;
