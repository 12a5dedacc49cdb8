pub mod classifier;
pub mod generator;
pub mod history;
pub mod noise;
pub mod scheduler;
pub mod state;
pub mod trajectory;

pub use generator::{CircularMotion, MotionGenerator, SignalModel};
pub use history::{HistoryCapacity, SampleHistory};
pub use noise::{noise_source, NoiseSource};
pub use scheduler::TickScheduler;
pub use state::SimulationState;
pub use trajectory::Trajectory;
