pub mod keyboard;
pub mod simulation;

pub use keyboard::KeyboardHandler;
pub use simulation::SimulationHandler;
