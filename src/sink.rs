use crate::types::TickFrame;

/// Anything that displays simulation output.
///
/// Sinks receive every published frame in order and are cleared on reset.
/// They must not feed anything back into the simulation.
pub trait RenderSink {
    fn present(&mut self, frame: &TickFrame);

    fn clear(&mut self) {}
}
