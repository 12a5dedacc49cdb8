use super::{ImuSample, MotionState};

/// Everything one tick publishes to the render sinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    pub sample: ImuSample,
    pub state: MotionState,
    /// 理想圆轨迹上的位置 (x, y, z)，Y 轴向上
    pub position: [f64; 3],
    /// 绕竖直轴的朝向角 (rad)
    pub heading: f64,
}
