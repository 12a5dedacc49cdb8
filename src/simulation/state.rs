use log::{debug, info};

use super::classifier::classify;
use super::generator::MotionGenerator;
use super::history::{HistoryCapacity, SampleHistory};
use super::noise::NoiseSource;
use super::trajectory::Trajectory;
use crate::types::{MotionState, TickFrame};

/// 默认仿真步长 (s)
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Explicit simulation state advanced one tick at a time.
///
/// Simulated time is `tick_count * time_step`, so it advances by a fixed
/// step per tick no matter how much wall time has passed.
#[derive(Debug, Clone)]
pub struct SimulationState {
    tick_count: u64,
    time_step: f64,
    running: bool,
    last_state: Option<MotionState>,
    pub history: SampleHistory,
    pub trajectory: Trajectory,
}

impl SimulationState {
    pub fn new(
        time_step: f64,
        capacity: HistoryCapacity,
        trajectory_capacity: usize,
        running: bool,
    ) -> Self {
        Self {
            tick_count: 0,
            time_step,
            running,
            last_state: None,
            history: SampleHistory::new(capacity),
            trajectory: Trajectory::new(trajectory_capacity),
        }
    }

    pub fn time(&self) -> f64 {
        self.tick_count as f64 * self.time_step
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// 当前（最近一次）运动状态
    pub fn current_state(&self) -> Option<MotionState> {
        self.last_state
    }

    /// 清空历史和轨迹并将仿真时间归零，不改变运行状态
    pub fn reset(&mut self) {
        self.tick_count = 0;
        self.last_state = None;
        self.history.clear();
        self.trajectory.clear();
    }

    /// Generate, classify and record one sample at the current time, then
    /// advance the clock. Returns `None` while paused.
    pub fn tick(
        &mut self,
        generator: &MotionGenerator,
        noise: &mut dyn NoiseSource,
    ) -> Option<TickFrame> {
        if !self.running {
            return None;
        }

        let t = self.time();
        let sample = generator.generate(t, noise);
        let state = classify(&sample);
        let position = generator.circle.ideal_position(t);
        let heading = generator.circle.heading(t);

        debug!(
            "tick {} t={:.2}s dyn_acc={:.3} gyro={:.2} -> {}",
            self.tick_count,
            t,
            sample.dynamic_acc(),
            sample.gyro_magnitude(),
            state
        );
        if self.last_state != Some(state) {
            info!("Motion state changed: {} at t={:.1}s", state, t);
        }

        self.history.push(sample);
        self.trajectory.push(position);
        self.last_state = Some(state);
        self.tick_count += 1;

        Some(TickFrame {
            sample,
            state,
            position,
            heading,
        })
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIME_STEP,
            HistoryCapacity::default(),
            super::trajectory::DEFAULT_TRAJECTORY_CAPACITY,
            true,
        )
    }
}
