use std::time::{Duration, Instant};
use log::info;

use crate::config::AppConfig;
use crate::plotter::WaveformPlot;
use crate::scene::ScenePlot;
use crate::simulation::{
    noise_source, CircularMotion, HistoryCapacity, MotionGenerator, NoiseSource, SignalModel,
    SimulationState, TickScheduler,
};
use crate::sink::RenderSink;
use crate::types::TickFrame;

/// 应用状态管理模块
/// 仿真核心、定时器和渲染端统一放在这里，UI 只通过这些方法修改状态

/// 显示选项
#[derive(Debug, Clone)]
pub struct ViewState {
    pub show_gyroscope: bool,
    pub show_scene: bool,
    pub status_message: String,
}

/// 统一的应用状态管理
pub struct AppState {
    pub simulation: SimulationState,
    pub generator: MotionGenerator,
    pub noise: Box<dyn NoiseSource>,
    pub scheduler: TickScheduler,
    pub waveform_plot: WaveformPlot,
    pub scene: ScenePlot,
    pub view: ViewState,
}

impl AppState {
    /// 根据配置创建应用状态，定时器按 start_running 决定是否立即启动
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        let sim = &config.simulation;
        let generator = MotionGenerator::new(
            sim.model,
            CircularMotion {
                radius: sim.radius,
                angular_speed: sim.angular_speed,
            },
        );

        let mut scheduler = TickScheduler::new(Duration::from_millis(sim.tick_interval_ms));
        if sim.start_running {
            scheduler.start(now);
        }

        Self {
            simulation: SimulationState::new(
                sim.time_step_seconds,
                sim.history_capacity,
                config.scene.trajectory_capacity,
                sim.start_running,
            ),
            generator,
            noise: noise_source(sim.noise_enabled),
            scheduler,
            waveform_plot: WaveformPlot::new(),
            scene: ScenePlot::new(),
            view: ViewState {
                show_gyroscope: config.plot.show_gyroscope,
                show_scene: config.scene.show_scene,
                status_message: String::new(),
            },
        }
    }

    /// 获取当前状态摘要
    pub fn get_status_summary(&self) -> &'static str {
        if self.simulation.is_running() {
            "Running"
        } else {
            "Paused"
        }
    }

    pub fn start_simulation(&mut self, now: Instant) {
        if self.simulation.is_running() {
            return;
        }
        self.simulation.set_running(true);
        self.scheduler.start(now);
        info!("Simulation started at t={:.1}s", self.simulation.time());
    }

    pub fn pause_simulation(&mut self) {
        if !self.simulation.is_running() {
            return;
        }
        self.simulation.set_running(false);
        self.scheduler.stop();
        info!("Simulation paused at t={:.1}s", self.simulation.time());
    }

    pub fn toggle_running(&mut self, now: Instant) {
        if self.simulation.is_running() {
            self.pause_simulation();
        } else {
            self.start_simulation(now);
        }
    }

    /// 清空历史、轨迹和渲染端，时间归零；定时器保持原状
    pub fn reset(&mut self) {
        self.simulation.reset();
        for sink in self.sinks() {
            sink.clear();
        }
        info!("Simulation reset");
    }

    pub fn set_history_capacity(&mut self, capacity: HistoryCapacity) {
        if self.simulation.history.capacity() == capacity {
            return;
        }
        self.simulation.history.set_capacity(capacity);
        info!("History capacity set to {}", capacity);
    }

    pub fn set_model(&mut self, model: SignalModel) {
        if self.generator.model == model {
            return;
        }
        self.generator.model = model;
        info!("Signal model switched to {}", model.label());
    }

    /// 定时器到点时推进一步并发布给所有渲染端，返回是否产生了新帧
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll(now) {
            return false;
        }
        match self.simulation.tick(&self.generator, self.noise.as_mut()) {
            Some(frame) => {
                self.publish(&frame);
                true
            }
            None => false,
        }
    }

    fn publish(&mut self, frame: &TickFrame) {
        for sink in self.sinks() {
            sink.present(frame);
        }
    }

    fn sinks(&mut self) -> [&mut dyn RenderSink; 2] {
        [&mut self.waveform_plot, &mut self.scene]
    }
}
