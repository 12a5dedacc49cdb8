use std::time::{Duration, Instant};
use eframe::{egui, Frame};
use log::info;

use crate::config::ConfigManager;
use super::handlers::{KeyboardHandler, SimulationHandler};
use super::state::AppState;

// 暂停时的空闲重绘间隔
const IDLE_REPAINT: Duration = Duration::from_millis(500);

pub struct MotionApp {
    // 统一的状态管理
    pub state: AppState,

    // 配置管理
    pub config: ConfigManager,
}

impl MotionApp {
    pub fn new(config: ConfigManager) -> Self {
        let state = AppState::new(config.get_config(), Instant::now());

        info!(
            "MotionApp ready: model={}, history={}, tick={}ms, running={}",
            state.generator.model.label(),
            state.simulation.history.capacity(),
            state.scheduler.interval().as_millis(),
            state.simulation.is_running()
        );

        Self { state, config }
    }
}

impl eframe::App for MotionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 设置明亮模式主题
        ctx.set_visuals(egui::Visuals::light());

        let now = Instant::now();

        // 先处理输入和定时器，再渲染本帧
        KeyboardHandler::handle_keyboard_input(self, ctx, now);
        SimulationHandler::handle_tick(self, now);

        crate::app::ui::render_status_bar(self, ctx);
        crate::app::ui::render_bottom_status_bar(self, ctx);
        crate::app::ui::render_main_panel(self, ctx);

        let wait = self
            .state
            .scheduler
            .time_until_next(Instant::now())
            .unwrap_or(IDLE_REPAINT);
        ctx.request_repaint_after(wait);
    }
}
