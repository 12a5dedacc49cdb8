use std::time::Instant;
use crate::app::app_core::MotionApp;

pub struct SimulationHandler;

impl SimulationHandler {
    /// 定时器到点则生成 → 分类 → 发布一帧；每次 update 最多一帧，不补帧
    pub fn handle_tick(app: &mut MotionApp, now: Instant) {
        app.state.advance(now);
    }
}
