use std::time::Instant;
use eframe::egui;
use crate::app::app_core::MotionApp;

pub struct KeyboardHandler;

impl KeyboardHandler {
    /// SPACE 开始/暂停，R 重置
    pub fn handle_keyboard_input(app: &mut MotionApp, ctx: &egui::Context, now: Instant) {
        // 文本框获得焦点时不响应快捷键
        if ctx.wants_keyboard_input() {
            return;
        }

        let (toggle, reset) = ctx.input(|i| (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::R)));

        if toggle {
            app.state.toggle_running(now);
        }
        if reset {
            app.state.reset();
        }
    }
}
