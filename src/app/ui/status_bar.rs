use std::time::Instant;
use eframe::egui;
use log::{error, info};

use crate::app::app_core::MotionApp;
use crate::simulation::{HistoryCapacity, SignalModel};
use crate::utils::{format_sim_time, rgb};

pub fn render_status_bar(app: &mut MotionApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(40.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("Status:");

                let (status_color, button_text) = if app.state.simulation.is_running() {
                    (egui::Color32::from_rgb(0, 150, 0), "⏸ Pause") // 绿色
                } else {
                    (egui::Color32::from_rgb(255, 165, 0), "▶ Start") // 橙色
                };
                ui.colored_label(status_color, app.state.get_status_summary());

                ui.separator();

                if ui.button(button_text).clicked() {
                    app.state.toggle_running(Instant::now());
                }
                if ui.button("🔄 Reset").clicked() {
                    app.state.reset();
                }

                ui.separator();

                // 历史长度选择
                let mut capacity = app.state.simulation.history.capacity();
                egui::ComboBox::from_label("Points")
                    .selected_text(capacity.to_string())
                    .show_ui(ui, |ui| {
                        for option in HistoryCapacity::ALL {
                            ui.selectable_value(&mut capacity, option, option.to_string());
                        }
                    });
                app.state.set_history_capacity(capacity);

                // 信号模型选择
                let mut model = app.state.generator.model;
                egui::ComboBox::from_label("Model")
                    .selected_text(model.label())
                    .show_ui(ui, |ui| {
                        for option in SignalModel::ALL {
                            ui.selectable_value(&mut model, option, option.label());
                        }
                    });
                app.state.set_model(model);

                ui.separator();
                ui.label(format!("Time: {}", format_sim_time(app.state.simulation.time())));

                // 最右侧显示当前运动状态
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(state) = app.state.simulation.current_state() {
                        ui.label(
                            egui::RichText::new(state.label())
                                .strong()
                                .color(rgb(state.color())),
                        );
                        ui.label("Motion:");
                    }
                });
            });
            ui.add_space(5.0);
        });
}

pub fn render_bottom_status_bar(app: &mut MotionApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("bottom_status_bar")
        .min_height(25.0)
        .show(ctx, |ui| {
            ui.add_space(3.0);
            ui.horizontal(|ui| {
                ui.label(format!("Ticks: {}", app.state.simulation.tick_count()));
                ui.separator();
                ui.label(format!(
                    "History: {}/{}",
                    app.state.simulation.history.len(),
                    app.state.simulation.history.capacity()
                ));
                ui.separator();
                ui.label(format!("Trajectory: {}", app.state.simulation.trajectory.len()));
                ui.separator();
                ui.label(format!("Interval: {}ms", app.state.scheduler.interval().as_millis()));
                ui.separator();
                ui.label("Hotkey: SPACE start/pause, R reset");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💾 Save Settings").clicked() {
                        save_settings(app);
                    }
                    if !app.state.view.status_message.is_empty() {
                        ui.colored_label(egui::Color32::from_rgb(0, 100, 200), &app.state.view.status_message);
                    }
                });
            });
            ui.add_space(3.0);
        });
}

/// 把当前界面选项写回配置文件
fn save_settings(app: &mut MotionApp) {
    {
        let config = app.config.get_config_mut();
        config.simulation.history_capacity = app.state.simulation.history.capacity();
        config.simulation.model = app.state.generator.model;
        config.plot.show_gyroscope = app.state.view.show_gyroscope;
        config.scene.show_scene = app.state.view.show_scene;
    }

    let path = app.config.config_path().display().to_string();
    match app.config.save() {
        Ok(()) => {
            info!("Settings saved to {}", path);
            app.state.view.status_message = format!("Settings saved to {}", path);
        }
        Err(e) => {
            error!("Failed to save settings: {}", e);
            app.state.view.status_message = format!("Failed to save settings: {}", e);
        }
    }
}
