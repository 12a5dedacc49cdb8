use eframe::egui;

use crate::app::app_core::MotionApp;
use crate::types::MotionState;
use crate::utils::{format_reading, rgb};

pub fn render_main_panel(app: &mut MotionApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        // 显示选项控制
        ui.horizontal(|ui| {
            ui.label("Display:");
            ui.checkbox(&mut app.state.view.show_gyroscope, "Show Gyroscope");
            ui.checkbox(&mut app.state.view.show_scene, "Show 3D Scene");
        });
        ui.add_space(6.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            render_motion_state(app, ui);
            ui.add_space(8.0);
            render_readouts(app, ui);
            ui.add_space(8.0);

            if app.state.view.show_scene {
                ui.heading("3D Scene");
                let height = app.config.get_config().scene.scene_height;
                app.state.scene.ui(ui, &app.state.simulation.trajectory, height);
                ui.add_space(8.0);
            }

            let mut plot_config = app.config.get_config().plot.clone();
            plot_config.show_gyroscope = app.state.view.show_gyroscope;
            app.state.waveform_plot.ui(
                ui,
                &app.state.simulation.history,
                &plot_config,
                app.state.generator.model.acc_unit(),
            );
        });
    });
}

fn render_motion_state(app: &MotionApp, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.vertical_centered(|ui| {
            ui.label("Current Motion State");
            match app.state.simulation.current_state() {
                Some(state) => {
                    ui.label(
                        egui::RichText::new(state.label())
                            .size(40.0)
                            .strong()
                            .color(rgb(state.color())),
                    );
                }
                None => {
                    ui.label(egui::RichText::new("-").size(40.0).color(egui::Color32::GRAY));
                }
            }

            // 图例
            ui.horizontal_wrapped(|ui| {
                for state in MotionState::ALL {
                    ui.colored_label(rgb(state.color()), "●");
                    ui.label(state.label());
                    ui.add_space(6.0);
                }
            });
        });
    });
}

fn render_readouts(app: &MotionApp, ui: &mut egui::Ui) {
    let Some(frame) = app.state.waveform_plot.latest() else {
        ui.label("Waiting for first sample...");
        return;
    };

    let sample = &frame.sample;
    let acc_unit = app.state.generator.model.acc_unit();
    let colors = &app.config.get_config().plot.colors;
    let readouts = [
        ("Acc X", sample.acc_x, acc_unit, colors.acc_x),
        ("Acc Y", sample.acc_y, acc_unit, colors.acc_y),
        ("Acc Z", sample.acc_z, acc_unit, colors.acc_z),
        ("Gyro X", sample.gyro_x, "°/s", colors.gyro_x),
        ("Gyro Y", sample.gyro_y, "°/s", colors.gyro_y),
        ("Gyro Z", sample.gyro_z, "°/s", colors.gyro_z),
    ];

    egui::Grid::new("readouts")
        .num_columns(3)
        .spacing([24.0, 8.0])
        .show(ui, |ui| {
            for (i, (label, value, unit, color)) in readouts.into_iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(label).small().color(egui::Color32::GRAY));
                    ui.label(
                        egui::RichText::new(format_reading(value, unit))
                            .monospace()
                            .size(20.0)
                            .color(rgb(color)),
                    );
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });

    ui.label(format!(
        "Dynamic acc: {:.3}   Gyro magnitude: {:.2} °/s",
        sample.dynamic_acc(),
        sample.gyro_magnitude()
    ));
}
