use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};

use crate::config::PlotConfig;
use crate::simulation::SampleHistory;
use crate::sink::RenderSink;
use crate::types::{ImuSample, TickFrame};
use crate::utils::rgb;

/// 固定宽度的 y 轴标签，避免图表随数值位数左右抖动
fn format_fixed_width_y_label(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value >= 1000.0 {
        format!("{:>7.1e}", value)
    } else if abs_value >= 100.0 {
        format!("{:>7.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:>7.1}", value)
    } else {
        format!("{:>7.2}", value)
    }
}

/// 一条曲线：名称、通道取值函数、颜色
struct Channel {
    name: &'static str,
    value: fn(&ImuSample) -> f64,
    color: Color32,
}

/// Accelerometer and gyroscope charts over the sample history.
///
/// The history itself lives in the simulation state; this sink only keeps
/// the most recent frame for the readout cards.
#[derive(Debug, Default)]
pub struct WaveformPlot {
    latest: Option<TickFrame>,
}

impl RenderSink for WaveformPlot {
    fn present(&mut self, frame: &TickFrame) {
        self.latest = Some(*frame);
    }

    fn clear(&mut self) {
        self.latest = None;
    }
}

impl WaveformPlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&TickFrame> {
        self.latest.as_ref()
    }

    pub fn ui(&self, ui: &mut egui::Ui, history: &SampleHistory, config: &PlotConfig, acc_unit: &str) {
        let colors = &config.colors;

        ui.heading(format!("Accelerometer ({})", acc_unit));
        let acc_channels = [
            Channel { name: "Acc X", value: |s| s.acc_x, color: rgb(colors.acc_x) },
            Channel { name: "Acc Y", value: |s| s.acc_y, color: rgb(colors.acc_y) },
            Channel { name: "Acc Z", value: |s| s.acc_z, color: rgb(colors.acc_z) },
        ];
        self.plot_sensor(ui, "accelerometer_plot", history, &acc_channels, config);

        // 陀螺仪图表（可选）
        if config.show_gyroscope {
            ui.add_space(8.0);
            ui.heading("Gyroscope (°/s)");
            let gyro_channels = [
                Channel { name: "Gyro X", value: |s| s.gyro_x, color: rgb(colors.gyro_x) },
                Channel { name: "Gyro Y", value: |s| s.gyro_y, color: rgb(colors.gyro_y) },
                Channel { name: "Gyro Z", value: |s| s.gyro_z, color: rgb(colors.gyro_z) },
            ];
            self.plot_sensor(ui, "gyroscope_plot", history, &gyro_channels, config);
        }
    }

    fn plot_sensor(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        history: &SampleHistory,
        channels: &[Channel],
        config: &PlotConfig,
    ) {
        let series: Vec<Vec<[f64; 2]>> = channels
            .iter()
            .map(|channel| history.series(channel.value))
            .collect();
        let bounds = plot_bounds(&series);

        Plot::new(id)
            .height(config.plot_height)
            .legend(Legend::default())
            .x_axis_formatter(|v, _| format!("{:.1}s", v.value))
            .y_axis_formatter(|v, _| format_fixed_width_y_label(v.value))
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                if let Some(bounds) = bounds {
                    plot_ui.set_plot_bounds(bounds);
                }
                for (channel, points) in channels.iter().zip(series) {
                    plot_ui.line(
                        Line::new(channel.name, PlotPoints::from(points))
                            .color(channel.color)
                            .width(config.line_width),
                    );
                }
            });
    }
}

/// 根据所有曲线计算显示范围：x 为时间跨度，y 上下各留 5% 余量
fn plot_bounds(series: &[Vec<[f64; 2]>]) -> Option<PlotBounds> {
    let points = series.iter().flatten();
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &[x, y] in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }

    let x_max = x_max.max(x_min + 1.0);
    let range = (y_max - y_min).max(0.1);
    Some(PlotBounds::from_min_max(
        [x_min, y_min - range * 0.05],
        [x_max, y_max + range * 0.05],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MotionState;

    fn frame_at(time: f64) -> TickFrame {
        TickFrame {
            sample: ImuSample::new(time, [0.0, 0.0, 9.8], [0.0, 0.0, 0.0]),
            state: MotionState::Stationary,
            position: [15.0, 0.0, 0.0],
            heading: 0.0,
        }
    }

    #[test]
    fn test_present_keeps_latest_frame() {
        let mut plot = WaveformPlot::new();
        plot.present(&frame_at(0.0));
        plot.present(&frame_at(0.1));
        assert_eq!(plot.latest().map(|f| f.sample.time), Some(0.1));

        plot.clear();
        assert!(plot.latest().is_none());
    }

    #[test]
    fn test_plot_bounds_empty() {
        assert!(plot_bounds(&[Vec::new(), Vec::new()]).is_none());
    }

    #[test]
    fn test_plot_bounds_pad_flat_series() {
        let bounds = plot_bounds(&[vec![[0.0, 2.0]]]).unwrap();
        assert_eq!(bounds.min()[0], 0.0);
        assert_eq!(bounds.max()[0], 1.0);
        assert!(bounds.min()[1] < 2.0 && bounds.max()[1] > 2.0);
    }

    #[test]
    fn test_y_label_width_is_fixed() {
        for value in [0.5, -3.75, 12.3, -150.0, 2500.0] {
            assert_eq!(format_fixed_width_y_label(value).chars().count(), 7, "{}", value);
        }
    }
}
