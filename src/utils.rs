/// 仿真时间格式化为 MM:SS.s
pub fn format_sim_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let rest = seconds - minutes as f64 * 60.0;
    format!("{:02}:{:04.1}", minutes, rest)
}

/// 读数显示，保留两位小数
pub fn format_reading(value: f64, unit: &str) -> String {
    format!("{:.2} {}", value, unit)
}

pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sim_time() {
        assert_eq!(format_sim_time(0.0), "00:00.0");
        assert_eq!(format_sim_time(12.34), "00:12.3");
        assert_eq!(format_sim_time(75.0), "01:15.0");
    }

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(-3.75, "m/s²"), "-3.75 m/s²");
        assert_eq!(format_reading(28.6479, "°/s"), "28.65 °/s");
    }
}
