use serde::{Deserialize, Serialize};

/// 重力基线 (m/s²)，计算动态加速度时从竖直轴减去
pub const GRAVITY: f64 = 9.8;

/// One synthetic 6-axis IMU reading.
///
/// `time` is simulated seconds since the last reset. Gyroscope channels are
/// in deg/s; the acceleration unit depends on the signal model that produced
/// the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImuSample {
    pub time: f64,
    pub acc_x: f64,
    pub acc_y: f64,
    pub acc_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
}

impl ImuSample {
    pub fn new(time: f64, acc: [f64; 3], gyro: [f64; 3]) -> Self {
        Self {
            time,
            acc_x: acc[0],
            acc_y: acc[1],
            acc_z: acc[2],
            gyro_x: gyro[0],
            gyro_y: gyro[1],
            gyro_z: gyro[2],
        }
    }

    /// 去除重力后的加速度模长（假设 Z 轴向上）
    pub fn dynamic_acc(&self) -> f64 {
        (self.acc_x.powi(2) + self.acc_y.powi(2) + (self.acc_z - GRAVITY).powi(2)).sqrt()
    }

    pub fn gyro_magnitude(&self) -> f64 {
        (self.gyro_x.powi(2) + self.gyro_y.powi(2) + self.gyro_z.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_acc_removes_gravity() {
        let sample = ImuSample::new(0.0, [0.0, 0.0, GRAVITY], [0.0, 0.0, 0.0]);
        assert!(sample.dynamic_acc().abs() < 1e-12);

        let sample = ImuSample::new(0.0, [3.0, 4.0, GRAVITY], [0.0, 0.0, 0.0]);
        assert!((sample.dynamic_acc() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_gyro_magnitude() {
        let sample = ImuSample::new(0.0, [0.0, 0.0, GRAVITY], [2.0, 3.0, 6.0]);
        assert!((sample.gyro_magnitude() - 7.0).abs() < 1e-12);
    }
}
