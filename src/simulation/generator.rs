//! Closed-form IMU signal synthesis.
//!
//! Two motion models are available. `Circular` simulates a device carried
//! around a circle of radius `R` at angular speed `ω`: centripetal
//! acceleration on the horizontal axes, gravity plus gait bobbing on the
//! vertical axis and a constant yaw rate. `Oscillatory` drives every channel
//! with an independent sinusoid. The two are not interchangeable simulations
//! of the same phenomenon.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::noise::NoiseSource;
use crate::types::{ImuSample, GRAVITY};

// 步伐造成的竖直震动
const BOB_FREQUENCY: f64 = 10.0;
const BOB_ACC_AMPLITUDE: f64 = 2.0;
const BOB_POSITION_AMPLITUDE: f64 = 0.5;

// 陀螺仪 X/Y 抖动
const GYRO_JITTER_FREQUENCY: f64 = 5.0;
const GYRO_JITTER_AMPLITUDE: f64 = 5.0;

const CIRCULAR_ACC_NOISE: f64 = 0.2;
const CIRCULAR_VERTICAL_NOISE: f64 = 0.5;
const CIRCULAR_GYRO_NOISE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalModel {
    Circular,
    Oscillatory,
}

impl SignalModel {
    pub const ALL: [SignalModel; 2] = [SignalModel::Circular, SignalModel::Oscillatory];

    pub fn label(&self) -> &'static str {
        match self {
            SignalModel::Circular => "Circular",
            SignalModel::Oscillatory => "Oscillatory",
        }
    }

    /// 加速度单位随模型不同
    pub fn acc_unit(&self) -> &'static str {
        match self {
            SignalModel::Circular => "m/s²",
            SignalModel::Oscillatory => "g",
        }
    }
}

/// Parameters of the ideal circular path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularMotion {
    pub radius: f64,
    pub angular_speed: f64,
}

impl Default for CircularMotion {
    fn default() -> Self {
        Self {
            radius: 15.0,
            angular_speed: 0.5,
        }
    }
}

impl CircularMotion {
    /// 向心加速度大小 Rω²
    pub fn centripetal(&self) -> f64 {
        self.radius * self.angular_speed.powi(2)
    }

    /// 恒定转向角速度 (deg/s)
    pub fn turn_rate_deg(&self) -> f64 {
        self.angular_speed * 180.0 / PI
    }

    /// Position on the ideal circle at time `t`, with Y up.
    ///
    /// This never looks at generated samples: the scene shows the kinematic
    /// ideal while the charts show the noisy readout.
    pub fn ideal_position(&self, t: f64) -> [f64; 3] {
        let phase = self.angular_speed * t;
        [
            self.radius * phase.cos(),
            (t * BOB_FREQUENCY).sin() * BOB_POSITION_AMPLITUDE,
            self.radius * phase.sin(),
        ]
    }

    /// 朝向切线方向
    pub fn heading(&self, t: f64) -> f64 {
        -(self.angular_speed * t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionGenerator {
    pub model: SignalModel,
    pub circle: CircularMotion,
}

impl MotionGenerator {
    pub fn new(model: SignalModel, circle: CircularMotion) -> Self {
        Self { model, circle }
    }

    pub fn generate(&self, t: f64, noise: &mut dyn NoiseSource) -> ImuSample {
        match self.model {
            SignalModel::Circular => self.circular(t, noise),
            SignalModel::Oscillatory => oscillatory(t, noise),
        }
    }

    fn circular(&self, t: f64, noise: &mut dyn NoiseSource) -> ImuSample {
        let phase = self.circle.angular_speed * t;
        let centripetal = self.circle.centripetal();
        let bobbing = (t * BOB_FREQUENCY).sin() * BOB_ACC_AMPLITUDE;

        let acc = [
            -centripetal * phase.cos() + noise.sample(CIRCULAR_ACC_NOISE),
            -centripetal * phase.sin() + noise.sample(CIRCULAR_ACC_NOISE),
            GRAVITY + bobbing + noise.sample(CIRCULAR_VERTICAL_NOISE),
        ];
        let gyro = [
            (t * GYRO_JITTER_FREQUENCY).sin() * GYRO_JITTER_AMPLITUDE,
            (t * GYRO_JITTER_FREQUENCY).cos() * GYRO_JITTER_AMPLITUDE,
            self.circle.turn_rate_deg() + noise.sample(CIRCULAR_GYRO_NOISE),
        ];

        ImuSample::new(t, acc, gyro)
    }
}

impl Default for MotionGenerator {
    fn default() -> Self {
        Self::new(SignalModel::Circular, CircularMotion::default())
    }
}

fn oscillatory(t: f64, noise: &mut dyn NoiseSource) -> ImuSample {
    let acc = [
        (t * 0.5).sin() * 2.0 + noise.sample(0.3),
        (t * 0.3).cos() * 1.5 + noise.sample(0.3),
        GRAVITY + (t * 0.2).sin() * 0.5 + noise.sample(0.2),
    ];
    let gyro = [
        (t * 0.7).sin() * 50.0 + noise.sample(10.0),
        (t * 0.4).cos() * 40.0 + noise.sample(10.0),
        (t * 0.6).sin() * 30.0 + noise.sample(10.0),
    ];

    ImuSample::new(t, acc, gyro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::noise::{UniformNoise, ZeroNoise};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_circular_baseline_at_zero() {
        let generator = MotionGenerator::default();
        let sample = generator.generate(0.0, &mut ZeroNoise);

        assert!((sample.acc_x - (-3.75)).abs() < EPS);
        assert!(sample.acc_y.abs() < EPS);
        assert!((sample.acc_z - 9.8).abs() < EPS);
        assert!(sample.gyro_x.abs() < EPS);
        assert!((sample.gyro_y - 5.0).abs() < EPS);
        assert!((sample.gyro_z - 0.5 * 180.0 / PI).abs() < EPS);
    }

    #[test]
    fn test_circular_quarter_turn() {
        let generator = MotionGenerator::default();
        // ωt = π/2
        let t = PI;
        let sample = generator.generate(t, &mut ZeroNoise);

        assert!(sample.acc_x.abs() < EPS);
        assert!((sample.acc_y - (-3.75)).abs() < EPS);
        assert_eq!(sample.time, t);
    }

    #[test]
    fn test_circular_noise_is_bounded() {
        let generator = MotionGenerator::default();
        let mut noise = UniformNoise::from_rng(StdRng::seed_from_u64(3));

        for i in 0..500 {
            let t = i as f64 * 0.1;
            let clean = generator.generate(t, &mut ZeroNoise);
            let noisy = generator.generate(t, &mut noise);

            assert!((noisy.acc_x - clean.acc_x).abs() <= CIRCULAR_ACC_NOISE / 2.0 + EPS);
            assert!((noisy.acc_y - clean.acc_y).abs() <= CIRCULAR_ACC_NOISE / 2.0 + EPS);
            assert!((noisy.acc_z - clean.acc_z).abs() <= CIRCULAR_VERTICAL_NOISE / 2.0 + EPS);
            assert!((noisy.gyro_z - clean.gyro_z).abs() <= CIRCULAR_GYRO_NOISE / 2.0 + EPS);
            // X/Y 抖动不含噪声
            assert_eq!(noisy.gyro_x, clean.gyro_x);
            assert_eq!(noisy.gyro_y, clean.gyro_y);
        }
    }

    #[test]
    fn test_oscillatory_baseline_at_zero() {
        let generator = MotionGenerator::new(SignalModel::Oscillatory, CircularMotion::default());
        let sample = generator.generate(0.0, &mut ZeroNoise);

        assert!(sample.acc_x.abs() < EPS);
        assert!((sample.acc_y - 1.5).abs() < EPS);
        assert!((sample.acc_z - 9.8).abs() < EPS);
        assert!(sample.gyro_x.abs() < EPS);
        assert!((sample.gyro_y - 40.0).abs() < EPS);
        assert!(sample.gyro_z.abs() < EPS);
    }

    #[test]
    fn test_custom_radius_scales_centripetal() {
        let circle = CircularMotion {
            radius: 4.0,
            angular_speed: 1.0,
        };
        let generator = MotionGenerator::new(SignalModel::Circular, circle);
        let sample = generator.generate(0.0, &mut ZeroNoise);
        assert!((sample.acc_x - (-4.0)).abs() < EPS);
    }

    #[test]
    fn test_ideal_position_on_circle() {
        let circle = CircularMotion::default();
        for i in 0..200 {
            let t = i as f64 * 0.1;
            let [x, y, z] = circle.ideal_position(t);
            assert!(((x * x + z * z).sqrt() - circle.radius).abs() < 1e-9);
            assert!(y.abs() <= BOB_POSITION_AMPLITUDE + EPS);
        }

        let start = circle.ideal_position(0.0);
        assert!((start[0] - 15.0).abs() < EPS);
        assert!(start[2].abs() < EPS);
        assert_eq!(circle.heading(0.0), 0.0);
    }
}
