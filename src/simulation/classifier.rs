//! Threshold classifier mapping one sample to a [`MotionState`].

use crate::types::{ImuSample, MotionState};

const STATIONARY_ACC: f64 = 0.5;
const STATIONARY_GYRO: f64 = 20.0;
const SLOW_ACC: f64 = 2.0;
const SLOW_GYRO: f64 = 50.0;
const NORMAL_ACC: f64 = 5.0;
const NORMAL_GYRO: f64 = 100.0;
const FAST_ROTATION_GYRO: f64 = 100.0;

/// 纯函数：同一样本总是得到同一状态
pub fn classify(sample: &ImuSample) -> MotionState {
    classify_magnitudes(sample.dynamic_acc(), sample.gyro_magnitude())
}

/// Ordered threshold checks, first match wins.
pub fn classify_magnitudes(dynamic_acc: f64, gyro_magnitude: f64) -> MotionState {
    if dynamic_acc < STATIONARY_ACC && gyro_magnitude < STATIONARY_GYRO {
        MotionState::Stationary
    } else if dynamic_acc < SLOW_ACC && gyro_magnitude < SLOW_GYRO {
        MotionState::SlowMove
    } else if dynamic_acc < NORMAL_ACC && gyro_magnitude < NORMAL_GYRO {
        MotionState::NormalMove
    } else if gyro_magnitude > FAST_ROTATION_GYRO {
        MotionState::FastRotation
    } else {
        MotionState::Violent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::generator::{CircularMotion, MotionGenerator, SignalModel};
    use crate::simulation::noise::UniformNoise;
    use crate::types::GRAVITY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_threshold_ordering() {
        assert_eq!(classify_magnitudes(0.4, 10.0), MotionState::Stationary);
        assert_eq!(classify_magnitudes(1.0, 30.0), MotionState::SlowMove);
        assert_eq!(classify_magnitudes(3.0, 80.0), MotionState::NormalMove);
        assert_eq!(classify_magnitudes(0.1, 150.0), MotionState::FastRotation);
        assert_eq!(classify_magnitudes(50.0, 150.0), MotionState::FastRotation);
        assert_eq!(classify_magnitudes(10.0, 10.0), MotionState::Violent);
    }

    #[test]
    fn test_boundaries_fall_to_later_branch() {
        assert_eq!(classify_magnitudes(0.5, 10.0), MotionState::SlowMove);
        assert_eq!(classify_magnitudes(0.1, 20.0), MotionState::SlowMove);
        assert_eq!(classify_magnitudes(2.0, 10.0), MotionState::NormalMove);
        assert_eq!(classify_magnitudes(1.0, 50.0), MotionState::NormalMove);
        // 恰好 100 deg/s 既不是正常移动也不是快速旋转
        assert_eq!(classify_magnitudes(1.0, 100.0), MotionState::Violent);
        assert_eq!(classify_magnitudes(5.0, 10.0), MotionState::Violent);
    }

    #[test]
    fn test_classify_sample_uses_gravity_compensation() {
        let resting = ImuSample::new(0.0, [0.1, 0.1, GRAVITY], [1.0, 1.0, 1.0]);
        assert_eq!(classify(&resting), MotionState::Stationary);

        let spinning = ImuSample::new(0.0, [0.0, 0.0, GRAVITY], [120.0, 0.0, 0.0]);
        assert_eq!(classify(&spinning), MotionState::FastRotation);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let sample = ImuSample::new(1.2, [1.0, -2.0, 11.0], [30.0, 5.0, 40.0]);
        let first = classify(&sample);
        for _ in 0..10 {
            assert_eq!(classify(&sample), first);
        }
    }

    #[test]
    fn test_generated_samples_always_classify() {
        let mut noise = UniformNoise::from_rng(StdRng::seed_from_u64(11));
        for model in SignalModel::ALL {
            let generator = MotionGenerator::new(model, CircularMotion::default());
            for i in 0..1000 {
                let sample = generator.generate(i as f64 * 0.1, &mut noise);
                assert!(MotionState::ALL.contains(&classify(&sample)));
            }
        }
    }
}
