//! Additive noise sources for the signal generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 产生 `[-level/2, level/2]` 区间内的加性噪声
pub trait NoiseSource {
    fn sample(&mut self, level: f64) -> f64;
}

/// Uniform noise backed by an OS-seeded RNG. Runs are not reproducible.
#[derive(Debug)]
pub struct UniformNoise {
    rng: StdRng,
}

impl UniformNoise {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for UniformNoise {
    fn sample(&mut self, level: f64) -> f64 {
        (self.rng.random::<f64>() - 0.5) * level
    }
}

/// 关闭噪声时使用，输出恒为 0
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn sample(&mut self, _level: f64) -> f64 {
        0.0
    }
}

/// 根据配置选择噪声源
pub fn noise_source(enabled: bool) -> Box<dyn NoiseSource> {
    if enabled {
        Box::new(UniformNoise::new())
    } else {
        Box::new(ZeroNoise)
    }
}
