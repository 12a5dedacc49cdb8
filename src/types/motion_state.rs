use std::fmt;

/// Qualitative motion label derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionState {
    Stationary,
    SlowMove,
    NormalMove,
    FastRotation,
    Violent,
}

impl MotionState {
    pub const ALL: [MotionState; 5] = [
        MotionState::Stationary,
        MotionState::SlowMove,
        MotionState::NormalMove,
        MotionState::FastRotation,
        MotionState::Violent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MotionState::Stationary => "Stationary",
            MotionState::SlowMove => "Slow Move",
            MotionState::NormalMove => "Normal Move",
            MotionState::FastRotation => "Fast Rotation",
            MotionState::Violent => "Violent",
        }
    }

    /// 展示用颜色，可随主题更换
    pub fn color(&self) -> [u8; 3] {
        match self {
            MotionState::Stationary => [16, 185, 129],   // 绿色
            MotionState::SlowMove => [59, 130, 246],     // 蓝色
            MotionState::NormalMove => [245, 158, 11],   // 黄色
            MotionState::FastRotation => [236, 72, 153], // 粉色
            MotionState::Violent => [239, 68, 68],       // 红色
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
