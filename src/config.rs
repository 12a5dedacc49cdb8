use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::simulation::{HistoryCapacity, SignalModel};

/// 应用配置管理模块
/// 集中管理所有配置项，提供默认值和配置验证

/// 默认配置文件路径，可通过 MOTIONHUB_CONFIG 覆盖
pub const DEFAULT_CONFIG_PATH: &str = "motionhub.toml";
pub const CONFIG_PATH_ENV: &str = "MOTIONHUB_CONFIG";

/// 主配置结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub plot: PlotConfig,
    pub scene: SceneConfig,
    pub logging: LoggingConfig,
}

/// 窗口配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
}

/// 仿真配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub time_step_seconds: f64,
    pub history_capacity: HistoryCapacity,
    pub start_running: bool,
    pub model: SignalModel,
    pub radius: f64,
    pub angular_speed: f64,
    pub noise_enabled: bool,
}

/// 绘图配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub plot_height: f32,
    pub line_width: f32,
    pub show_gyroscope: bool,
    pub colors: PlotColors,
}

/// 绘图颜色配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotColors {
    pub acc_x: [u8; 3],
    pub acc_y: [u8; 3],
    pub acc_z: [u8; 3],
    pub gyro_x: [u8; 3],
    pub gyro_y: [u8; 3],
    pub gyro_z: [u8; 3],
}

/// 3D 场景配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub show_scene: bool,
    pub trajectory_capacity: usize,
    pub scene_height: f32,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            plot: PlotConfig::default(),
            scene: SceneConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 900.0,
            title: "MotionHub - IMU Motion Viewer".to_string(),
            resizable: true,
            vsync: true,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            time_step_seconds: 0.1,
            history_capacity: HistoryCapacity::Points50,
            start_running: true,
            model: SignalModel::Circular,
            radius: 15.0,
            angular_speed: 0.5,
            noise_enabled: true,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            plot_height: 180.0,
            line_width: 1.5,
            show_gyroscope: true,
            colors: PlotColors::default(),
        }
    }
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            acc_x: [239, 68, 68],   // 红色
            acc_y: [16, 185, 129],  // 绿色
            acc_z: [59, 130, 246],  // 蓝色
            gyro_x: [249, 115, 22], // 橙色
            gyro_y: [139, 92, 246], // 紫色
            gyro_z: [236, 72, 153], // 粉色
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_scene: true,
            trajectory_capacity: crate::simulation::trajectory::DEFAULT_TRAJECTORY_CAPACITY,
            scene_height: 420.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, content).map_err(ConfigError::IoError)?;
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError("Window dimensions must be positive".to_string()));
        }

        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationError("Tick interval must be positive".to_string()));
        }

        if !(self.simulation.time_step_seconds > 0.0) {
            return Err(ConfigError::ValidationError("Time step must be positive".to_string()));
        }

        if !(self.simulation.radius > 0.0) {
            return Err(ConfigError::ValidationError("Circle radius must be positive".to_string()));
        }

        if !self.simulation.angular_speed.is_finite() {
            return Err(ConfigError::ValidationError("Angular speed must be finite".to_string()));
        }

        if self.scene.trajectory_capacity == 0 {
            return Err(ConfigError::ValidationError("Trajectory capacity must be positive".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 配置来源，日志初始化之后再输出
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    Invalid(PathBuf, ConfigError),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                warn!("Config file {} not found, using defaults", path.display())
            }
            ConfigSource::Invalid(path, e) => {
                error!("Failed to load config {}: {}, using defaults", path.display(), e)
            }
        }
    }
}

/// 配置管理器
pub struct ConfigManager {
    config: AppConfig,
    config_path: PathBuf,
}

impl ConfigManager {
    /// 使用默认配置创建
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = AppConfig::load_from_file(&path)?;
        Ok(Self {
            config,
            config_path: path.as_ref().to_path_buf(),
        })
    }

    /// 读取环境变量（支持 .env）指定的配置文件，失败时回退到默认配置
    pub fn load_or_default() -> (Self, ConfigSource) {
        dotenv::dotenv().ok();
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_path_or_default(path)
    }

    pub fn load_path_or_default(path: PathBuf) -> (Self, ConfigSource) {
        if !path.exists() {
            let manager = Self {
                config: AppConfig::default(),
                config_path: path.clone(),
            };
            return (manager, ConfigSource::Missing(path));
        }

        match Self::load_from_file(&path) {
            Ok(manager) => (manager, ConfigSource::File(path)),
            Err(e) => {
                let manager = Self {
                    config: AppConfig::default(),
                    config_path: path.clone(),
                };
                (manager, ConfigSource::Invalid(path, e))
            }
        }
    }

    /// 获取当前配置
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// 获取可变配置
    pub fn get_config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 保存配置到当前路径
    pub fn save(&self) -> Result<(), ConfigError> {
        self.config.validate()?;
        self.config.save_to_file(&self.config_path)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("motionhub-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [simulation]
            history_capacity = 100
            model = "oscillatory"
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.history_capacity, HistoryCapacity::Points100);
        assert_eq!(config.simulation.model, SignalModel::Oscillatory);
        assert_eq!(config.simulation.tick_interval_ms, 100);
        assert_eq!(config.scene.trajectory_capacity, 200);
    }

    #[test]
    fn test_rejects_unsupported_history_capacity() {
        let result = AppConfig::from_toml_str("[simulation]\nhistory_capacity = 75\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = AppConfig::default();
        config.simulation.tick_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = AppConfig::default();
        config.simulation.time_step_seconds = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.simulation.radius = -1.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scene.trajectory_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.window.width = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_config_path("roundtrip");
        let mut config = AppConfig::default();
        config.simulation.history_capacity = HistoryCapacity::Points200;
        config.simulation.noise_enabled = false;
        config.logging.level = "debug".to_string();

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_config_path("missing");
        let (manager, source) = ConfigManager::load_path_or_default(path.clone());
        assert_eq!(manager.get_config(), &AppConfig::default());
        assert_eq!(manager.config_path(), path.as_path());
        assert!(matches!(source, ConfigSource::Missing(_)));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "[simulation]\ntick_interval_ms = 0\n").unwrap();
        let (manager, source) = ConfigManager::load_path_or_default(path.clone());
        std::fs::remove_file(&path).ok();

        assert_eq!(manager.get_config(), &AppConfig::default());
        assert!(matches!(source, ConfigSource::Invalid(_, ConfigError::ValidationError(_))));
    }
}
