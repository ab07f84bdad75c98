use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::hooke::smoothing::{DEFAULT_TIME_CONSTANT_S, MIN_TIME_CONSTANT_S};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정. 슬라이더 입력값은 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// egui pixels_per_point
    pub ui_scale: f32,
    pub always_on_top: bool,
    /// 창 배경 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 스프링 그림 보간 시정수 [s]
    pub animation_time_constant_s: f64,
    /// tracing EnvFilter 문자열. RUST_LOG가 있으면 그쪽이 우선한다.
    pub log_filter: String,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            always_on_top: false,
            window_alpha: 1.0,
            animation_time_constant_s: DEFAULT_TIME_CONSTANT_S,
            log_filter: "info".into(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error de E/S del archivo de configuración: {0}")]
    Io(#[from] std::io::Error),
    #[error("error al leer la configuración: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("error al escribir la configuración: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 범위를 벗어난 값을 보정한다.
    pub fn sanitize(&mut self) {
        let defaults = Config::default();
        if !self.ui_scale.is_finite() {
            self.ui_scale = defaults.ui_scale;
        }
        self.ui_scale = self.ui_scale.clamp(0.8, 1.6);
        if !self.window_alpha.is_finite() {
            self.window_alpha = defaults.window_alpha;
        }
        self.window_alpha = self.window_alpha.clamp(0.3, 1.0);
        if !self.animation_time_constant_s.is_finite() {
            self.animation_time_constant_s = defaults.animation_time_constant_s;
        }
        self.animation_time_constant_s = self.animation_time_constant_s.max(MIN_TIME_CONSTANT_S);
        if self.log_filter.trim().is_empty() {
            self.log_filter = defaults.log_filter;
        }
    }

    /// TOML 문자열에서 설정을 읽는다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut cfg: Config = toml::from_str(content)?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// 설정이 연결된 파일 경로. 없으면 기본 경로.
    pub fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH))
    }

    /// 설정을 원래 읽어온 파일(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, self.path())
    }
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 써서 만든다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        info!(path = %path.display(), "configuration loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        info!(path = %path.display(), "default configuration written");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

/// 로드에 실패하면 경고만 남기고 기본값을 쓴다.
pub fn load_or_fallback(path: &Path) -> Config {
    load_or_create(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "configuration unavailable, using defaults");
        Config {
            path: Some(path.to_path_buf()),
            ..Config::default()
        }
    })
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    info!(path = %path.display(), "configuration saved");
    Ok(())
}
