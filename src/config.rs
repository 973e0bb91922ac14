use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::apdl::MaterialParameters;
use crate::sample::BlankLinePolicy;

const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en-us 등)
    pub language: String,
    /// 언어팩 디렉터리. 비어 있으면 locales/ 와 내장 번들을 사용한다.
    pub language_pack_dir: Option<String>,
    /// 입력 중간의 빈 줄 처리 방식
    pub blank_lines: BlankLinePolicy,
    /// 마지막으로 사용한 재료 파라미터
    pub material: MaterialParameters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            blank_lines: BlankLinePolicy::Reject,
            material: MaterialParameters::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 설정 파일을 읽거나 쓰지 못함
    Io { path: PathBuf, source: std::io::Error },
    /// 설정 파일 내용이 올바른 TOML/스키마가 아님
    Serde(toml::de::Error),
    /// 설정을 TOML로 바꾸지 못함
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "{} 입출력 오류: {source}", path.display())
            }
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Serde(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError + '_ {
    move |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_FILE))
}

/// 지정한 경로에서 설정을 읽는다. 파일이 없으면 기본값을 그 경로에 저장한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(io_error(path))?;
        let cfg = from_toml(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_to(&cfg, path)?;
        log::warn!("{} not found; wrote defaults", path.display());
        Ok(cfg)
    }
}

/// TOML 문자열을 설정으로 해석한다. 빠진 항목은 기본값으로 채운다.
pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn save_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content).map_err(io_error(path))?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_to(self, Path::new(CONFIG_FILE))
    }
}
