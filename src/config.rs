use crate::models::CompressionLevel;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 루트
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub scan: ScanConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// 기본 압축 레벨 (0-9)
    pub compression_level: u8,
    /// 폴더 이름을 쓸 수 없을 때의 기본 압축 파일 이름
    pub default_name: String,
    /// 저장 위치 (없으면 다운로드 디렉토리)
    pub output_dir: Option<PathBuf>,
    /// 완료/실패 후 진행 표시를 초기화하기까지의 시간 (ms)
    pub reset_delay_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 숨김 파일 제외
    pub skip_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// 테마: dark, light
    pub theme: String,
    /// 토스트 표시 시간 (초)
    pub toast_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            compression_level: CompressionLevel::DEFAULT,
            default_name: "archive".to_string(),
            output_dir: None,
            reset_delay_ms: 1000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            toast_secs: 3,
        }
    }
}

impl Config {
    /// 설정 로드
    ///
    /// 경로를 지정하지 않으면 `<config_dir>/bokslzip/config.toml`을 읽고,
    /// 파일이 없으면 기본값을 사용한다.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bokslzip").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if CompressionLevel::new(self.archive.compression_level).is_none() {
            return Err(ConfigError::Invalid(format!(
                "archive.compression_level must be 0-9 (got {})",
                self.archive.compression_level
            )));
        }
        if !matches!(self.ui.theme.as_str(), "dark" | "light") {
            return Err(ConfigError::Invalid(format!(
                "ui.theme must be 'dark' or 'light' (got '{}')",
                self.ui.theme
            )));
        }
        Ok(())
    }

    pub fn compression_level(&self) -> CompressionLevel {
        CompressionLevel::clamped(self.archive.compression_level)
    }

    /// 저장 디렉토리: 설정값 > 다운로드 > 홈 > 현재 디렉토리
    pub fn output_dir(&self) -> PathBuf {
        self.archive
            .output_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compression_level().value(), 6);
        assert_eq!(config.archive.reset_delay_ms, 1000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempdir().expect("create tempdir");
        let config = Config::load(Some(&temp.path().join("none.toml"))).expect("load config");
        assert_eq!(config.archive.default_name, "archive");
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let temp = tempdir().expect("create tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[archive]\ncompression_level = 9\noutput_dir = \"/tmp/out\"\n",
        )
        .expect("write config");

        let config = Config::load(Some(&path)).expect("load config");
        assert_eq!(config.compression_level().value(), 9);
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/out"));
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp = tempdir().expect("create tempdir");
        let path = temp.path().join("config.toml");

        fs::write(&path, "[archive]\ncompression_level = 12\n").expect("write config");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Invalid(_))
        ));

        fs::write(&path, "[ui]\ntheme = \"neon\"\n").expect("write config");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Invalid(_))
        ));

        fs::write(&path, "[archive\n").expect("write config");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let toml_str = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(toml_str.contains("[archive]"));
        assert!(toml_str.contains("[ui]"));
    }
}
