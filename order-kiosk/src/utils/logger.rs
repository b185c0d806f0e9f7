//! 日志初始化
//!
//! 默认输出到控制台; 配置 `LOG_DIR` 且目录存在时写入按天滚动的
//! `order-kiosk.log`。`RUST_LOG` 优先于配置的 `LOG_LEVEL`。
//! 生产环境输出 JSON, 便于收集。

use crate::core::Config;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_PREFIX: &str = "order-kiosk.log";

/// 日志格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 人类可读的单行文本
    #[default]
    Text,
    /// 每行一个 JSON 对象
    Json,
}

/// 日志参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub dir: Option<PathBuf>,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            format: LogFormat::Text,
        }
    }
}

impl LogSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            level: config.log_level.clone(),
            dir: config.log_dir.as_ref().map(PathBuf::from),
            format: if config.is_production() {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
        }
    }

    /// 实际写入的日志目录; 目录不存在时退回控制台
    pub fn file_dir(&self) -> Option<&Path> {
        self.dir.as_deref().filter(|d| d.is_dir())
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// 按配置初始化日志; 重复初始化时忽略
pub fn init_logger(settings: &LogSettings) {
    if let Some(dir) = &settings.dir
        && settings.file_dir().is_none()
    {
        eprintln!("log directory {} not found, logging to console", dir.display());
    }

    let (writer, to_file) = match settings.file_dir() {
        Some(dir) => (
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)),
            true,
        ),
        None => (BoxMakeWriter::new(std::io::stdout), false),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter())
        .with_target(false)
        .with_ansi(!to_file)
        .with_writer(writer);

    let result = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("logger not installed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_logs_json() {
        let config = Config {
            environment: "production".to_string(),
            log_level: "debug".to_string(),
            ..Config::with_overrides(5, 0)
        };
        let settings = LogSettings::from_config(&config);
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.level, "debug");

        let config = Config {
            environment: "development".to_string(),
            ..config
        };
        assert_eq!(LogSettings::from_config(&config).format, LogFormat::Text);
    }

    #[test]
    fn test_missing_log_dir_falls_back_to_console() {
        let settings = LogSettings {
            dir: Some(PathBuf::from("/definitely/not/a/log/dir")),
            ..LogSettings::default()
        };
        assert!(settings.file_dir().is_none());
    }

    #[test]
    fn test_existing_log_dir_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            dir: Some(dir.path().to_path_buf()),
            ..LogSettings::default()
        };
        assert_eq!(settings.file_dir(), Some(dir.path()));
    }
}
