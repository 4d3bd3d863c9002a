//! src/logging.rs
//! ============================================================================
//! # Logging: JSON Lines to a Rotating File
//!
//! The terminal belongs to the UI, so every event goes to
//! `<log_dir>/<prefix>.<date>.jsonl` through a non-blocking writer. The
//! returned [`WorkerGuard`] flushes on drop and must live as long as `main`.
//!
//! The level comes from the config (`log_level`); `RUST_LOG` directives are
//! added on top.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use compact_str::CompactString;
use tokio::fs as TokioFs;
use tracing::info;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt::time::ChronoUtc, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::Config;
use crate::error::AppError;

/// Where and how much to log. Files rotate daily.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub log_dir: PathBuf,
    pub log_file_prefix: CompactString,
    pub log_level: CompactString,
    pub max_log_files: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_dir: Config::log_dir(),
            log_file_prefix: CompactString::const_new("mpl"),
            log_level: CompactString::const_new("info"),
            max_log_files: 7,
        }
    }
}

fn validate_config(config: &LoggerConfig) -> Result<(), AppError> {
    if config.log_file_prefix.trim().is_empty() {
        return Err(AppError::Logging("log file prefix is empty".into()));
    }
    if config.max_log_files == 0 {
        return Err(AppError::Logging("max_log_files must be at least 1".into()));
    }
    Ok(())
}

/// `RUST_LOG` plus the configured default level.
fn make_filter(level: &str) -> Result<EnvFilter> {
    let directive = Directive::from_str(level)
        .map_err(|e| AppError::Logging(format!("invalid log level {level:?}: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

async fn setup_log_directory(dir: &Path) -> Result<()> {
    TokioFs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create log directory {}", dir.display()))
}

pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.config.log_level = CompactString::new(level);
        self
    }

    /// Install the global subscriber. Fails if one is already installed.
    pub async fn build(self) -> Result<WorkerGuard> {
        let config = self.config;
        validate_config(&config)?;
        setup_log_directory(&config.log_dir).await?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(config.log_file_prefix.as_str())
            .filename_suffix("jsonl")
            .max_log_files(config.max_log_files)
            .build(&config.log_dir)
            .context("Failed to create file appender")?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(make_filter(&config.log_level)?);

        tracing_subscriber::registry()
            .with(json_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        info!(
            marker = "LOGGING_READY",
            dir = %config.log_dir.display(),
            level = %config.log_level,
            "Logging initialized"
        );

        Ok(guard)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
