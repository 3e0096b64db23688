// ABOUTME: Logging configuration and structured logging setup for embedding hosts
// ABOUTME: Configures log level and output format for the bridge's tracing events
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup for hosts embedding the bridge.
//!
//! The library itself only emits `tracing` events; a host that wants to see
//! them installs a subscriber, typically via [`LoggingConfig::from_env`]
//! followed by [`LoggingConfig::init`].

use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// `RUST_LOG` supplies the filter directive; `LOG_FORMAT` selects
    /// `json`, `compact`, or `pretty` (the default).
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self { level, format }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .json();
                registry.with(layer).try_init()?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_target(true)
                    .with_writer(io::stdout)
                    .pretty();
                registry.with(layer).try_init()?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .with_target(false)
                    .with_writer(io::stdout)
                    .compact();
                registry.with(layer).try_init()?;
            }
        }

        Ok(())
    }
}
