// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "stack_fmt_log.txt";

/// Where [`crate::init_tracing`] installs the subscriber and where it writes.
///
/// ```
/// use r3bl_stack_fmt::{DisplayPreference, TracingConfig, TracingScope, WriterConfig};
///
/// let config = TracingConfig {
///     scope: TracingScope::ThreadLocal,
///     writer_config: WriterConfig::Display(DisplayPreference::Stderr),
///     level: tracing::Level::DEBUG,
/// };
/// let _guard = r3bl_stack_fmt::init_tracing(config).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub scope: TracingScope,
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingScope {
    /// Process wide. Can only be set once.
    Global,
    /// Current thread only, until the returned guard is dropped. Use this in tests.
    ThreadLocal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log file path */),
    DisplayAndFile(DisplayPreference, String /* log file path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Warnings and errors to stderr, process wide.
    fn default() -> Self {
        Self {
            scope: TracingScope::Global,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level: tracing::Level::WARN,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn new_file(file_path: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                file_path.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TracingScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
