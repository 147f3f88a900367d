// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup for programs that embed the renderer. The library itself
//! only emits events (`debug!` when a sink spills, `warn!` when a template or policy is
//! rejected) and never installs a subscriber on its own.

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
