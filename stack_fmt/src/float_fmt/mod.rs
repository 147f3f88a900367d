// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod digit_source;
mod fixed_width;
pub mod float_config;
mod float_layout;
pub mod float_renderer;
pub mod float_wrappers;
pub mod render_policy;
pub mod round_to_even;

// Re-export.
pub use digit_source::*;
pub use float_config::*;
pub use float_renderer::*;
pub use float_wrappers::*;
pub use render_policy::*;
pub use round_to_even::*;
