// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod containers;
pub mod helpers;
pub mod int_fmt;
pub mod render_trait;
pub mod template;

// Re-export.
pub use helpers::*;
pub use int_fmt::*;
pub use render_trait::*;
pub use template::*;
