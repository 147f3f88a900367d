// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod finished_text;
pub mod format_out;
pub mod stack_sink;

// Re-export.
pub use finished_text::*;
pub use format_out::*;
pub use stack_sink::*;
