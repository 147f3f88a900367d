// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;

/// A file appender that never rotates. Wrapping it in
/// `tracing_appender::non_blocking` would drop events logged right before exit, so it is
/// used as a blocking writer.
///
/// # Errors
///
/// Returns an error if `path_str` has no parent directory or no file name.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!("Log file path {} has no parent folder", path.display())
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Log file path {} has no file name", path.display())
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
        assert!(try_create("").is_err());
    }
}
