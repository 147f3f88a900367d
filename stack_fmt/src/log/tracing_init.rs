// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, TracingScope, WriterConfig,
            rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install a subscriber built from `tracing_config`.
///
/// # Return
/// 1. [`TracingScope::ThreadLocal`]: a [`dispatcher::DefaultGuard`]. Dropping it restores
///    the thread's previous subscriber.
/// 2. [`TracingScope::Global`]: [`None`]. A global subscriber can't be unset.
/// 3. [`WriterConfig::None`]: [`None`], and nothing is installed.
///
/// # Errors
///
/// If the log file can't be created.
///
/// # Panics
///
/// With [`TracingScope::Global`], if a global subscriber is already installed.
pub fn init_tracing(
    tracing_config: TracingConfig,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let scope = tracing_config.scope;
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(None);
    };
    Ok(match scope {
        TracingScope::Global => {
            tracing_subscriber::registry().with(layers).init();
            None
        }
        TracingScope::ThreadLocal => {
            Some(tracing_subscriber::registry().with(layers).set_default())
        }
    })
}

/// Returns the layers without installing them, or [`None`] if there is nowhere to write.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// Erases the concrete writer type so layers compose at runtime.
///
/// # Errors
///
/// Never fails today. The [`miette::Result`] keeps it symmetric with
/// [`try_create_file_layer`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// Erases the concrete writer type so layers compose at runtime.
///
/// # Errors
///
/// If the log file path has no parent folder or no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, file_path) | WriterConfig::File(file_path) => {
            let file = rolling_file_appender_impl::try_create(file_path.as_str())?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
