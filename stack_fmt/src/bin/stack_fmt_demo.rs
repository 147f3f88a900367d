// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Try the renderer from the command line:
//!
//! ```text
//! stack-fmt-demo float 0.1 --policy shortest
//! stack-fmt-demo float -- -1234.5678 --policy fixed-width --width 8
//! stack-fmt-demo template "%0 + %0 = %1" 2 4 --capacity tiny
//! stack-fmt-demo print pi 3.14159 -7 --log-level debug
//! ```
//!
//! Each command prints the rendered text, then a report line saying whether the text fit
//! in the inline buffer or spilled to the heap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_stack_fmt::{DisplayPreference, FinishedText, FloatFormatConfig, FormatOut,
                     FormatResult, FormattedFloat, Render, RenderPolicy, TracingConfig,
                     TracingScope, WriterConfig, init_tracing, print_spaced,
                     render_template, stack_format, stack_format_with};

// ╭────────────────────────────────────────────────────────────────╮
// │ CLI args                                                       │
// ╰────────────────────────────────────────────────────────────────╯

#[derive(Debug, Parser)]
#[command(bin_name = "stack-fmt-demo")]
#[command(about = "Render floats, %N templates and argument lists into stack buffers")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'c',
        value_enum,
        default_value_t = CapacityChoice::Medium,
        help = "Inline capacity of the stack buffer the output is rendered into"
    )]
    pub capacity: CapacityChoice,

    #[arg(
        global = true,
        long,
        short = 'l',
        value_enum,
        default_value_t = LogLevel::Off,
        help = "Log library events (buffer spills, rejected templates) to stderr"
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Render one float with the chosen policy\n💡 Eg: `float 0.1 --policy general --digits 3`")]
    Float {
        #[arg(allow_negative_numbers = true, help = "Accepts `inf`, `-inf` and `nan` too")]
        value: f64,

        #[arg(long, short = 'p', value_enum, default_value_t = PolicyChoice::Shortest)]
        policy: PolicyChoice,

        #[arg(long, short = 'd', default_value_t = 6, help = "Used by `scientific` and `general`")]
        digits: usize,

        #[arg(long, short = 'w', default_value_t = 10, help = "Used by `fixed-width`")]
        width: usize,

        #[arg(long, help = "JavaScript style symbols and zero: `Infinity`, `NaN`, `0`")]
        ecma_script: bool,
    },

    #[clap(about = "Render a %N template\n💡 Eg: `template \"%1, %0!\" world hello`")]
    Template {
        template: String,

        #[arg(allow_negative_numbers = true, help = "Integers and floats are rendered as numbers, everything else as text")]
        args: Vec<String>,
    },

    #[clap(about = "Render arguments separated by spaces\n💡 Eg: `print 1 2.5 three`")]
    Print {
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CapacityChoice {
    #[clap(help = "16 bytes")]
    Tiny,
    #[clap(help = "64 bytes")]
    Medium,
    #[clap(help = "1024 bytes")]
    Large,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyChoice {
    #[clap(help = "Shortest digits that round-trip")]
    Shortest,
    #[clap(help = "Scientific with `--digits` significant digits")]
    Scientific,
    #[clap(help = "Exactly `--width` characters")]
    FixedWidth,
    #[clap(help = "Never scientific")]
    Fixed,
    #[clap(help = "printf %g with `--digits` significant digits")]
    General,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

impl PolicyChoice {
    fn to_render_policy(self, digits: usize, width: usize) -> RenderPolicy {
        match self {
            PolicyChoice::Shortest => RenderPolicy::FreeForm,
            PolicyChoice::Scientific => RenderPolicy::FixedPrecision(digits),
            PolicyChoice::FixedWidth => RenderPolicy::FixedWidth(width),
            PolicyChoice::Fixed => RenderPolicy::AlwaysFixedPoint,
            PolicyChoice::General => RenderPolicy::General(digits),
        }
    }
}

// ╭────────────────────────────────────────────────────────────────╮
// │ Arguments typed from the command line                          │
// ╰────────────────────────────────────────────────────────────────╯

/// A command line word, typed by what it parses as.
#[derive(Debug, Clone, PartialEq)]
enum DemoArg {
    Int(i128),
    Float(f64),
    Text(String),
}

impl From<&str> for DemoArg {
    fn from(word: &str) -> Self {
        if let Ok(it) = word.parse::<i128>() {
            DemoArg::Int(it)
        } else if let Ok(it) = word.parse::<f64>() {
            DemoArg::Float(it)
        } else {
            DemoArg::Text(word.to_string())
        }
    }
}

impl Render for DemoArg {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        match self {
            DemoArg::Int(it) => it.render(out),
            DemoArg::Float(it) => it.render(out),
            DemoArg::Text(it) => it.render(out),
        }
    }
}

// ╭────────────────────────────────────────────────────────────────╮
// │ Main                                                           │
// ╰────────────────────────────────────────────────────────────────╯

fn main() -> miette::Result<()> {
    // If no args are passed, help is printed thanks to `arg_required_else_help(true)`.
    let cli_arg = CLIArg::parse();

    let _guard = match cli_arg.global_options.log_level.to_tracing_level() {
        Some(level) => init_tracing(TracingConfig {
            scope: TracingScope::Global,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level,
        })?,
        None => None,
    };
    tracing::debug!(message = "Start", cli_arg = ?cli_arg);

    match cli_arg.global_options.capacity {
        CapacityChoice::Tiny => run_and_report::<16>(&cli_arg.command),
        CapacityChoice::Medium => run_and_report::<64>(&cli_arg.command),
        CapacityChoice::Large => run_and_report::<1024>(&cli_arg.command),
    }
}

fn run_and_report<const N: usize>(command: &CLICommand) -> miette::Result<()> {
    let text = run::<N>(command)?;
    println!("{text}");

    let report = stack_format!(
        128,
        "[inline capacity %0, %1 bytes, %2]",
        N,
        text.len(),
        if text.did_overflow() { "spilled to heap" } else { "inline" }
    )?;
    println!("{report}");
    Ok(())
}

fn run<const N: usize>(command: &CLICommand) -> FormatResult<FinishedText<N>> {
    match command {
        CLICommand::Float {
            value,
            policy,
            digits,
            width,
            ecma_script,
        } => {
            let config = if *ecma_script {
                FloatFormatConfig::ecma_script()
            } else {
                FloatFormatConfig::new()
            };
            let float = FormattedFloat::new(*value, policy.to_render_policy(*digits, *width))
                .with_config(config);
            stack_format_with::<N>(|out| float.render(out))
        }
        CLICommand::Template { template, args } => {
            let args: Vec<DemoArg> = args.iter().map(|it| DemoArg::from(it.as_str())).collect();
            let args: Vec<&dyn Render> = args.iter().map(|it| -> &dyn Render { it }).collect();
            stack_format_with::<N>(|out| render_template(out, template, &args))
        }
        CLICommand::Print { args } => {
            let args: Vec<DemoArg> = args.iter().map(|it| DemoArg::from(it.as_str())).collect();
            let args: Vec<&dyn Render> = args.iter().map(|it| -> &dyn Render { it }).collect();
            stack_format_with::<N>(|out| print_spaced(out, &args))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use r3bl_stack_fmt::assert_eq2;

    use super::*;

    #[test]
    fn test_cli_definition() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_demo_arg_typing() {
        assert_eq2!(DemoArg::from("-7"), DemoArg::Int(-7));
        assert_eq2!(DemoArg::from("2.5"), DemoArg::Float(2.5));
        assert_eq2!(DemoArg::from("pi"), DemoArg::Text("pi".into()));
    }

    #[test]
    fn test_run_template() {
        let cli_arg =
            CLIArg::parse_from(["stack-fmt-demo", "template", "%1, %0!", "world", "-1.5"]);
        let text = run::<16>(&cli_arg.command).unwrap();
        assert_eq2!(text, "-1.5, world!");
    }

    #[test]
    fn test_run_float_spills_with_tiny_capacity() {
        let cli_arg = CLIArg::parse_from([
            "stack-fmt-demo",
            "float",
            "0.1",
            "--policy",
            "fixed-width",
            "--width",
            "20",
        ]);
        let text = run::<16>(&cli_arg.command).unwrap();
        assert_eq2!(text.len(), 20);
        assert!(text.did_overflow());
    }
}
