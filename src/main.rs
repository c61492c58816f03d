// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use fastread::app_config::{Config, LogLevel};
use fastread::text::{Delimiter, Fragment, PivotCalculationMethod};

/// CLI Wrapper for PivotCalculationMethod to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliPivotMethod {
    Magic,
    Middle,
    Quarter,
    SquareRoot,
    CubicRoot,
    Logarithm,
    HalfTruncated,
}

impl From<CliPivotMethod> for PivotCalculationMethod {
    fn from(cli_method: CliPivotMethod) -> Self {
        match cli_method {
            CliPivotMethod::Magic => PivotCalculationMethod::Magic,
            CliPivotMethod::Middle => PivotCalculationMethod::Middle,
            CliPivotMethod::Quarter => PivotCalculationMethod::Quarter,
            CliPivotMethod::SquareRoot => PivotCalculationMethod::SquareRoot,
            CliPivotMethod::CubicRoot => PivotCalculationMethod::CubicRoot,
            CliPivotMethod::Logarithm => PivotCalculationMethod::Logarithm,
            CliPivotMethod::HalfTruncated => PivotCalculationMethod::HalfTruncated,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show words with their pivot letter highlighted and aligned
    Pivot {
        /// Words to display
        #[arg(value_name = "WORDS", required = true)]
        words: Vec<String>,

        /// Pivot calculation method (defaults to the configured one)
        #[arg(short, long, value_enum)]
        method: Option<CliPivotMethod>,

        /// Disable ANSI colors
        #[arg(long)]
        plain: bool,
    },

    /// List fragment delimiters and whether they end a sentence
    Delimiters,

    /// Print the effective configuration, creating a default file if missing
    Config,

    /// Generate shell completions for fastread
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// fastread - speed reading text engine
///
/// Inspect pivot letters and reading settings used by the RSVP reader.
#[derive(Parser, Debug)]
#[command(name = "fastread")]
#[command(version)]
#[command(about = "Speed reading (RSVP) text engine tools")]
#[command(long_about = "fastread shows words one at a time with a highlighted pivot letter.

EXAMPLES:
    fastread pivot hello world                  # Highlight pivots with the configured method
    fastread pivot -m middle extraordinary      # Use a specific pivot method
    fastread delimiters                         # List delimiter kinds
    fastread config                             # Show (and create) conf.json
    fastread completions bash > fastread.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Every record passes the logger; log::set_max_level does the filtering
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "fastread", &mut std::io::stdout());
            Ok(())
        }
        Commands::Delimiters => {
            print_delimiters();
            Ok(())
        }
        Commands::Config => {
            let config = load_config(&cli.config_path, true, cli.log_level.is_some())?;
            let config_json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize config to JSON")?;
            println!("{}", config_json);
            Ok(())
        }
        Commands::Pivot {
            words,
            method,
            plain,
        } => {
            let config = load_config(&cli.config_path, false, cli.log_level.is_some())?;
            let method = method.map_or(config.pivot_method, Into::into);
            print_pivots(&words, method, plain);
            Ok(())
        }
    }
}

fn load_config(path: &Path, create_if_missing: bool, level_from_cli: bool) -> Result<Config> {
    let config = if create_if_missing {
        Config::load_or_create(path)?
    } else if path.exists() {
        Config::load(path)?
    } else {
        debug!("No config file at '{}', using defaults", path.display());
        Config::default()
    };

    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if !level_from_cli {
        log::set_max_level(config.log_level.to_level_filter());
    }

    Ok(config)
}

fn print_pivots(words: &[String], method: PivotCalculationMethod, plain: bool) {
    info!("Pivot method: {}", method);

    let fragments: Vec<Fragment> = words.iter().map(Fragment::word_only).collect();
    let column = fragments
        .iter()
        .filter_map(|f| f.pivot_letter_index(method))
        .max()
        .unwrap_or(0);

    for fragment in &fragments {
        match fragment.split_at_pivot(method) {
            Some((before, pivot, after)) => {
                let padding = column - before.chars().count();
                if plain {
                    println!("{}{}[{}]{}", " ".repeat(padding), before, pivot, after);
                } else {
                    println!(
                        "{}{}\x1B[1;31m{}\x1B[0m{}",
                        " ".repeat(padding),
                        before,
                        pivot,
                        after
                    );
                }
            }
            None => {
                debug!("No pivot letter in '{}'", fragment.word());
                println!("{}{}", " ".repeat(column), fragment.word());
            }
        }
    }
}

fn print_delimiters() {
    for delimiter in Delimiter::ALL {
        let marker = if delimiter.ends_sentence() { "ends sentence" } else { "" };
        println!("{:<18} {}", delimiter.to_string(), marker);
    }
}
