// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::{Config, ContainerSelector};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod html_document;
mod language_utils;
mod substitution;
mod translation_lines;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter_for(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pre-translated lines onto an HTML document (default command)
    #[command(alias = "apply")]
    Apply(ApplyArgs),

    /// Generate shell completions for htranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// HTML document to translate (rewritten in place unless -o is given)
    #[arg(value_name = "HTML_PATH")]
    input_path: Option<PathBuf>,

    /// File of newline-separated translated strings
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Output path (defaults to rewriting the input document)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target language code written to the root lang attribute (e.g. 'zh')
    #[arg(short = 'l', long)]
    target_language: Option<String>,

    /// Container selector in tag.class1.class2 form
    #[arg(short, long)]
    container: Option<String>,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// htranslate - apply pre-translated text onto a static HTML document
///
/// Loads an HTML file, walks the text nodes inside a target container element,
/// overwrites each translatable text node with the corresponding line from a
/// pre-translated text file, sets the document language attribute, and writes
/// the document back pretty-printed.
#[derive(Parser, Debug)]
#[command(name = "htranslate")]
#[command(version = "1.0.0")]
#[command(about = "Apply pre-translated text onto a static HTML document")]
#[command(long_about = "htranslate overwrites the translatable text nodes of an HTML document with
lines from a pre-translated text file, in document order.

EXAMPLES:
    htranslate                                  # Use paths from conf.json
    htranslate page.html -t lines.txt           # Explicit input files
    htranslate page.html -o page.zh.html        # Write to a separate file
    htranslate -l zh -c div.content page.html   # Target language and container
    htranslate --log-level debug page.html      # Verbose logging
    htranslate completions bash > htranslate.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// HTML document to translate (rewritten in place unless -o is given)
    #[arg(value_name = "HTML_PATH")]
    input_path: Option<PathBuf>,

    /// File of newline-separated translated strings
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Output path (defaults to rewriting the input document)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target language code written to the root lang attribute (e.g. 'zh')
    #[arg(short = 'l', long)]
    target_language: Option<String>,

    /// Container selector in tag.class1.class2 form
    #[arg(short, long)]
    container: Option<String>,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "htranslate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Apply(args)) => run_apply(args),
        None => {
            // Default behavior - use top-level args
            let apply_args = ApplyArgs {
                input_path: cli.input_path,
                translations: cli.translations,
                output: cli.output,
                target_language: cli.target_language,
                container: cli.container,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_apply(apply_args)
        }
    }
}

fn run_apply(options: ApplyArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter_for(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(input_path) = &options.input_path {
        config.html_path = input_path.to_string_lossy().to_string();
    }

    if let Some(translations) = &options.translations {
        config.translations_path = translations.to_string_lossy().to_string();
    }

    if let Some(output) = &options.output {
        config.output_path = Some(output.to_string_lossy().to_string());
    }

    if let Some(target_language) = &options.target_language {
        config.target_language = target_language.clone();
    }

    if let Some(container) = &options.container {
        config.container = ContainerSelector::from_str(container)
            .map_err(|e| anyhow!("Invalid container selector '{}': {}", container, e))?;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(level_filter_for(&config.log_level));
    }

    // Create controller and run the pipeline
    let controller = Controller::with_config(config)?;
    controller.run()?;

    Ok(())
}
