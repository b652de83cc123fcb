use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use progress_bar_cli::config::{AppConfig, ConfigManager};
use progress_bar_cli::progress::{create_sink, select_sink_kind};
use progress_bar_cli::runner::{self, RunOptions};
use progress_bar_cli::terminal;
use progress_bar_core::{ProgressBar, RenderOptions, SystemClock};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "progress-bar")]
#[command(author, version, about = "Terminal progress bar with remaining-time estimation", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a progress bar over simulated work
    Run {
        /// Units of work in the run
        #[arg(short, long)]
        total: i64,

        /// Units completed per step
        #[arg(long, default_value_t = 1)]
        step: i64,

        /// Pause between steps in milliseconds
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,

        /// Annotation shown with the bar
        #[arg(short, long)]
        message: Option<String>,

        /// Terminal width in columns (detected when omitted)
        #[arg(short, long)]
        width: Option<usize>,

        /// Disable progress bar display
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the line rendered for a given state
    Render {
        /// Units of work in the run
        #[arg(short, long, allow_negative_numbers = true)]
        total: i64,

        /// Units completed
        #[arg(long, allow_negative_numbers = true)]
        done: i64,

        /// Seconds since the run started
        #[arg(long, default_value_t = 0)]
        elapsed_secs: u64,

        /// Annotation shown with the bar
        #[arg(short, long)]
        message: Option<String>,

        /// Terminal width in columns (detected when omitted)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., progress.min_bar_width)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., output.redraw)
        key: String,

        /// Value to store
        value: String,
    },

    /// List all configuration values
    List,

    /// Show the configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("progress_bar_core", log::LevelFilter::Debug)
            .filter_module("progress_bar_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if !terminal::supports_ansi() {
        colored::control::set_override(false);
    }

    let manager = cli
        .config
        .map_or_else(ConfigManager::new, ConfigManager::with_path);

    match cli.command {
        Commands::Run {
            total,
            step,
            interval_ms,
            message,
            width,
            no_progress,
        } => {
            let config = manager.load().context("Failed to load configuration")?;
            let options = RunOptions {
                total,
                step,
                interval: Duration::from_millis(interval_ms),
                message,
            };
            run_command(config, options, width, no_progress)?;
        }
        Commands::Render {
            total,
            done,
            elapsed_secs,
            message,
            width,
        } => {
            let mut config = manager.load().context("Failed to load configuration")?;
            config.apply_cli_overrides(width);
            config
                .progress
                .validate()
                .context("Invalid progress configuration")?;
            let options = RenderOptions::from_config(&config.progress, terminal::detect_width());
            let line = runner::snapshot(
                total,
                done,
                Duration::from_secs(elapsed_secs),
                message,
                &options,
            );
            println!("{line}");
        }
        Commands::Config { command } => {
            config_command(&manager, command)?;
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
        }
    }

    Ok(())
}

fn run_command(
    mut config: AppConfig,
    options: RunOptions,
    width: Option<usize>,
    no_progress: bool,
) -> Result<()> {
    config.apply_cli_overrides(width);
    colored::control::set_override(config.output.color_enabled && terminal::supports_ansi());

    let kind = select_sink_kind(&config.output, no_progress, terminal::can_redraw());
    let detected = terminal::detect_width();
    log::debug!("Detected terminal width: {detected:?}");

    let mut bar = ProgressBar::from_config(
        &config.progress,
        detected,
        create_sink(kind),
        Box::new(SystemClock),
    )
    .context("Invalid progress configuration")?;

    let summary = runner::run(&mut bar, &options, std::thread::sleep)?;

    println!(
        "{} {}/{} units in {:.2}s ({} updates)",
        "✓ Completed".green(),
        summary.done,
        summary.total,
        summary.elapsed.as_secs_f64(),
        summary.renders
    );

    Ok(())
}

fn config_command(manager: &ConfigManager, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Get { key } => {
            let value = manager.get(&key)?;
            println!("{value}");
        }
        ConfigCommand::Set { key, value } => {
            manager.set(&key, &value)?;
            println!("{} {} = {}", "✓".green(), key.bold(), value);
        }
        ConfigCommand::List => {
            for (key, value) in manager.list()? {
                println!("{} = {}", key.bold(), value);
            }
        }
        ConfigCommand::Path => {
            println!("{}", manager.get_config_path().display());
        }
    }

    Ok(())
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
