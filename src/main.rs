//! Keypad Calc - Main entry point
//!
//! Parses the command line, sets up logging, and dispatches to the
//! interactive keypad or one of the headless commands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use keypad_calc::app::{App, AppMode};
use keypad_calc::cli::{Cli, Commands, ConfigCommands};
use keypad_calc::components::keybindings::KeybindingContext;
use keypad_calc::config::EngineConfig;
use keypad_calc::error::{CalcError, Result};
use keypad_calc::headless;

/// Initialize tracing.
///
/// With a log file everything at `info` and above goes there. Otherwise
/// headless commands log warnings to stderr and the TUI logs nothing, since
/// stderr shares the screen it draws on. `RUST_LOG` overrides the level.
fn init_tracing(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Main application entry point
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(cli.log_file.as_deref(), interactive)?;
    info!("Keypad Calc starting up");
    debug!(?cli, "CLI arguments parsed");

    let config = match &cli.config {
        Some(path) => {
            info!("Loading settings from {:?}", path);
            EngineConfig::load_from_file(path)?
        }
        None => EngineConfig::default(),
    };

    match cli.command {
        None | Some(Commands::Tui) => run_tui(config)?,
        Some(Commands::Eval { keys, steps }) => run_eval(config, &keys, steps)?,
        Some(Commands::Keys) => print_keys(),
        Some(Commands::Config { action }) => run_config_command(action)?,
    }

    Ok(())
}

/// Run the interactive keypad
fn run_tui(config: EngineConfig) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| CalcError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| CalcError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| CalcError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(config).run(&mut terminal));

    // Always attempt cleanup, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(e) = &result {
        error!("TUI exited with error: {}", e);
    }
    result
}

/// Press the given labels and print the display
fn run_eval(config: EngineConfig, keys: &[String], steps: bool) -> Result<()> {
    let results = headless::evaluate(config, keys)?;
    if steps {
        for step in &results {
            println!("{:>4}  {}", step.key.label(), step.display);
        }
    } else if let Some(last) = results.last() {
        println!("{}", last.display);
    }
    Ok(())
}

/// Print the keyboard binding table
fn print_keys() {
    let ctx = KeybindingContext::new();
    for section in ctx.get_help_content(&AppMode::Calculator) {
        println!("-- {} --", section.title);
        for (key, description) in section.items {
            println!("  {:<8} {}", key, description);
        }
        println!();
    }
}

fn run_config_command(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Init { path } => {
            EngineConfig::default()
                .save_to_file(&path)
                .map_err(|e| CalcError::config(format!("{:#}", e)))?;
            println!("✓ Wrote default settings to {}", path.display());
        }
        ConfigCommands::Validate { path } => match EngineConfig::load_from_file(&path) {
            Ok(config) => {
                info!("Settings validation successful");
                println!("✓ Settings file is valid: {:?}", config);
            }
            Err(e) => {
                error!("Settings validation failed: {:#}", e);
                eprintln!("✗ Settings validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
    }
    Ok(())
}
