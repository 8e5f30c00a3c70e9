use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keypad Calc - a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(about = "A keypad calculator with a terminal UI and a headless mode")]
#[command(version)]
pub struct Cli {
    /// Engine settings file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file. The interactive keypad never logs to the
    /// terminal it draws on, so without this flag it logs nothing.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive keypad (default)
    Tui,
    /// Press keys on a fresh engine and print the display
    Eval {
        /// Button labels, e.g. `1 0 ÷ 4 =`. ASCII aliases `* x / c` work too.
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,

        /// Print the display after every key instead of only the last one
        #[arg(long)]
        steps: bool,
    },
    /// List the keyboard bindings of the interactive keypad
    Keys,
    /// Manage the engine settings file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a settings file with the default values
    Init {
        /// Where to write the file
        path: PathBuf,
    },
    /// Check a settings file
    Validate {
        /// File to check
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
