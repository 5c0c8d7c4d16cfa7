//! CLI argument parsing for tq

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tq")]
#[command(author, version, about = "FIFO, priority and taking-turns queue playground", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enqueue names and dequeue them in arrival order
    Fifo {
        /// Names to enqueue
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Enqueue NAME[:PRIORITY] entries and dequeue them highest priority first
    Priority {
        /// Entries to enqueue
        #[arg(required = true, value_name = "NAME[:PRIORITY]")]
        entries: Vec<Entry>,
    },

    /// Add NAME[:TURNS] people and serve them round-robin
    Turns {
        /// People to add (0 or fewer turns means infinite)
        #[arg(required = true, value_name = "NAME[:TURNS]")]
        entries: Vec<Entry>,

        /// Maximum number of turns to serve
        #[arg(short, long)]
        rounds: Option<usize>,
    },

    /// Run the built-in priority and turn-taking scenarios
    Demo,
}

/// A `NAME[:N]` command-line entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: Option<i32>,
}

impl Entry {
    /// The entry's number, or `default` when none was given
    pub fn value_or(&self, default: i32) -> i32 {
        self.value.unwrap_or(default)
    }
}

impl std::str::FromStr for Entry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((name, value)) => {
                let value = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid number in entry '{}': {}", s, e))?;
                Ok(Self {
                    name: name.to_string(),
                    value: Some(value),
                })
            }
            None => Ok(Self {
                name: s.to_string(),
                value: None,
            }),
        }
    }
}

/// Output format for served items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
