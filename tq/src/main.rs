use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use turnqueue::cli::{Cli, Command, Entry, OutputFormat};
use turnqueue::config::Config;
use turnqueue::{FifoQueue, Person, PriorityQueue, TakingTurnsQueue};

fn setup_logging(verbose: bool) -> Result<()> {
    // Logs go to stderr so stdout stays clean for served output
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    debug!(?config, "tq loaded config");

    match cli.command {
        Command::Fifo { names } => cmd_fifo(names, cli.format),
        Command::Priority { entries } => cmd_priority(&entries, &config, cli.format),
        Command::Turns { entries, rounds } => {
            cmd_turns(&entries, rounds.unwrap_or(config.default_rounds), &config, cli.format)
        }
        Command::Demo => cmd_demo(cli.format),
    }
}

fn cmd_fifo(names: Vec<String>, format: OutputFormat) -> Result<()> {
    let mut queue: FifoQueue<String> = names.into_iter().collect();
    info!(len = queue.len(), "fifo: queued");
    if format == OutputFormat::Text {
        println!("{} {}", "queue:".dimmed(), queue);
    }

    let mut served = Vec::with_capacity(queue.len());
    while !queue.is_empty() {
        served.push(queue.dequeue()?);
    }

    print_served(&served, format)
}

fn cmd_priority(entries: &[Entry], config: &Config, format: OutputFormat) -> Result<()> {
    let mut queue = PriorityQueue::new();
    for entry in entries {
        queue.enqueue(entry.name.clone(), entry.value_or(config.default_priority));
    }
    info!(len = queue.len(), "priority: queued");
    if format == OutputFormat::Text {
        println!("{} {}", "queue:".dimmed(), queue);
    }

    let mut served = Vec::with_capacity(queue.len());
    while !queue.is_empty() {
        served.push(queue.dequeue()?);
    }

    print_served(&served, format)
}

fn cmd_turns(entries: &[Entry], rounds: usize, config: &Config, format: OutputFormat) -> Result<()> {
    let mut queue = TakingTurnsQueue::new();
    for entry in entries {
        queue.add_person(entry.name.clone(), entry.value_or(config.default_turns));
    }
    info!(len = queue.len(), rounds, "turns: queued");

    let served = serve_turns(&mut queue, rounds)?;

    match format {
        OutputFormat::Text => {
            for person in &served {
                println!("{}", person);
            }
            println!("{} {}", "remaining:".dimmed(), queue);
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&served)?);
            Ok(())
        }
    }
}

fn cmd_demo(format: OutputFormat) -> Result<()> {
    let mut pq = PriorityQueue::new();
    pq.enqueue("TaskA", 2);
    pq.enqueue("TaskB", 5);
    let mut priority_order = vec![pq.dequeue()?];
    pq.enqueue("TaskC", 10);
    pq.enqueue("TaskD", 1);
    while !pq.is_empty() {
        priority_order.push(pq.dequeue()?);
    }

    let mut turns = TakingTurnsQueue::new();
    turns.add_person("Bob", 2);
    turns.add_person("Tim", 0);
    turns.add_person("Sue", 3);
    let turn_order = serve_turns(&mut turns, 8)?;

    match format {
        OutputFormat::Text => {
            println!("{}", "Priority queue".bold());
            println!("  {}", priority_order.join(", "));
            println!("{}", "Taking turns".bold());
            for person in &turn_order {
                println!("  {}", person);
            }
            println!("  {} {}", "remaining:".dimmed(), turns);
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "priority": priority_order,
                "turns": turn_order,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Serve up to `rounds` turns, stopping once everyone has run out
fn serve_turns(queue: &mut TakingTurnsQueue, rounds: usize) -> Result<Vec<Person>> {
    let mut served = Vec::new();
    for _ in 0..rounds {
        if queue.is_empty() {
            break;
        }
        served.push(queue.get_next_person()?);
    }
    Ok(served)
}

fn print_served(served: &[impl std::fmt::Display + serde::Serialize], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, item) in served.iter().enumerate() {
                println!("{} {}", format!("{}.", i + 1).yellow(), item);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(served)?);
        }
    }
    Ok(())
}
