// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use midiwatch::export::default_export_filename;
use midiwatch::format::format_all;
use midiwatch::midi::{list_sources, MidiInputSource, PortSelection, PortSync};
use midiwatch::{MessageLog, MonitorConfig};

const DEFAULT_CONFIG_FILE: &str = "midiwatch.yaml";

fn print_usage() {
    println!("MidiWatch - Real-time MIDI monitor");
    println!();
    println!("Usage: midiwatch [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-sources            List available MIDI sources (inputs)");
    println!("  --monitor <N> [SECONDS]   Monitor listed source N for SECONDS (default 30)");
    println!("  --export [PATH]           With --monitor, export the log to CSV when done");
    println!("  --config <PATH>           Load settings from a YAML file");
    println!("  --help                    Show this help message");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    list_sources: bool,
    monitor: Option<(usize, u64)>,
    export: Option<Option<PathBuf>>,
    config: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--list-sources" => parsed.list_sources = true,
            "--monitor" => {
                let source = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--monitor requires a source number"))?;
                let source: usize = source
                    .parse()
                    .map_err(|_| anyhow!("Invalid source number: {}", source))?;
                i += 1;

                let mut seconds = 30;
                if let Some(next) = args.get(i + 1).filter(|a| !a.starts_with("--")) {
                    seconds = next
                        .parse()
                        .map_err(|_| anyhow!("Invalid duration: {}", next))?;
                    i += 1;
                }
                parsed.monitor = Some((source, seconds));
            }
            "--export" => {
                let path = args.get(i + 1).filter(|a| !a.starts_with("--")).map(PathBuf::from);
                if path.is_some() {
                    i += 1;
                }
                parsed.export = Some(path);
            }
            "--config" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("--config requires a path"))?;
                parsed.config = Some(PathBuf::from(path));
                i += 1;
            }
            "--help" | "-h" => parsed.help = true,
            other => return Err(anyhow!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn print_sources(config: &MonitorConfig) -> Result<()> {
    let names = config.normalizer().normalize(&list_sources()?);
    if names.is_empty() {
        println!("No MIDI sources found.");
    } else {
        println!("Available MIDI sources (inputs):");
        for (i, name) in names.iter().enumerate() {
            println!("  {}: {}", i, name);
        }
    }
    Ok(())
}

fn monitor_input(config: &MonitorConfig, source: usize, seconds: u64) -> Result<MessageLog> {
    let normalizer = config.normalizer();
    let mut ports = PortSelection::new(normalizer.normalize(&list_sources()?));

    println!("Connecting to MIDI source {}...", source);
    let input = MidiInputSource::open(source, &normalizer)?;
    let selected = normalizer.normalize(&[input.port_name()]).pop();
    if !selected.as_deref().is_some_and(|name| ports.select(name)) {
        warn!("'{}' is not in the source list, disconnects won't be detected", input.port_name());
    }

    println!("Monitoring MIDI input for {} seconds...", seconds);
    println!();
    println!("{:<20} {:>3} {:<10} {:<26} {:<16} BINARY", "TYPE", "CH", "NOTE", "DETAIL", "HEX");
    info!("Listener running on '{}'", input.port_name());

    let mut log = MessageLog::new(config.max_messages);
    let start_time = Instant::now();
    let run_duration = Duration::from_secs(seconds);
    let mut last_refresh = Instant::now();

    while start_time.elapsed() < run_duration {
        for msg in input.recv_all() {
            let formatted = format_all(&msg);
            println!(
                "{:<20} {:>3} {:<10} {:<26} {:<16} {}",
                formatted.human.message_type,
                formatted.human.channel,
                formatted.human.note,
                formatted.human.detail,
                formatted.hex.joined(),
                formatted.binary.joined()
            );
            log.append(formatted);
        }

        if last_refresh.elapsed() >= config.port_refresh() {
            last_refresh = Instant::now();
            match list_sources() {
                Ok(names) => {
                    if let PortSync::SelectionLost(name) = ports.sync(normalizer.normalize(&names)) {
                        warn!("MIDI source '{}' disconnected, stopping", name);
                        break;
                    }
                }
                Err(e) => warn!("Could not refresh MIDI sources: {}", e),
            }
        }

        thread::sleep(config.poll_interval());
    }

    input.close();
    info!("Listener stopped");

    println!();
    println!("Monitor complete! {} messages in log", log.len());
    Ok(log)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        println!("MidiWatch - Real-time MIDI monitor");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    if args.help {
        print_usage();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::load_or_default(DEFAULT_CONFIG_FILE)?,
    };
    midiwatch::logging::init(config.level()?);

    if args.list_sources {
        print_sources(&config)?;
    }

    if let Some((source, seconds)) = args.monitor {
        let log = monitor_input(&config, source, seconds)?;

        if let Some(path) = args.export {
            let path = path.unwrap_or_else(|| PathBuf::from(default_export_filename()));
            if log.export(&path) {
                println!("Exported {} messages to {}", log.len(), path.display());
            } else {
                eprintln!("Error: the export to {} failed", path.display());
                std::process::exit(1);
            }
        }
    } else if args.export.is_some() {
        eprintln!("Error: --export requires --monitor");
        eprintln!("Use --list-sources to see available sources");
        std::process::exit(1);
    }

    Ok(())
}
