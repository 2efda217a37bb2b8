//! netscope command-line host
//!
//! Wires a pcap-backed capture controller to stdout and exposes the
//! template store. Capture runs until its duration elapses, Ctrl-C, or
//! the source closes.

mod args;

use args::{Cli, Commands, TemplateCommands};
use netscope_capture::{CaptureController, PcapProvider};
use netscope_core::{CaptureSink, CapturedPacket, CompletionReason, Error, Result};
use netscope_templates::{CaptureTemplate, TemplateStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::Level;

/// Duration used when neither the flag nor a template supplies one
const DEFAULT_CAPTURE_SECS: u64 = 30;

enum Event {
    Packet(CapturedPacket),
    Completed(CompletionReason),
}

/// Sink forwarding worker-thread notifications into the async host loop
struct ChannelSink {
    tx: mpsc::UnboundedSender<Event>,
}

impl CaptureSink for ChannelSink {
    fn packet_captured(&self, packet: CapturedPacket) {
        let _ = self.tx.send(Event::Packet(packet));
    }

    fn capture_completed(&self, reason: CompletionReason) {
        let _ = self.tx.send(Event::Completed(reason));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command {
        Commands::Capture {
            interface,
            filter,
            duration,
            template,
            json,
        } => run_capture(interface, filter, duration, template, json).await,
        Commands::Templates { command } => match command {
            TemplateCommands::List => list_templates(),
            TemplateCommands::Save {
                name,
                description,
                filter,
                duration,
            } => save_template(name, description, filter, duration),
        },
    }
}

async fn run_capture(
    interface: String,
    mut filter: String,
    duration: Option<u64>,
    template: Option<String>,
    json: bool,
) -> Result<()> {
    let mut secs = duration;

    if let Some(name) = template {
        let store = TemplateStore::new()?;
        let found = store
            .list_all()
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(&name))
            .ok_or_else(|| {
                Error::invalid_parameter("template", format!("no template named '{}'", name))
            })?;
        filter = found.bpf_filter;
        if secs.is_none() && found.duration > 0 {
            secs = Some(found.duration);
        }
    }

    let secs = secs.unwrap_or(DEFAULT_CAPTURE_SECS);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = Arc::new(ChannelSink { tx });
    let controller = Arc::new(CaptureController::new(Arc::new(PcapProvider), sink));

    controller.start_capture(&interface, &filter, Duration::from_secs(secs))?;
    eprintln!("capturing on {} for {}s, ctrl-c to stop", interface, secs);

    let stopper = Arc::clone(&controller);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = stopper.stop_capture();
        }
    });

    while let Some(event) = rx.recv().await {
        match event {
            Event::Packet(packet) => {
                if json {
                    if let Ok(line) = serde_json::to_string(&packet) {
                        println!("{}", line);
                    }
                } else {
                    print_packet(&packet);
                }
            }
            Event::Completed(reason) => {
                eprintln!("capture completed: {}", reason);
                break;
            }
        }
    }

    Ok(())
}

fn print_packet(packet: &CapturedPacket) {
    let ts: chrono::DateTime<chrono::Local> = packet.timestamp.into();
    println!(
        "{} {:>6}B {:<6} {}",
        ts.format("%H:%M:%S%.6f"),
        packet.length,
        packet.protocol,
        packet.summary
    );
}

fn list_templates() -> Result<()> {
    let store = TemplateStore::new()?;
    for template in store.list_all() {
        println!(
            "{:<12} {:>4}s  {:<32} {}",
            template.name, template.duration, template.bpf_filter, template.description
        );
    }
    Ok(())
}

fn save_template(name: String, description: String, filter: String, duration: u64) -> Result<()> {
    let store = TemplateStore::new()?;
    store.save(CaptureTemplate::new(
        name.clone(),
        description,
        filter,
        duration,
    ))?;
    println!("saved template '{}' to {}", name, store.path().display());
    Ok(())
}
