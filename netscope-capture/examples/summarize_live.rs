//! Example: Live capture with decoded summaries
//!
//! Captures DNS traffic for ten seconds and prints one summary line per
//! packet. Note: Requires root/administrator privileges to run.
//!
//! Run with: sudo cargo run --example summarize_live -- <interface>

use netscope_capture::{filters, CaptureController, PcapProvider};
use netscope_core::{CaptureSink, CapturedPacket, CompletionReason};
use std::sync::mpsc::{channel, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Event {
    Packet(CapturedPacket),
    Completed(CompletionReason),
}

struct PrintSink {
    tx: Mutex<Sender<Event>>,
}

impl CaptureSink for PrintSink {
    fn packet_captured(&self, packet: CapturedPacket) {
        let _ = self.tx.lock().unwrap().send(Event::Packet(packet));
    }

    fn capture_completed(&self, reason: CompletionReason) {
        let _ = self.tx.lock().unwrap().send(Event::Completed(reason));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let interface = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "eth0".to_string());

    let filter = filters::dns_filter();
    println!("Capturing on: {}", interface);
    println!("BPF Filter: {}", filter);
    println!();

    let (tx, rx) = channel();
    let sink = Arc::new(PrintSink { tx: Mutex::new(tx) });
    let controller = CaptureController::new(Arc::new(PcapProvider), sink);

    controller.start_capture(&interface, &filter, Duration::from_secs(10))?;

    for event in rx {
        match event {
            Event::Packet(packet) => {
                println!("{} bytes  {}", packet.length, packet.summary);
            }
            Event::Completed(reason) => {
                println!("\n=== Capture Complete: {} ===", reason);
                break;
            }
        }
    }

    Ok(())
}
