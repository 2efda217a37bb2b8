//! Live packet capture engine for netscope
//!
//! This crate owns the capture lifecycle: opening a device through a
//! provider capability, running a single bounded capture session on a
//! worker thread, decoding frames and forwarding them to a sink.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use netscope_capture::{CaptureController, PcapProvider};
//! use netscope_core::{CaptureSink, CapturedPacket, CompletionReason};
//!
//! struct PrintSink;
//!
//! impl CaptureSink for PrintSink {
//!     fn packet_captured(&self, packet: CapturedPacket) {
//!         println!("{}", packet.summary);
//!     }
//!     fn capture_completed(&self, reason: CompletionReason) {
//!         println!("done: {}", reason);
//!     }
//! }
//!
//! # fn main() -> netscope_core::Result<()> {
//! let controller = CaptureController::new(Arc::new(PcapProvider), Arc::new(PrintSink));
//! controller.start_capture("eth0", "tcp port 443", Duration::from_secs(30))?;
//! // ... later
//! controller.stop_capture()?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod controller;
pub mod filters;
pub mod provider;
pub mod session;

// Re-export main types
pub use backend::PcapProvider;
pub use controller::CaptureController;
pub use provider::{CaptureConfig, CaptureHandle, CaptureProvider, FrameRead, RawFrame};
pub use session::CaptureSession;
