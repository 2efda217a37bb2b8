//! Capture provider capability
//!
//! The session engine never talks to a capture backend directly; it goes
//! through these traits. One implementation is selected at startup by the
//! host ([`crate::PcapProvider`] in production), tests inject mocks.

use netscope_core::Result;
use std::time::SystemTime;

/// Default snapshot length (maximum bytes per packet)
pub const DEFAULT_SNAPLEN: i32 = 65535;

/// Default read timeout (milliseconds); doubles as the timer tick of the
/// capture loop's cancellation race
pub const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for opening a capture device
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per packet
    pub snaplen: i32,
    /// Read timeout in milliseconds
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Enable immediate mode (deliver packets immediately)
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
        }
    }
}

/// A raw frame as yielded by a capture device
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Capture-source timestamp of the frame
    pub timestamp: SystemTime,
    /// Captured bytes, at most snaplen of the original frame
    pub data: Vec<u8>,
    /// Original length on the wire
    pub wire_len: usize,
}

/// Outcome of one bounded read on a capture handle
#[derive(Debug)]
pub enum FrameRead {
    /// A frame arrived
    Frame(RawFrame),
    /// The read timeout elapsed with no frame; the caller re-checks its
    /// cancellation sources and reads again
    TimedOut,
    /// The source will yield no more frames
    Closed,
}

/// An open capture device.
///
/// Exclusively owned by one capture session; the device is closed when
/// the handle is dropped.
pub trait CaptureHandle: Send {
    /// Compile and apply a filter expression. The expression is opaque to
    /// the engine; compile errors surface as `Error::FilterCompile`.
    fn set_filter(&mut self, bpf: &str) -> Result<()>;

    /// Read the next frame, blocking at most the configured read timeout
    fn next_frame(&mut self) -> Result<FrameRead>;
}

/// Factory for capture handles, one per backend
pub trait CaptureProvider: Send + Sync {
    /// Open the named device for live capture
    fn open(&self, device: &str, config: &CaptureConfig) -> Result<Box<dyn CaptureHandle>>;
}
