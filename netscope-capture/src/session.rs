//! A single bounded capture run

use crate::provider::{CaptureHandle, FrameRead};
use netscope_core::{CaptureSink, CompletionReason};
use netscope_packet::decode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// One capture session: an open device handle, a deadline and a stop flag.
///
/// The session races its two cancellation sources on every loop
/// iteration: the duration deadline and the externally signaled stop
/// flag. The provider's bounded read timeout is the timer tick, so a
/// silent source still observes cancellation promptly. All exits
/// converge on the same teardown: the handle is dropped (closing the
/// device) when `run` returns.
pub struct CaptureSession {
    handle: Box<dyn CaptureHandle>,
    device: String,
    deadline: Instant,
    stop: Arc<AtomicBool>,
    sink: Arc<dyn CaptureSink>,
}

impl CaptureSession {
    /// Create a session over an already opened and filtered handle
    pub fn new(
        handle: Box<dyn CaptureHandle>,
        device: String,
        duration: Duration,
        stop: Arc<AtomicBool>,
        sink: Arc<dyn CaptureSink>,
    ) -> Self {
        Self {
            handle,
            device,
            deadline: Instant::now() + duration,
            stop,
            sink,
        }
    }

    /// Run the device-read/decode loop to completion.
    ///
    /// Never panics out of a fault; every outcome is encoded in the
    /// returned reason. Packets are forwarded to the sink in the order
    /// the device yields them.
    pub fn run(mut self) -> CompletionReason {
        debug!(device = %self.device, "capture loop started");
        let reason = self.capture_loop();
        debug!(device = %self.device, reason = %reason, "capture loop finished");
        reason
    }

    fn capture_loop(&mut self) -> CompletionReason {
        loop {
            if self.stop.load(Ordering::Relaxed) {
                return CompletionReason::Stopped;
            }
            if Instant::now() >= self.deadline {
                return CompletionReason::DurationElapsed;
            }

            match self.handle.next_frame() {
                Ok(FrameRead::Frame(frame)) => {
                    let packet = decode(&frame.data, frame.timestamp, frame.wire_len);
                    self.sink.packet_captured(packet);
                }
                Ok(FrameRead::TimedOut) => {}
                Ok(FrameRead::Closed) => return CompletionReason::SourceClosed,
                Err(e) => {
                    error!(device = %self.device, error = %e, "capture read failed");
                    return CompletionReason::Error(e.to_string());
                }
            }
        }
    }
}
