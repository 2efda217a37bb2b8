//! Capture controller: the exclusivity gate and lifecycle owner
//!
//! One controller instance is created at application start and passed by
//! reference to all callers. It holds at most one live session at a
//! time; the session slot behind a single exclusive lock is the whole
//! Active/Idle state machine.

use crate::provider::{CaptureConfig, CaptureProvider};
use crate::session::CaptureSession;
use netscope_core::{CaptureSink, Error, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// Bookkeeping for the one live session
struct ActiveSession {
    /// Cooperative stop flag shared with the worker
    stop: Arc<AtomicBool>,
    /// Device the session captures on
    device: String,
    /// When the session started
    started_at: SystemTime,
}

/// Controller owning the single live capture session.
///
/// `start_capture` and `stop_capture` only ever block on the session
/// slot lock; the device-read/decode loop runs on its own worker thread
/// outside the lock. The worker clears the slot and emits the completion
/// notification itself, so by the time a sink observes
/// `capture_completed` the controller is idle again.
pub struct CaptureController {
    provider: Arc<dyn CaptureProvider>,
    sink: Arc<dyn CaptureSink>,
    config: CaptureConfig,
    active: Arc<Mutex<Option<ActiveSession>>>,
}

impl CaptureController {
    /// Create a controller over a capture provider and a notification sink
    pub fn new(provider: Arc<dyn CaptureProvider>, sink: Arc<dyn CaptureSink>) -> Self {
        Self {
            provider,
            sink,
            config: CaptureConfig::default(),
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a controller with a custom capture configuration
    pub fn with_config(
        provider: Arc<dyn CaptureProvider>,
        sink: Arc<dyn CaptureSink>,
        config: CaptureConfig,
    ) -> Self {
        Self {
            provider,
            sink,
            config,
            active: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a bounded capture on the named device.
    ///
    /// Rejects with `Error::AlreadyCapturing` while a session is live —
    /// no queuing, no preemption, no effect on the running session. The
    /// device is opened and the filter compiled before the controller
    /// becomes active; if either step fails the opened handle is closed
    /// and the controller stays idle.
    pub fn start_capture(&self, device: &str, bpf_filter: &str, duration: Duration) -> Result<()> {
        if device.is_empty() {
            return Err(Error::invalid_parameter("device", "must not be empty"));
        }
        if duration.is_zero() {
            return Err(Error::invalid_parameter(
                "duration",
                "must be greater than zero",
            ));
        }

        let mut active = self.active.lock();
        if active.is_some() {
            return Err(Error::AlreadyCapturing);
        }

        let mut handle = self.provider.open(device, &self.config)?;
        if !bpf_filter.is_empty() {
            // The `?` drops the handle, closing the device
            handle.set_filter(bpf_filter)?;
        }

        let stop = Arc::new(AtomicBool::new(false));
        let session = CaptureSession::new(
            handle,
            device.to_string(),
            duration,
            Arc::clone(&stop),
            Arc::clone(&self.sink),
        );

        *active = Some(ActiveSession {
            stop,
            device: device.to_string(),
            started_at: SystemTime::now(),
        });

        let slot = Arc::clone(&self.active);
        let sink = Arc::clone(&self.sink);
        let spawned = thread::Builder::new()
            .name("netscope-capture".to_string())
            .spawn(move || {
                let reason = session.run();
                *slot.lock() = None;
                sink.capture_completed(reason);
            });

        match spawned {
            Ok(_handle) => {
                info!(device = %device, filter = %bpf_filter, secs = duration.as_secs(), "capture started");
                Ok(())
            }
            Err(e) => {
                *active = None;
                Err(Error::Io(e))
            }
        }
    }

    /// Request that the running session stop.
    ///
    /// Idle is tolerated: a redundant stop is a successful no-op. When a
    /// session is live this only signals the stop flag and returns;
    /// teardown is asynchronous and observed via the completion
    /// notification.
    pub fn stop_capture(&self) -> Result<()> {
        let active = self.active.lock();
        match active.as_ref() {
            Some(session) => {
                session.stop.store(true, Ordering::Relaxed);
                info!(device = %session.device, "capture stop requested");
            }
            None => debug!("stop requested while idle"),
        }
        Ok(())
    }

    /// Whether a session is currently live
    pub fn is_capturing(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Start time of the live session, if any
    pub fn started_at(&self) -> Option<SystemTime> {
        self.active.lock().as_ref().map(|s| s.started_at)
    }
}

impl Drop for CaptureController {
    fn drop(&mut self) {
        // Signal the worker; it owns teardown
        if let Some(session) = self.active.lock().as_ref() {
            session.stop.store(true, Ordering::Relaxed);
        }
    }
}
