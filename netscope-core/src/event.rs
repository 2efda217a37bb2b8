//! Capture lifecycle notifications

use crate::CapturedPacket;
use std::fmt;

/// Why a capture session ended.
///
/// Emitted exactly once per session; Display renders the wire form used
/// in `captureCompleted` notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReason {
    /// The configured capture duration ran out
    DurationElapsed,
    /// The session was stopped by an explicit stop request
    Stopped,
    /// The capture source stopped yielding frames
    SourceClosed,
    /// The decode loop hit a read fault
    Error(String),
}

impl fmt::Display for CompletionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionReason::DurationElapsed => write!(f, "duration-elapsed"),
            CompletionReason::Stopped => write!(f, "stopped"),
            CompletionReason::SourceClosed => write!(f, "source-closed"),
            CompletionReason::Error(detail) => write!(f, "error:{}", detail),
        }
    }
}

/// Downstream consumer of capture notifications.
///
/// Implementations must tolerate being called from the capture worker
/// thread. `capture_completed` is guaranteed to be the last call of a
/// session, and the controller is already idle when it runs.
pub trait CaptureSink: Send + Sync {
    /// A frame was captured and decoded
    fn packet_captured(&self, packet: CapturedPacket);

    /// The session ended; no further packets will follow
    fn capture_completed(&self, reason: CompletionReason);
}
