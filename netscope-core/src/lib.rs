//! Netscope Core Library
//!
//! This crate provides the fundamental types, the error taxonomy and the
//! event sink contract shared by the netscope capture engine.

pub mod error;
pub mod event;
pub mod packet;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use event::{CaptureSink, CompletionReason};
pub use packet::CapturedPacket;
pub use types::MacAddr;
