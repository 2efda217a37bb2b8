//! Capture template record

use serde::{Deserialize, Serialize};

/// A named, reusable capture configuration.
///
/// The name is the key and is compared case-insensitively. The filter
/// expression is opaque here; it is handed verbatim to the capture
/// provider when a capture is started from the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureTemplate {
    /// Unique template name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// BPF filter expression, serialized as `bpfFilter`
    pub bpf_filter: String,
    /// Default capture duration in seconds
    #[serde(default)]
    pub duration: u64,
}

impl CaptureTemplate {
    /// Create a new template
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        bpf_filter: impl Into<String>,
        duration: u64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            bpf_filter: bpf_filter.into(),
            duration,
        }
    }
}
