//! Capture templates for netscope
//!
//! A template is a named, reusable (filter expression, duration) pair.
//! Built-in templates are a fixed, ordered, read-only set; user templates
//! are persisted as a JSON file in the per-user config directory.

pub mod store;
pub mod template;

// Re-export main types
pub use store::{builtin_templates, TemplateStore, TEMPLATES_FILE_NAME};
pub use template::CaptureTemplate;
