//! Template persistence

use crate::template::CaptureTemplate;
use netscope_capture::filters;
use netscope_core::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File name of the user template set inside the app config directory
pub const TEMPLATES_FILE_NAME: &str = "capture_templates.json";

/// App directory under the per-user config location
const APP_CONFIG_DIR: &str = "netscope";

/// Default duration for built-in templates, seconds
const BUILTIN_DURATION_SECS: u64 = 30;

/// The fixed, ordered set of built-in templates.
///
/// Constant for the process lifetime; user templates are appended after
/// these in `list_all`.
pub fn builtin_templates() -> Vec<CaptureTemplate> {
    vec![
        CaptureTemplate::new(
            "HTTP/HTTPS",
            "HTTP & HTTPS traffic",
            filters::web_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "DNS",
            "DNS queries",
            filters::dns_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "ARP",
            "Address resolution",
            filters::arp_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "ICMP",
            "Ping traffic",
            filters::icmp_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "IPv4",
            "All IPv4",
            filters::ipv4_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "IPv6",
            "All IPv6",
            filters::ipv6_filter(),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "SSH",
            "SSH access",
            filters::tcp_port_filter(22),
            BUILTIN_DURATION_SECS,
        ),
        CaptureTemplate::new(
            "RDP",
            "Remote desktop",
            filters::tcp_port_filter(3389),
            BUILTIN_DURATION_SECS,
        ),
    ]
}

/// Persists user-defined capture templates to a single JSON file.
///
/// The backing file is treated as exclusively owned by the store for the
/// duration of a save; each save rewrites the whole user set through a
/// temp-file rename so a concurrent reader never observes a partial
/// write.
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Create a store over the default per-user config location
    pub fn new() -> Result<Self> {
        let base = directories::BaseDirs::new()
            .ok_or_else(|| Error::persistence("could not resolve the user config directory"))?;
        let path = base
            .config_dir()
            .join(APP_CONFIG_DIR)
            .join(TEMPLATES_FILE_NAME);
        Ok(Self { path })
    }

    /// Create a store over an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All templates: built-ins in their fixed order, then user templates
    /// in on-disk order.
    ///
    /// Never fails. A missing backing file means "no user templates"; an
    /// unreadable or unparseable one is logged and the built-ins are
    /// returned alone.
    pub fn list_all(&self) -> Vec<CaptureTemplate> {
        let mut all = builtin_templates();
        match self.load_user() {
            Ok(user) => all.extend(user),
            Err(e) => warn!(error = %e, "could not load user templates"),
        }
        all
    }

    /// Append a user template.
    ///
    /// A case-insensitive name collision within the current user set is
    /// rejected with `Error::DuplicateTemplate` without touching storage;
    /// built-in names are not checked. On success the whole user set is
    /// rewritten atomically.
    pub fn save(&self, template: CaptureTemplate) -> Result<()> {
        let mut user = self.load_user()?;

        let name_folded = template.name.to_lowercase();
        if user.iter().any(|t| t.name.to_lowercase() == name_folded) {
            return Err(Error::DuplicateTemplate(template.name));
        }

        info!(name = %template.name, "saving capture template");
        user.push(template);
        self.write_user(&user)
    }

    fn load_user(&self) -> Result<Vec<CaptureTemplate>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_slice(&data).map_err(|e| {
            Error::persistence(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_user(&self, templates: &[CaptureTemplate]) -> Result<()> {
        let data = serde_json::to_vec_pretty(templates)
            .map_err(|e| Error::persistence(format!("failed to serialize templates: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::persistence(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &data).map_err(|e| {
            Error::persistence(format!("failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            Error::persistence(format!("failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}
