//! Pinned versions of vendored components.
//!
//! The HTTP client build reports its own version alongside the versions of
//! its TLS and HTTP/2 backends. A report is compared against pins by exact
//! string equality.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Component name for the HTTP client itself
pub const CURL: &str = "curl";
/// Component name for the TLS backend
pub const SSL: &str = "ssl";
/// Component name for the HTTP/2 backend
pub const NGHTTP2: &str = "nghttp2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPin {
    pub component: String,
    pub expected: String,
}

impl VersionPin {
    pub fn new(component: &str, expected: &str) -> Self {
        VersionPin {
            component: component.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub fn default_pins() -> Vec<VersionPin> {
    vec![
        VersionPin::new(CURL, "8.2.1"),
        VersionPin::new(SSL, "OpenSSL/3.1.2"),
        VersionPin::new(NGHTTP2, "nghttp2/1.55.1"),
    ]
}

/// Component versions as reported by a vendored build, keyed by component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct VersionReport {
    components: BTreeMap<String, String>,
}

impl VersionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, component: &str, version: &str) {
        self.components
            .insert(component.to_string(), version.to_string());
    }

    pub fn get(&self, component: &str) -> Option<&str> {
        self.components.get(component).map(String::as_str)
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

/// Load pin overrides from a JSON object mapping component names to
/// versions and apply them on top of `base`.
///
/// Components not named in the file keep their `base` pin. A file naming no
/// components is rejected.
pub fn load_pins(path: &Path, base: Vec<VersionPin>) -> Result<Vec<VersionPin>> {
    let overrides: BTreeMap<String, String> = read_json(path)?;
    if overrides.is_empty() {
        return Err(Error::EmptyPins {
            path: path.to_path_buf(),
        });
    }
    Ok(apply_overrides(base, overrides))
}

/// Replace the expected version of each named component, appending pins for
/// components `pins` does not cover yet.
pub fn apply_overrides(
    mut pins: Vec<VersionPin>,
    overrides: BTreeMap<String, String>,
) -> Vec<VersionPin> {
    for (component, expected) in overrides {
        match pins.iter().position(|pin| pin.component == component) {
            Some(index) => {
                debug!(
                    component = %component,
                    from = %pins[index].expected,
                    to = %expected,
                    "overriding pin"
                );
                pins[index].expected = expected;
            }
            None => pins.push(VersionPin {
                component,
                expected,
            }),
        }
    }
    pins
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatch {
    pub component: String,
    pub expected: String,
    /// `None` when the report does not mention the component at all
    pub actual: Option<String>,
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.actual {
            Some(actual) => write!(
                f,
                "the version of {} does not match the expected version (expected {}, got {})",
                self.component, self.expected, actual
            ),
            None => write!(
                f,
                "the version of {} does not match the expected version (expected {}, not reported)",
                self.component, self.expected
            ),
        }
    }
}

/// Compare every pin against the report, returning one entry per mismatch.
pub fn check_versions(report: &VersionReport, pins: &[VersionPin]) -> Vec<VersionMismatch> {
    pins.iter()
        .filter_map(|pin| {
            let actual = report.get(&pin.component);
            debug!(
                component = %pin.component,
                expected = %pin.expected,
                actual = ?actual,
                "checking version pin"
            );
            if actual == Some(pin.expected.as_str()) {
                None
            } else {
                Some(VersionMismatch {
                    component: pin.component.clone(),
                    expected: pin.expected.clone(),
                    actual: actual.map(str::to_string),
                })
            }
        })
        .collect()
}
