use std::path::Path;

use crate::error::Result;
use crate::versions::{VersionMismatch, VersionReport, check_versions, default_pins, load_pins};

pub fn run(report: &Path, pins: Option<&Path>) -> Result<Vec<VersionMismatch>> {
    let report = VersionReport::load(report)?;
    let pins = match pins {
        Some(path) => load_pins(path, default_pins())?,
        None => default_pins(),
    };
    Ok(check_versions(&report, &pins))
}
