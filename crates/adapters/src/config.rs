// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of the yandex-disk daemon's own configuration file.
//!
//! Grounded in `checkDaemon` (`examples/original_source/ydisk/check.go`):
//! scan lines looking for `dir` and `auth` prefixes, extract the quoted
//! value, stop once both are found.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The two paths extracted from a daemon configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfig {
    /// The synchronized folder (`dir="..."`).
    pub dir: PathBuf,
    /// The credentials file (`auth="..."`).
    pub auth: PathBuf,
}

/// Default location of the daemon's own configuration file,
/// `~/.config/yandex-disk/config.cfg`, matching the original daemon's
/// default. Returns `None` if the home directory cannot be resolved.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".config/yandex-disk/config.cfg"))
}

/// Read `conf` and extract the `dir` and `auth` fields.
///
/// Lines are processed until both fields are found or end-of-file is
/// reached. Returns `None` if either field is missing from the file; it is
/// the caller's responsibility to also check that the resulting paths
/// exist on disk (see `NotConfigured` in the Gateway).
pub fn extract_dir_and_auth(conf: &Path) -> std::io::Result<Option<DaemonConfig>> {
    let file = std::fs::File::open(conf)?;
    let reader = BufReader::new(file);

    let mut dir: Option<PathBuf> = None;
    let mut auth: Option<PathBuf> = None;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if dir.is_none() {
            if let Some(value) = extract_field(trimmed, "dir") {
                dir = Some(PathBuf::from(value));
            }
        }
        if auth.is_none() {
            if let Some(value) = extract_field(trimmed, "auth") {
                auth = Some(PathBuf::from(value));
            }
        }
        if dir.is_some() && auth.is_some() {
            break;
        }
    }

    Ok(match (dir, auth) {
        (Some(dir), Some(auth)) => Some(DaemonConfig { dir, auth }),
        _ => None,
    })
}

/// If `line` begins with `name` followed (after any `=`/whitespace) by a
/// quoted value, return the substring between the first and last quote
/// character on the line.
fn extract_field<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?;
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=')?;
    let first = rest.find(['"', '\''])?;
    let last = rest.rfind(['"', '\''])?;
    if last <= first {
        return None;
    }
    Some(&rest[first + 1..last])
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
