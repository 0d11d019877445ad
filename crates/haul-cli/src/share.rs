//! Resolving an external source to a local, accessible root path.
//!
//! The engine only ever sees the resolved path. The one concrete remote
//! implementation maps a Windows administrative share (`\\host\C$`) onto a
//! free drive letter with `net use` and releases the mapping when the
//! resolved root is dropped.

use eyre::{bail, Result};
use std::path::{Path, PathBuf};

/// Where the backup source comes from.
#[derive(Clone, Debug)]
pub enum SourceSpec {
    /// An already-accessible directory, used as-is.
    Local(PathBuf),
    /// The administrative C$ share of a remote machine, mapped on demand.
    AdminShare { host: String, user: String },
}

/// A usable source root plus whatever access it holds open. Dropping it
/// releases the drive mapping, if one was established.
pub struct ResolvedRoot {
    path: PathBuf,
    _mapping: Option<DriveMapping>,
}

impl ResolvedRoot {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg_attr(not(windows), allow(dead_code))]
struct DriveMapping {
    drive: String,
}

impl Drop for DriveMapping {
    fn drop(&mut self) {
        #[cfg(windows)]
        {
            let _ = std::process::Command::new("net")
                .args(["use", &self.drive, "/delete", "/y"])
                .status();
        }
    }
}

pub fn resolve_source(spec: SourceSpec) -> Result<ResolvedRoot> {
    match spec {
        SourceSpec::Local(path) => {
            if !path.is_dir() {
                bail!("source root is not a directory: {}", path.display());
            }
            Ok(ResolvedRoot {
                path,
                _mapping: None,
            })
        }
        SourceSpec::AdminShare { host, user } => map_admin_share(&host, &user),
    }
}

/// Drive letters to try for the mapping, Z: down to D:.
#[cfg_attr(not(windows), allow(dead_code))]
fn candidate_drives() -> impl Iterator<Item = String> {
    (b'D'..=b'Z').rev().map(|letter| format!("{}:", letter as char))
}

#[cfg_attr(not(windows), allow(dead_code))]
fn free_drive() -> Option<String> {
    candidate_drives().find(|drive| !Path::new(drive).exists())
}

/// Arguments for `net use` mapping `\\host\C$` onto `drive`. The mapping is
/// never persisted across sessions.
#[cfg_attr(not(windows), allow(dead_code))]
fn map_args(drive: &str, host: &str, user: &str, password: &str) -> Vec<String> {
    vec![
        "use".to_owned(),
        drive.to_owned(),
        format!("\\\\{host}\\C$"),
        password.to_owned(),
        format!("/user:{user}"),
        "/persistent:no".to_owned(),
    ]
}

#[cfg(windows)]
fn map_admin_share(host: &str, user: &str) -> Result<ResolvedRoot> {
    use eyre::Context;

    let drive = free_drive()
        .ok_or_else(|| eyre::eyre!("no free drive letter between D: and Z: for the mapping"))?;
    let password = rpassword::prompt_password(format!("Password for {user}@{host}: "))
        .context("reading password")?;

    let status = std::process::Command::new("net")
        .args(map_args(&drive, host, user, &password))
        .status()
        .context("running net use")?;
    if !status.success() {
        bail!(
            "mapping \\\\{host}\\C$ failed ({status}); check credentials, privileges, and that the C$ share is enabled"
        );
    }

    Ok(ResolvedRoot {
        path: PathBuf::from(&drive),
        _mapping: Some(DriveMapping { drive }),
    })
}

#[cfg(not(windows))]
fn map_admin_share(host: &str, _user: &str) -> Result<ResolvedRoot> {
    bail!(
        "mapping the administrative share of {host} requires Windows; \
         use --source with an already-accessible path instead"
    );
}
