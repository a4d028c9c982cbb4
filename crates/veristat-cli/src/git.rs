use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Resolve the HEAD commit OID of the repository at `dir`.
///
/// The reporting core treats the OID as an opaque string; this collaborator
/// fails fast when the directory is not a usable git checkout.
pub(crate) fn head_commit_oid(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(dir)
        .output()
        .context("failed to run git rev-parse HEAD")?;

    if !output.status.success() {
        bail!(
            "git rev-parse HEAD failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let oid = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if oid.is_empty() {
        bail!("git rev-parse HEAD returned an empty commit OID");
    }
    Ok(oid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_repository_directory_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = head_commit_oid(dir.path()).unwrap_err();
        assert!(err.to_string().contains("git rev-parse HEAD"));
    }
}
