use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Compiled helper binaries, provided by Cargo for integration tests.
pub const SD_DUMP: &str = env!("CARGO_BIN_EXE_sd-dump");
pub const SD_REWRITE: &str = env!("CARGO_BIN_EXE_sd-rewrite");

/// Write a catalog fixture under `dir` and return its path.
pub fn write_catalog(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write fixture {}", path.display()))?;
    Ok(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
