#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const SCENARIO_CATEGORIES: &str = r#"[
    {"identifier": "communication", "label": "Communication", "icon": "message"},
    {"identifier": "weather", "label": "Weather", "icon": "cloud.sun"}
]"#;

pub const SCENARIO_MAPPING: &str = r#"{
    "communication": ["message", "phone"],
    "weather": ["cloud.sun"]
}"#;

pub fn symcat_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_symcat"))
}

pub fn symcat() -> Command {
    let mut cmd = Command::new(symcat_binary());
    cmd.env_remove("RUST_LOG");
    cmd
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

pub fn write_document(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
