use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_DB");
    cmd.env_remove("RUST_LOG");
    cmd.env("EDITOR", "false");
    cmd.arg("--db").arg(db);
    cmd
}

/// Short id printed by `diary new`, e.g. "✓ Entry 3f2a9c1e saved."
pub fn saved_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.split_whitespace()
        .nth(2)
        .expect("no id in output")
        .to_string()
}
