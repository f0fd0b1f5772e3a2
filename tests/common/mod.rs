#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodmix_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodmix").unwrap();
    cmd.env_remove("MOODMIX_ROOT");
    cmd.env_remove("MOODMIX_OWNER");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create an entry in `dir` and return its id
pub fn new_entry(dir: &Path, title: &str, content: &str) -> String {
    let output = moodmix_cmd()
        .current_dir(dir)
        .args(["new", "--title", title, "--content", content])
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Id: "))
        .expect("entry id in output")
        .trim()
        .to_string()
}
