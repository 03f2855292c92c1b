use assert_cmd::Command;
use std::path::Path;

pub fn daymark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daymark").unwrap();
    cmd.env_remove("DAYMARK_ROOT");
    cmd.env_remove("DAYMARK_LOG");
    cmd
}

/// Command running inside `dir` with a fixed "today" (Friday, Jan 17, 2025)
#[allow(dead_code)]
pub fn daymark_in(dir: &Path) -> Command {
    let mut cmd = daymark_cmd();
    cmd.current_dir(dir).arg("--as-of").arg("2025-01-17");
    cmd
}
