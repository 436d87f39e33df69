//! Shared helpers for integration tests

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a test.
const SCRUBBED_ENV: &[&str] = &[
    "FZF_PREVIEW_CMD",
    "FZF_DIFF_PREVIEW_CMD",
    "FZF_PREVIEW_COLUMNS",
    "FZF_PREVIEW_LINES",
    "FZF_PREVIEW_LOG",
    "GIT_DIR",
    "GIT_WORK_TREE",
];

/// A `PATH` directory holding symlinks to a chosen set of installed tools.
pub struct ToolPath {
    dir: TempDir,
}

impl ToolPath {
    /// Link each of `tools` that is installed; missing ones are left out.
    pub fn with(tools: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        for tool in tools {
            if let Ok(real) = which::which(tool) {
                std::os::unix::fs::symlink(real, dir.path().join(tool)).unwrap();
            }
        }
        Self { dir }
    }

    /// Only the shell and `cat`, enough for custom commands.
    pub fn minimal() -> Self {
        Self::with(&["sh", "cat"])
    }

    pub fn has(&self, tool: &str) -> bool {
        self.dir.path().join(tool).exists()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Command for one of the binaries with a clean environment and `tools` as
/// the only search path.
pub fn preview_cmd(bin: &str, tools: &ToolPath) -> Command {
    let mut cmd = Command::new(bin);
    for var in SCRUBBED_ENV {
        cmd.env_remove(var);
    }
    cmd.env("PATH", tools.path())
        .env("NO_COLOR", "1")
        .env("FZF_PREVIEW_CONFIG", tools.path().join("no-config.toml"));
    cmd
}

/// Run a command and capture (stdout, stderr, exit code).
pub fn run(cmd: &mut Command) -> (String, String, i32) {
    let output = cmd.output().expect("Failed to execute preview binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A throwaway git repository with a configured identity.
pub struct GitRepo {
    dir: TempDir,
}

impl GitRepo {
    /// `None` when git is not installed.
    pub fn init() -> Option<Self> {
        let repo = Self {
            dir: TempDir::new().unwrap(),
        };
        let ok = repo.git(&["init", "-q"])
            && repo.git(&["config", "user.name", "Test User"])
            && repo.git(&["config", "user.email", "test@example.com"])
            && repo.git(&["config", "commit.gpgsign", "false"]);
        ok.then_some(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.join(name), content).unwrap();
    }

    /// Write `name` and commit it with `message`.
    pub fn commit(&self, name: &str, content: &str, message: &str) {
        self.write(name, content);
        assert!(self.git(&["add", name]));
        assert!(self.git(&["commit", "-q", "-m", message]));
    }

    /// Abbreviated hash of HEAD.
    pub fn head(&self) -> String {
        let output = StdCommand::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(self.path())
            .output()
            .unwrap();
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn git(&self, args: &[&str]) -> bool {
        StdCommand::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}
