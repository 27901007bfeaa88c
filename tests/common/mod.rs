//! Common test utilities for adbmux CLI tests.
//!
//! `TestEnv` owns a temp directory holding a fake `adb` shell script. The
//! script answers `devices -l` from `devices.txt` (rewritable while adbmux
//! is watching) and appends every `-s <serial> ...` invocation to
//! `calls.log`. Serials starting with `fail` exit non-zero.

#![cfg(unix)]
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

pub const HEADER: &str = "List of devices attached";

/// Result of running the adbmux binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let env = Self { dir };
        env.write_script();
        env.set_devices(&[]);
        env
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn adb_path(&self) -> PathBuf {
        self.path("adb")
    }

    /// Replace the listing; each entry is `(serial, state, model)`
    pub fn set_devices(&self, devices: &[(&str, &str, &str)]) {
        let mut listing = format!("{HEADER}\n");
        for (serial, state, model) in devices {
            listing.push_str(&format!(
                "{serial}\t{state} product:sdk model:{model} device:generic\n"
            ));
        }
        listing.push('\n');
        // write then rename so a concurrent `cat` never sees a partial file
        let tmp = self.path("devices.txt.tmp");
        fs::write(&tmp, listing).unwrap();
        fs::rename(tmp, self.path("devices.txt")).unwrap();
    }

    /// Make `adb devices -l` fail with the given exit code
    pub fn break_listing(&self, code: i32) {
        fs::write(self.path("devices.exit"), code.to_string()).unwrap();
    }

    pub fn write_config(&self, toml: &str) {
        fs::write(self.path("config.toml"), toml).unwrap();
    }

    /// Serials the fake adb was asked to run a command on, in call order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path("calls.log"))
            .unwrap_or_default()
            .lines()
            .filter_map(|line| line.split_whitespace().next().map(str::to_string))
            .collect()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_adbmux"));
        cmd.env("ADBMUX_CONFIG", self.path("config.toml"))
            .env("ADBMUX_ADB", self.adb_path())
            .env_remove("ADBMUX_TIMEOUT")
            .env_remove("ADBMUX_INTERVAL_MS")
            .env_remove("ADBMUX_COLOR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .current_dir(self.dir.path());
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.command().args(args).output().unwrap().into()
    }

    /// Start `adbmux` in the background with piped output
    pub fn spawn(&self, args: &[&str]) -> Child {
        self.command()
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start adbmux")
    }

    /// Poll until `predicate` holds or `timeout` elapses
    pub fn wait_for(&self, timeout: Duration, predicate: impl Fn(&Self) -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if predicate(self) {
                return true;
            }
            thread::sleep(Duration::from_millis(25));
        }
        predicate(self)
    }

    fn write_script(&self) {
        let dir = self.dir.path().display();
        let script = format!(
            r#"#!/bin/sh
DIR='{dir}'
if [ "$1" = "devices" ]; then
  cat "$DIR/devices.txt"
  if [ -f "$DIR/devices.exit" ]; then
    echo "adb: daemon not running" >&2
    exit "$(cat "$DIR/devices.exit")"
  fi
  exit 0
fi
if [ "$1" = "-s" ]; then
  serial="$2"
  shift 2
  echo "$serial $*" >> "$DIR/calls.log"
  case "$serial" in
    fail*) echo "error: device '$serial' not found" >&2; exit 3 ;;
  esac
  echo "ran '$*' on $serial"
  exit 0
fi
echo "unexpected: $*" >&2
exit 64
"#
        );
        let path = self.adb_path();
        let tmp = self.path("adb.tmp");
        fs::write(&tmp, script).unwrap();
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o755)).unwrap();
        fs::rename(tmp, &path).unwrap();
    }
}

/// Kill a background adbmux and collect what it printed
pub fn stop(mut child: Child) -> TestResult {
    let _ = child.kill();
    child.wait_with_output().unwrap().into()
}
