//! adb-backed host device subsystem
//!
//! - listing: `adb devices -l`
//! - execution: `adb -s <serial> <command>` through the platform shell, so
//!   the command string is forwarded exactly as the user typed it

mod listing;
mod process;

pub use listing::{parse_device_list, UNKNOWN_MODEL};

use std::process::Command;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::AdbConfig;
use crate::domain::entities::Snapshot;
use crate::domain::ports::{CommandRunner, DeviceSource};
use crate::error::{DetectionError, ExecutionError};

use process::Stopped;

/// Characters that never appear in adb serials and would break quoting
const FORBIDDEN_ID_CHARS: &[char] = &['\'', '"', '`', '$', ';', '&', '|', '<', '>', '^', '%'];

/// Talks to the adb binary
#[derive(Debug, Clone)]
pub struct AdbClient {
    program: String,
    timeout: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
}

impl AdbClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
            cancel: None,
        }
    }

    pub fn from_config(config: &AdbConfig) -> Self {
        Self::new(config.path.clone()).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Kill in-flight device commands once `cancel` is set.
    ///
    /// Listing is bounded by the timeout only.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Shell line executed for `command` on `device_id`
    pub fn command_line(&self, device_id: &str, command: &str) -> Result<String, ExecutionError> {
        validate_device_id(device_id)?;
        let mut line = format!("{} -s {}", quote(&self.program), quote(device_id));
        if !command.is_empty() {
            line.push(' ');
            line.push_str(command);
        }
        Ok(line)
    }
}

impl DeviceSource for AdbClient {
    fn list_devices(&self) -> Result<Snapshot, DetectionError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["devices", "-l"]);

        let output = process::run(cmd, self.timeout, None).map_err(|e| DetectionError::Spawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        if !output.success() {
            let mut text = output.combined();
            if output.stopped.is_some() {
                text = format!("timed out; {text}");
            }
            return Err(DetectionError::Failed {
                code: output.code(),
                output: text,
            });
        }

        let snapshot = parse_device_list(&output.stdout)?;
        trace!(count = snapshot.len(), "listed devices");
        Ok(snapshot)
    }
}

impl CommandRunner for AdbClient {
    fn run(&self, device_id: &str, command: &str) -> Result<String, ExecutionError> {
        let line = self.command_line(device_id, command)?;
        debug!(device = device_id, %line, "executing");

        let output = process::run(shell(&line), self.timeout, self.cancel.as_deref())
            .map_err(|e| ExecutionError::Spawn {
                device: device_id.to_string(),
                message: e.to_string(),
            })?;

        match output.stopped {
            Some(Stopped::TimedOut) => {
                return Err(ExecutionError::TimedOut {
                    device: device_id.to_string(),
                    secs: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
                    output: output.combined(),
                });
            }
            Some(Stopped::Cancelled) => {
                return Err(ExecutionError::Interrupted {
                    device: device_id.to_string(),
                    output: output.combined(),
                });
            }
            None => {}
        }
        if !output.success() {
            return Err(ExecutionError::Failed {
                device: device_id.to_string(),
                code: output.code(),
                output: output.combined(),
            });
        }

        Ok(output.combined())
    }
}

fn validate_device_id(id: &str) -> Result<(), ExecutionError> {
    let bad = id.is_empty()
        || id
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_ID_CHARS.contains(&c));
    if bad {
        return Err(ExecutionError::InvalidDeviceId { id: id.to_string() });
    }
    Ok(())
}

#[cfg(unix)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(format!("exec {line}"));
    cmd
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

#[cfg(unix)]
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(windows)]
fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_device_ids() {
        for id in ["", "two words", "a'b", "x;rm", "tab\tid", "$(id)"] {
            assert_eq!(
                validate_device_id(id),
                Err(ExecutionError::InvalidDeviceId { id: id.to_string() }),
                "{id:?}"
            );
        }
    }

    #[test]
    fn accepts_usb_and_network_serials() {
        for id in [
            "emulator-5554",
            "R58M12ABCDE",
            "192.168.1.20:5555",
            "adb-R58M12ABCDE-Xyz._adb-tls-connect._tcp.",
        ] {
            assert!(validate_device_id(id).is_ok(), "{id}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn command_line_scopes_by_serial_and_keeps_command_verbatim() {
        let client = AdbClient::new("adb");
        let line = client
            .command_line("emulator-5554", "shell 'echo  hi' | wc -c")
            .unwrap();
        assert_eq!(line, "'adb' -s 'emulator-5554' shell 'echo  hi' | wc -c");
    }

    #[test]
    fn command_line_rejects_bad_id_before_spawning() {
        let client = AdbClient::new("adb");
        assert!(client.command_line("bad id", "devices").is_err());
        assert!(client.run("bad id", "devices").is_err());
    }

    #[test]
    fn from_config_applies_timeout() {
        let config = AdbConfig {
            path: "/opt/adb".to_string(),
            timeout_secs: 0,
            ..AdbConfig::default()
        };

        let client = AdbClient::from_config(&config);

        assert_eq!(client.program(), "/opt/adb");
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn missing_adb_is_a_detection_error() {
        let client = AdbClient::new("/definitely/not/adb");
        assert!(matches!(
            client.list_devices(),
            Err(DetectionError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    mod fake_adb {
        use super::*;
        use std::os::unix::fs::PermissionsExt;
        use std::sync::atomic::Ordering;
        use std::thread;
        use std::time::Instant;

        fn write_script(dir: &std::path::Path, body: &str) -> String {
            let path = dir.join("adb");
            std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
            path.display().to_string()
        }

        #[test]
        fn lists_devices_from_adb_output() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(
                dir.path(),
                "echo 'List of devices attached'\necho 'A device model:Pixel'",
            );

            let snapshot = AdbClient::new(adb).list_devices().unwrap();

            assert_eq!(snapshot.len(), 1);
            assert_eq!(snapshot.devices()[0].label(), "A (Pixel)");
        }

        #[test]
        fn failing_listing_is_a_detection_error() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "echo 'cannot connect to daemon' >&2\nexit 1");

            let err = AdbClient::new(adb).list_devices().unwrap_err();

            assert_eq!(
                err,
                DetectionError::Failed {
                    code: Some(1),
                    output: "cannot connect to daemon".to_string()
                }
            );
        }

        #[test]
        fn runs_command_with_serial() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "echo \"$@\"");

            let out = AdbClient::new(adb).run("A", "shell getprop").unwrap();

            assert_eq!(out, "-s A shell getprop");
        }

        #[test]
        fn non_zero_exit_carries_output() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "echo partial\necho 'error: closed' >&2\nexit 1");

            let err = AdbClient::new(adb).run("A", "shell false").unwrap_err();

            assert_eq!(err.output(), Some("partial\nerror: closed"));
            assert!(matches!(err, ExecutionError::Failed { code: Some(1), .. }));
        }

        #[test]
        fn slow_command_times_out() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "exec sleep 5");

            let err = AdbClient::new(adb)
                .with_timeout(Some(Duration::from_millis(100)))
                .run("A", "shell sleep")
                .unwrap_err();

            assert!(matches!(err, ExecutionError::TimedOut { .. }));
        }

        #[test]
        fn timeout_covers_local_pipeline_stages() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "exec sleep 4");
            let limit = Duration::from_millis(200);

            let started = Instant::now();
            let err = AdbClient::new(adb)
                .with_timeout(Some(limit))
                .run("A", "shell logcat | cat")
                .unwrap_err();
            let elapsed = started.elapsed();

            assert!(matches!(err, ExecutionError::TimedOut { .. }));
            assert!(
                elapsed < Duration::from_secs(2),
                "timeout of {limit:?} took {elapsed:?}"
            );
        }

        #[test]
        fn cancel_interrupts_running_command() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(dir.path(), "echo started\nexec sleep 4");
            let cancel = Arc::new(AtomicBool::new(false));
            let client = AdbClient::new(adb).with_cancel(cancel.clone());
            let setter = thread::spawn(move || {
                thread::sleep(Duration::from_millis(150));
                cancel.store(true, Ordering::SeqCst);
            });

            let started = Instant::now();
            let err = client.run("A", "shell logcat | cat").unwrap_err();
            setter.join().unwrap();

            assert!(started.elapsed() < Duration::from_secs(2));
            assert_eq!(
                err,
                ExecutionError::Interrupted {
                    device: "A".to_string(),
                    output: "started".to_string(),
                }
            );
        }

        #[test]
        fn cancel_does_not_affect_listing() {
            let dir = tempfile::tempdir().unwrap();
            let adb = write_script(
                dir.path(),
                "echo 'List of devices attached'\necho 'A device model:Pixel'",
            );
            let client = AdbClient::new(adb).with_cancel(Arc::new(AtomicBool::new(true)));

            assert_eq!(client.list_devices().unwrap().len(), 1);
        }
    }
}
