//! Blocking process execution with an optional deadline
//!
//! On unix the child leads its own process group, so stopping it also stops
//! anything it spawned (the other half of `adb logcat | grep`, for example).

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// How long output is still collected after a kill
const KILL_GRACE: Duration = Duration::from_millis(200);

/// Why a child was killed before it exited on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    TimedOut,
    Cancelled,
}

/// What a finished (or killed) process left behind
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: Option<ExitStatus>,
    pub stdout: String,
    pub stderr: String,
    pub stopped: Option<Stopped>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.stopped.is_none() && self.status.map(|s| s.success()).unwrap_or(false)
    }

    pub fn code(&self) -> Option<i32> {
        self.status.and_then(|s| s.code())
    }

    /// stdout followed by stderr, trailing whitespace removed
    pub fn combined(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(self.stdout.trim_end());
        let err = self.stderr.trim_end();
        if !err.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(err);
        }
        out
    }
}

/// Run `command` to completion, killing it once `timeout` elapses or
/// `cancel` is set.
///
/// Output is drained on helper threads so a chatty child cannot block on a
/// full pipe while we wait.
pub fn run(
    mut command: Command,
    timeout: Option<Duration>,
    cancel: Option<&AtomicBool>,
) -> io::Result<ProcessOutput> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    let mut child = command.spawn()?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let (status, stopped) = if timeout.is_none() && cancel.is_none() {
        (Some(child.wait()?), None)
    } else {
        supervise(&mut child, timeout, cancel)?
    };

    // a killed child may leave grandchildren holding the pipes open
    let until = stopped.map(|_| Instant::now() + KILL_GRACE);

    Ok(ProcessOutput {
        status,
        stdout: collect(&stdout, until),
        stderr: collect(&stderr, until),
        stopped,
    })
}

fn supervise(
    child: &mut Child,
    timeout: Option<Duration>,
    cancel: Option<&AtomicBool>,
) -> io::Result<(Option<ExitStatus>, Option<Stopped>)> {
    let deadline = timeout.map(|limit| Instant::now() + limit);
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((Some(status), None));
        }
        let stop = if cancel.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
            Some(Stopped::Cancelled)
        } else if deadline.is_some_and(|at| Instant::now() >= at) {
            Some(Stopped::TimedOut)
        } else {
            None
        };
        if let Some(reason) = stop {
            kill_group(child);
            // already-exited races are fine, wait() reaps either way
            let status = child.wait().ok();
            return Ok((status, Some(reason)));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn kill_group(child: &mut Child) {
    // the child is not reaped yet, so its pid still names our group
    if let Ok(pgid) = libc::pid_t::try_from(child.id()) {
        // SAFETY: kill(2) takes no pointers; a stale group only yields ESRCH
        unsafe {
            libc::kill(-pgid, libc::SIGKILL);
        }
    }
    let _ = child.kill();
}

#[cfg(not(unix))]
fn kill_group(child: &mut Child) {
    let _ = child.kill();
}

fn drain<R>(pipe: Option<R>) -> Receiver<Vec<u8>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    if let Some(mut pipe) = pipe {
        thread::spawn(move || {
            let mut buf = [0u8; 4096];
            loop {
                match pipe.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => {
                        if tx.send(buf[..n].to_vec()).is_err() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(_) => break,
                }
            }
        });
    }
    rx
}

/// Gather drained chunks until the pipe closes, or until `until` passes.
fn collect(chunks: &Receiver<Vec<u8>>, until: Option<Instant>) -> String {
    let mut bytes = Vec::new();
    loop {
        let next = match until {
            None => chunks.recv().ok(),
            Some(at) => chunks
                .recv_timeout(at.saturating_duration_since(Instant::now()))
                .ok(),
        };
        match next {
            Some(chunk) => bytes.extend_from_slice(&chunk),
            None => break,
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}
