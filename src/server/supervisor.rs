use std::process::{Child, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::{Commands, ServerConfig};
use crate::log::LogSink;
use crate::status::Status;

use super::kill::TreeKill;
use super::process::{self, LineCallback};
use super::toolchain;

#[derive(Debug, Error)]
pub enum Error {
    #[error("install command exited with a non-zero status")]
    InstallFailed,
    #[error("could not run the {what} command: {source}")]
    Spawn {
        what: &'static str,
        source: std::io::Error,
    },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

pub type ReadyCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Supervises at most one dev-server child process. Start runs the install
/// step (when needed) and the serve command on a background thread, pumping
/// output into the log sink; stop tears the whole process tree down.
///
/// The ready callback is injected so the production browser-open side effect
/// stays out of the supervision logic.
pub struct Supervisor {
    commands: Commands,
    server: ServerConfig,
    tree_kill: TreeKill,
    child: Arc<Mutex<Option<Child>>>,
    status: Arc<Mutex<Status>>,
    on_ready: ReadyCallback,
}

impl Supervisor {
    pub fn new(commands: Commands, server: ServerConfig, on_ready: ReadyCallback) -> Self {
        Self {
            commands,
            server,
            tree_kill: TreeKill::select(),
            child: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(Status::Stopped)),
            on_ready,
        }
    }

    /// Whether a child process is currently owned.
    ///
    /// A server that exits on its own (crash, Ctrl-C in its own terminal)
    /// still counts as owned until an explicit stop; the reader thread only
    /// drains the stream, it never clears the slot.
    pub fn is_running(&self) -> bool {
        self.child.lock().unwrap().is_some()
    }

    pub fn status(&self) -> Status {
        *self.status.lock().unwrap()
    }

    /// Kick off the startup sequence. A no-op while a child is owned or a
    /// previous startup sequence is still in flight.
    pub fn start(&self, sink: &LogSink) -> StartOutcome {
        if self.is_running() || self.status() != Status::Stopped {
            return StartOutcome::AlreadyRunning;
        }
        *self.status.lock().unwrap() = Status::Installing;

        let commands = self.commands.clone();
        let server = self.server.clone();
        let child_slot = Arc::clone(&self.child);
        let status = Arc::clone(&self.status);
        let on_ready = Arc::clone(&self.on_ready);
        let sink = sink.clone();

        thread::spawn(move || {
            if let Err(err) =
                run_startup_sequence(&commands, &server, &child_slot, &status, on_ready, &sink)
            {
                sink.push(format!("Startup failed: {err}"));
                *status.lock().unwrap() = Status::Stopped;
            }
        });

        StartOutcome::Started
    }

    /// Terminate the owned process tree, clear the slot and confirm in the
    /// log. A no-op when nothing is owned.
    pub fn stop(&self, sink: &LogSink) {
        // Take-and-reset happens under the slot lock so the ready watcher,
        // which writes Running under the same lock, cannot interleave and
        // leave the status stuck on Running with the slot empty.
        let taken = {
            let mut slot = self.child.lock().unwrap();
            let taken = slot.take();
            if taken.is_some() {
                *self.status.lock().unwrap() = Status::Stopped;
            }
            taken
        };
        let Some(mut child) = taken else {
            return;
        };

        sink.push("Stopping the dev server...");
        if let Err(err) = self.tree_kill.terminate(&mut child) {
            sink.push(format!("Terminate failed: {err}"));
        }
        sink.push("Server stopped.");
    }
}

fn run_startup_sequence(
    commands: &Commands,
    server: &ServerConfig,
    child_slot: &Arc<Mutex<Option<Child>>>,
    status: &Arc<Mutex<Status>>,
    on_ready: ReadyCallback,
    sink: &LogSink,
) -> Result<(), Error> {
    if toolchain::install_needed(&commands.install_marker) {
        sink.push("First run detected, installing dependencies...");
        let installed =
            process::run_to_completion(process::shell_command(&commands.install), sink.clone())
                .map_err(|source| Error::Spawn {
                    what: "install",
                    source,
                })?;
        if !installed {
            return Err(Error::InstallFailed);
        }
        sink.push("Dependencies installed.");
    }

    sink.push("Starting the dev server...");
    *status.lock().unwrap() = Status::Starting;

    let mut cmd = process::shell_command(&commands.serve);
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = cmd.spawn().map_err(|source| Error::Spawn {
        what: "serve",
        source,
    })?;

    // Own the child before any output is read, so a stop issued the instant
    // the server reports ready finds the handle in place.
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    *child_slot.lock().unwrap() = Some(child);

    let watcher = ready_watcher(
        server.clone(),
        Arc::clone(child_slot),
        Arc::clone(status),
        sink.clone(),
        on_ready,
    );
    process::spawn_stream_pumps(stdout, stderr, sink.clone(), Some(watcher));
    Ok(())
}

/// Scan each output line for the ready marker. The latch is created fresh
/// for every run, and the swap makes the callback fire exactly once even
/// with the marker recurring or appearing on both streams.
///
/// Running is written under the slot lock, and only while the child is
/// still owned: a stop racing with readiness must not see its Stopped
/// overwritten afterwards, which would wedge the start guard for good.
fn ready_watcher(
    server: ServerConfig,
    child_slot: Arc<Mutex<Option<Child>>>,
    status: Arc<Mutex<Status>>,
    sink: LogSink,
    on_ready: ReadyCallback,
) -> LineCallback {
    let opened = AtomicBool::new(false);
    Arc::new(move |line: &str| {
        if line.contains(&server.ready_marker) && !opened.swap(true, Ordering::SeqCst) {
            {
                let slot = child_slot.lock().unwrap();
                if slot.is_some() {
                    *status.lock().unwrap() = Status::Running;
                }
            }
            sink.push("Server is ready, opening the browser...");
            // Give the listening socket a moment to become connectable.
            thread::sleep(Duration::from_millis(server.open_delay_ms));
            on_ready(&server.url);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{self, LogLine};
    use std::sync::mpsc::Receiver;
    use std::time::Instant;

    fn test_server(marker: &str, delay_ms: u64) -> ServerConfig {
        ServerConfig {
            url: "http://localhost:5173".to_string(),
            ready_marker: marker.to_string(),
            open_delay_ms: delay_ms,
        }
    }

    fn counting_callback() -> (ReadyCallback, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);
        let callback: ReadyCallback = Arc::new(move |url: &str| {
            recorded.lock().unwrap().push(url.to_string());
        });
        (callback, calls)
    }

    fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        false
    }

    fn drain(rx: &Receiver<LogLine>) -> Vec<String> {
        rx.try_iter().map(|l| l.message).collect()
    }

    fn empty_slot() -> Arc<Mutex<Option<Child>>> {
        Arc::new(Mutex::new(None))
    }

    #[test]
    fn marker_fires_callback_exactly_once_even_when_it_recurs() {
        let server = test_server("Local:", 0);
        let status = Arc::new(Mutex::new(Status::Starting));
        let (sink, _rx) = log::channel();
        let (callback, calls) = counting_callback();
        let watcher = ready_watcher(server, empty_slot(), status, sink, callback);

        watcher("vite v5 dev server running");
        watcher("ready - Local: http://localhost:5173");
        watcher("  Local: http://localhost:5173/");
        watcher("press h to show help");

        assert_eq!(*calls.lock().unwrap(), vec!["http://localhost:5173"]);
    }

    #[test]
    fn no_marker_means_no_callback() {
        let server = test_server("Local:", 0);
        let status = Arc::new(Mutex::new(Status::Starting));
        let (sink, _rx) = log::channel();
        let (callback, calls) = counting_callback();
        let watcher = ready_watcher(server, empty_slot(), status, sink, callback);

        for line in ["booting", "compiled successfully", "listening"] {
            watcher(line);
        }

        assert!(calls.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn marker_flips_status_to_running_while_the_child_is_owned() {
        let server = test_server("Local:", 0);
        let status = Arc::new(Mutex::new(Status::Starting));
        let child = crate::server::process::shell_command("true").spawn().unwrap();
        let slot = Arc::new(Mutex::new(Some(child)));
        let (sink, _rx) = log::channel();
        let (callback, _calls) = counting_callback();
        let watcher = ready_watcher(server, slot, Arc::clone(&status), sink, callback);

        watcher("  Local: http://localhost:5173/");
        assert_eq!(*status.lock().unwrap(), Status::Running);
    }

    #[test]
    fn readiness_racing_a_stop_leaves_status_stopped() {
        // The stop won: slot already emptied and status reset before the
        // reader thread got past the latch. The late marker must not bring
        // the status back to Running, which would block every later start.
        let server = test_server("Local:", 0);
        let status = Arc::new(Mutex::new(Status::Stopped));
        let (sink, _rx) = log::channel();
        let (callback, _calls) = counting_callback();
        let watcher = ready_watcher(server, empty_slot(), Arc::clone(&status), sink, callback);

        watcher("ready - Local: http://localhost:5173");
        assert_eq!(*status.lock().unwrap(), Status::Stopped);
    }

    #[cfg(unix)]
    fn skip_install_commands(serve: &str, dir: &tempfile::TempDir) -> Commands {
        // Marker pointing at the tempdir itself, so install never runs.
        Commands {
            install: "true".to_string(),
            serve: serve.to_string(),
            install_marker: dir.path().to_string_lossy().into_owned(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn at_most_one_owned_process_across_start_stop_sequences() {
        let dir = tempfile::tempdir().unwrap();
        let commands = skip_install_commands("sleep 30", &dir);
        let (sink, _rx) = log::channel();
        let (callback, _calls) = counting_callback();
        let supervisor = Supervisor::new(commands, test_server("Local:", 0), callback);

        assert_eq!(supervisor.start(&sink), StartOutcome::Started);
        assert!(wait_until(|| supervisor.is_running()));
        assert_eq!(supervisor.start(&sink), StartOutcome::AlreadyRunning);

        supervisor.stop(&sink);
        assert!(!supervisor.is_running());
        assert_eq!(supervisor.status(), Status::Stopped);

        // A fresh start is accepted after stop.
        assert_eq!(supervisor.start(&sink), StartOutcome::Started);
        assert!(wait_until(|| supervisor.is_running()));
        supervisor.stop(&sink);
    }

    #[cfg(unix)]
    #[test]
    fn stop_with_nothing_running_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let commands = skip_install_commands("sleep 30", &dir);
        let (sink, rx) = log::channel();
        let (callback, _calls) = counting_callback();
        let supervisor = Supervisor::new(commands, test_server("Local:", 0), callback);

        supervisor.stop(&sink);
        assert!(drain(&rx).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn failed_install_aborts_before_the_server_launches() {
        let dir = tempfile::tempdir().unwrap();
        let commands = Commands {
            install: "exit 1".to_string(),
            serve: "echo SERVED".to_string(),
            install_marker: dir.path().join("node_modules").to_string_lossy().into_owned(),
        };
        let (sink, rx) = log::channel();
        let (callback, _calls) = counting_callback();
        let supervisor = Supervisor::new(commands, test_server("Local:", 0), callback);

        assert_eq!(supervisor.start(&sink), StartOutcome::Started);
        assert!(wait_until(|| supervisor.status() == Status::Stopped));
        assert!(!supervisor.is_running());

        let lines = drain(&rx);
        assert!(!lines.iter().any(|l| l.contains("SERVED")));
        assert!(lines.iter().any(|l| l.starts_with("Startup failed:")));

        // Start is accepted again after the failure.
        assert_eq!(supervisor.start(&sink), StartOutcome::Started);
        assert!(wait_until(|| supervisor.status() == Status::Stopped));
    }

    #[cfg(unix)]
    #[test]
    fn readiness_end_to_end_then_stop() {
        let dir = tempfile::tempdir().unwrap();
        let serve = "printf 'booting\\nready - Local: http://localhost:5173\\n'; sleep 30";
        let commands = skip_install_commands(serve, &dir);
        let (sink, rx) = log::channel();
        let (callback, calls) = counting_callback();
        let supervisor = Supervisor::new(commands, test_server("Local:", 0), callback);

        assert_eq!(supervisor.start(&sink), StartOutcome::Started);
        assert!(wait_until(|| supervisor.status() == Status::Running));
        assert_eq!(*calls.lock().unwrap(), vec!["http://localhost:5173"]);

        supervisor.stop(&sink);
        assert!(!supervisor.is_running());
        let lines = drain(&rx);
        assert!(lines.iter().any(|l| l == "> booting"));
        assert!(lines.iter().any(|l| l == "Server stopped."));
    }
}
