use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::thread;

use crate::log::LogSink;

pub type LineCallback = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// Build a command that runs `line` through the platform shell. npm scripts
/// expect shell resolution, and on Windows npm itself is a batch file.
pub fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(line);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }
}

/// Run a command to completion, streaming its output into the sink.
/// Returns whether it exited zero.
pub fn run_to_completion(mut cmd: Command, sink: LogSink) -> std::io::Result<bool> {
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    let mut child = cmd.spawn()?;
    let readers = spawn_line_readers(&mut child, sink, None);
    let status = child.wait()?;
    for reader in readers {
        let _ = reader.join();
    }
    Ok(status.success())
}

/// Spawn one reader thread per captured stream, taking the streams off the
/// child. Each pumps until end-of-stream and then simply ends; nobody waits
/// on the child here.
pub fn spawn_line_readers(
    child: &mut Child,
    sink: LogSink,
    on_line: Option<LineCallback>,
) -> Vec<thread::JoinHandle<()>> {
    spawn_stream_pumps(child.stdout.take(), child.stderr.take(), sink, on_line)
}

/// Like `spawn_line_readers`, for streams already detached from the child —
/// used when the child handle must be parked elsewhere before reading starts.
pub fn spawn_stream_pumps(
    stdout: Option<std::process::ChildStdout>,
    stderr: Option<std::process::ChildStderr>,
    sink: LogSink,
    on_line: Option<LineCallback>,
) -> Vec<thread::JoinHandle<()>> {
    let mut handles = Vec::new();
    if let Some(stdout) = stdout {
        handles.push(spawn_pump(stdout, sink.clone(), on_line.clone()));
    }
    if let Some(stderr) = stderr {
        handles.push(spawn_pump(stderr, sink, on_line));
    }
    handles
}

fn spawn_pump<R: Read + Send + 'static>(
    stream: R,
    sink: LogSink,
    on_line: Option<LineCallback>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || pump_lines(BufReader::new(stream), &sink, on_line))
}

/// Pump a line-buffered stream until end-of-stream. Every raw line reaches
/// the callback; only trimmed non-empty lines reach the sink, prefixed as
/// server output.
pub fn pump_lines<R: BufRead>(reader: R, sink: &LogSink, on_line: Option<LineCallback>) {
    for line in reader.lines().map_while(Result::ok) {
        let clean = line.trim();
        if !clean.is_empty() {
            sink.push(format!("> {clean}"));
        }
        if let Some(callback) = &on_line {
            callback(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log;
    use std::io::Cursor;
    use std::sync::Mutex;

    #[test]
    fn pump_forwards_trimmed_lines_in_order() {
        let (sink, rx) = log::channel();
        let input = Cursor::new("first\n   \n  second  \n\nthird\n");
        pump_lines(input, &sink, None);
        drop(sink);

        let got: Vec<String> = rx.iter().map(|l| l.message).collect();
        assert_eq!(got, vec!["> first", "> second", "> third"]);
    }

    #[test]
    fn callback_sees_every_raw_line_including_blank_ones() {
        let (sink, _rx) = log::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = Arc::clone(&seen);
        let callback: LineCallback = Arc::new(move |line: &str| {
            seen_cb.lock().unwrap().push(line.to_string());
        });

        let input = Cursor::new("a\n\nb\n");
        pump_lines(input, &sink, Some(callback));

        assert_eq!(*seen.lock().unwrap(), vec!["a", "", "b"]);
    }

    #[cfg(unix)]
    #[test]
    fn run_to_completion_reports_exit_status() {
        let (sink, rx) = log::channel();
        assert!(run_to_completion(shell_command("echo done"), sink.clone()).unwrap());
        assert!(!run_to_completion(shell_command("exit 3"), sink).unwrap());

        let got: Vec<String> = rx.iter().map(|l| l.message).collect();
        assert_eq!(got, vec!["> done"]);
    }
}
