use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, Local};

/// One immutable record in the launcher log. Produced either by the
/// supervisor itself (lifecycle messages) or from the server's output stream.
#[derive(Clone)]
pub struct LogLine {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogLine {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            message: message.into(),
        }
    }
}

/// Cloneable producer handle. Background threads enqueue; the UI drains the
/// receiver on its poll tick and appends in enqueue order, so producers never
/// touch UI state directly.
#[derive(Clone)]
pub struct LogSink {
    tx: Sender<LogLine>,
}

impl LogSink {
    pub fn push(&self, message: impl Into<String>) {
        // Receiver gone means the UI is shutting down; nothing to report to.
        let _ = self.tx.send(LogLine::new(message));
    }
}

pub fn channel() -> (LogSink, Receiver<LogLine>) {
    let (tx, rx) = mpsc::channel();
    (LogSink { tx }, rx)
}
