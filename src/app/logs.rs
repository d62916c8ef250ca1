use crate::app::state::App;

/// Scrollback retained for display. Delivery order is untouched; only the
/// oldest lines fall off once a long session exceeds the cap.
const MAX_LOG_LINES: usize = 2000;

impl App {
    /// Drain the log queue on the poll tick. Producers enqueue from their
    /// own threads; appending happens only here, in enqueue order.
    pub fn drain_log_queue(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            self.log_lines.push_back(line);
        }
        while self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::config::Config;

    fn test_app() -> App {
        let config: Config = toml::from_str(include_str!("../../launcher.toml")).unwrap();
        App::new(config)
    }

    #[test]
    fn drain_appends_in_enqueue_order() {
        let mut app = test_app();
        app.drain_log_queue();
        let greeting_count = app.log_lines.len();

        app.sink.push("one");
        app.sink.push("two");
        app.sink.push("three");
        app.drain_log_queue();

        let tail: Vec<&str> = app
            .log_lines
            .iter()
            .skip(greeting_count)
            .map(|l| l.message.as_str())
            .collect();
        assert_eq!(tail, vec!["one", "two", "three"]);
    }

    #[test]
    fn scrollback_drops_oldest_lines_past_the_cap() {
        let mut app = test_app();
        app.drain_log_queue();

        for i in 0..super::MAX_LOG_LINES + 10 {
            app.sink.push(format!("line {i}"));
        }
        app.drain_log_queue();

        assert_eq!(app.log_lines.len(), super::MAX_LOG_LINES);
        // Newest line survives; the overflow came off the front.
        assert_eq!(
            app.log_lines.back().unwrap().message,
            format!("line {}", super::MAX_LOG_LINES + 9)
        );
        assert!(!app.log_lines.iter().any(|l| l.message == "line 0"));
    }

    #[test]
    fn greeting_lines_are_queued_at_startup() {
        let mut app = test_app();
        app.drain_log_queue();
        assert!(
            app.log_lines
                .iter()
                .any(|l| l.message.contains("Waiting for commands"))
        );
    }
}
