use std::collections::VecDeque;
use std::sync::Arc;

use crate::app::state::App;
use crate::config::Config;
use crate::log;
use crate::server::{Supervisor, browser, supervisor::ReadyCallback, toolchain};
use crate::status::ToastState;
use crate::theme::Theme;
use crate::toast::Toast;

impl App {
    pub fn new(config: Config) -> Self {
        let (sink, log_rx) = log::channel();
        let npm_available = toolchain::npm_ok();
        let site_url = config.server.url.clone();

        let browser_sink = sink.clone();
        let on_ready: ReadyCallback = Arc::new(move |url: &str| {
            if let Err(err) = browser::open_url(url) {
                browser_sink.push(format!("Could not open the browser: {err}"));
            }
        });
        let supervisor = Supervisor::new(config.commands, config.server, on_ready);

        let (toast, toast_timer) = startup_toast(npm_available);

        sink.push("Welcome to the dev-server launcher.");
        sink.push("Waiting for commands...");

        Self {
            supervisor,
            sink,
            log_rx,
            log_lines: VecDeque::new(),
            log_scroll: 0,
            log_auto_scroll: true,
            toast,
            toast_timer,
            toast_tick_accumulator: 0,
            confirm_exit_mode: false,
            npm_available,
            site_url,
            keybinds: config.keybinds,
            theme: Theme::default(),
        }
    }
}

fn startup_toast(npm_available: bool) -> (Option<Toast>, u32) {
    if npm_available {
        (
            Some(Toast {
                state: ToastState::Info,
                message: "Welcome to the dev-server launcher".to_string(),
            }),
            3,
        )
    } else {
        (
            Some(Toast {
                state: ToastState::Warning,
                message: "npm not found. Install Node.js before starting the server.".to_string(),
            }),
            5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_npm_greets_with_a_warning() {
        let (toast, timer) = startup_toast(false);
        assert!(matches!(toast.unwrap().state, ToastState::Warning));
        assert_eq!(timer, 5);
    }

    #[test]
    fn available_npm_greets_with_info() {
        let (toast, timer) = startup_toast(true);
        assert!(matches!(toast.unwrap().state, ToastState::Info));
        assert_eq!(timer, 3);
    }
}

