use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

use crate::config::Keybinds;
use crate::log::{LogLine, LogSink};
use crate::server::Supervisor;
use crate::status::ToastState;
use crate::theme::Theme;
use crate::toast::Toast;

pub struct App {
    pub supervisor: Supervisor,
    pub sink: LogSink,
    pub log_rx: Receiver<LogLine>,
    pub log_lines: VecDeque<LogLine>,

    pub log_scroll: u16,
    pub log_auto_scroll: bool,

    pub toast: Option<Toast>,
    pub toast_timer: u32,
    pub toast_tick_accumulator: u8,

    pub confirm_exit_mode: bool,
    pub npm_available: bool,
    pub site_url: String,
    pub keybinds: Keybinds,
    pub theme: Theme,
}

impl App {
    pub fn set_toast(&mut self, state: ToastState, message: impl Into<String>, timer: u32) {
        self.toast = Some(Toast {
            state,
            message: message.into(),
        });
        self.toast_timer = timer;
    }

    pub fn scroll_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_add(1);
        self.log_auto_scroll = false;
    }

    pub fn scroll_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
        self.log_auto_scroll = false;
    }

    pub fn toggle_auto_scroll(&mut self) {
        self.log_auto_scroll = !self.log_auto_scroll;
    }
}
