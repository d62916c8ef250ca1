use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, KeyCode, KeyEventKind};

use crate::app::App;

/// One UI tick: drain the log queue, then wait up to `poll_timeout` for a
/// key. Returns false when the app should exit.
pub async fn handle_events(app: &mut App, poll_timeout: Duration) -> io::Result<bool> {
    app.drain_log_queue();

    let keys = Keys::from_app(app);

    if event::poll(poll_timeout)? {
        let event = event::read()?;
        if let event::Event::Key(key) = event
            && key.kind == KeyEventKind::Press
            && !handle_key(app, key.code, &keys)
        {
            return Ok(false);
        }
    }

    update_toast_timer(app);
    Ok(true)
}

struct Keys {
    quit: char,
    start: char,
    stop: char,
    open_site: char,
    scroll_down: char,
    scroll_up: char,
    toggle_auto_scroll: char,
}

impl Keys {
    fn from_app(app: &App) -> Self {
        Self {
            quit: app.keybinds.app.quit.chars().next().unwrap_or('q'),
            start: app.keybinds.server.start.chars().next().unwrap_or('s'),
            stop: app.keybinds.server.stop.chars().next().unwrap_or('x'),
            open_site: app.keybinds.app.open_site.chars().next().unwrap_or('o'),
            scroll_down: app.keybinds.logs.scroll_down.chars().next().unwrap_or('j'),
            scroll_up: app.keybinds.logs.scroll_up.chars().next().unwrap_or('k'),
            toggle_auto_scroll: app
                .keybinds
                .logs
                .toggle_auto_scroll
                .chars()
                .next()
                .unwrap_or('a'),
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, keys: &Keys) -> bool {
    if app.confirm_exit_mode {
        return handle_confirm_exit(app, code);
    }

    match code {
        KeyCode::Char(c) if c == keys.quit => {
            if app.request_exit() {
                return false;
            }
        }
        KeyCode::Char(c) if c == keys.start => app.start_server(),
        KeyCode::Char(c) if c == keys.stop => app.stop_server(),
        KeyCode::Char(c) if c == keys.open_site => app.open_website_only(),
        KeyCode::Char(c) if c == keys.scroll_down => app.scroll_down(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Char(c) if c == keys.scroll_up => app.scroll_up(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Char(c) if c == keys.toggle_auto_scroll => app.toggle_auto_scroll(),
        _ => {}
    }
    true
}

fn handle_confirm_exit(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Enter | KeyCode::Char('y') => {
            app.confirm_exit();
            false
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            app.confirm_exit_mode = false;
            true
        }
        _ => true,
    }
}

fn update_toast_timer(app: &mut App) {
    // The poll tick runs every 100 ms.
    const TOAST_TICKS_PER_SECOND: u8 = 10;

    if app.toast_timer > 0 {
        app.toast_tick_accumulator = app.toast_tick_accumulator.saturating_add(1);
        if app.toast_tick_accumulator >= TOAST_TICKS_PER_SECOND {
            app.toast_tick_accumulator = 0;
            app.toast_timer = app.toast_timer.saturating_sub(1);
            if app.toast_timer == 0 {
                app.toast = None;
            }
        }
    }
}
