mod app;
mod config;
mod event_handler;
mod log;
mod server;
mod status;
mod theme;
mod toast;
mod ui;

use std::time::Duration;

use anyhow::Context;
use ratatui::{DefaultTerminal, crossterm::terminal};

use app::App;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (width, height) = terminal::size()?;
    if width < 50 || height < 10 {
        eprintln!(
            "Terminal too small. Minimum size: 50x10. Current: {}x{}",
            width, height
        );
        std::process::exit(1);
    }

    let config = Config::load().context("failed to parse launcher.toml")?;

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let app_result = run(terminal, config).await;
    ratatui::restore();
    app_result
}

async fn run(mut terminal: DefaultTerminal, config: Config) -> anyhow::Result<()> {
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| ui::render_ui(frame, &mut app))?;

        if !event_handler::handle_events(&mut app, Duration::from_millis(100)).await? {
            return Ok(());
        }
    }
}
