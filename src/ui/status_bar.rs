use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::status::Status;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let now = Local::now();

    let status = app.supervisor.status();
    let (server_dot, server_color) = match status {
        Status::Running => ("●", theme.success),
        Status::Installing | Status::Starting => ("●", theme.warning),
        Status::Stopped => ("○", theme.dim),
    };

    let npm_text = if app.npm_available {
        "npm: ok"
    } else {
        "npm: n/a"
    };
    let npm_color = if app.npm_available {
        theme.success
    } else {
        theme.error
    };

    let status_line = Line::from(vec![
        Span::styled(
            "dev-launcher",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", Style::default().fg(theme.dim)),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme.text),
        ),
        Span::styled("  |  ", Style::default().fg(theme.dim)),
        Span::styled(
            format!("{}", now.format("%H:%M:%S")),
            Style::default().fg(theme.text),
        ),
        Span::styled("  |  ", Style::default().fg(theme.dim)),
        Span::styled(
            format!("{server_dot} Server: {status}"),
            Style::default().fg(server_color),
        ),
        Span::styled("  |  ", Style::default().fg(theme.dim)),
        Span::styled(npm_text, Style::default().fg(npm_color)),
        Span::styled("  |  ", Style::default().fg(theme.dim)),
        Span::styled(app.site_url.as_str(), Style::default().fg(theme.text)),
    ]);

    let status_bar = Paragraph::new(status_line).block(
        Block::default()
            .title(" Overview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    frame.render_widget(status_bar, area);
}
