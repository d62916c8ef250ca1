use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::log::LogLine;
use crate::theme::Theme;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme;
    let text = colorize_lines(&app.log_lines, &theme);
    let total_lines = text.lines.len() as u16;
    let inner_height = area.height.saturating_sub(2);

    let scroll = if app.log_auto_scroll {
        let bottom = total_lines.saturating_sub(inner_height);
        app.log_scroll = bottom;
        bottom
    } else {
        app.log_scroll.min(total_lines.saturating_sub(1))
    };

    let title = if app.log_auto_scroll {
        " Log [auto] "
    } else {
        " Log "
    };

    let log_view = Paragraph::new(text)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .scroll((scroll, 0));

    frame.render_widget(log_view, area);
}

fn colorize_lines<'a>(
    lines: impl IntoIterator<Item = &'a LogLine>,
    theme: &Theme,
) -> Text<'a> {
    let mut out = Vec::new();
    for line in lines {
        let stamp = Span::styled(
            format!("[{}] ", line.timestamp.format("%H:%M:%S")),
            Style::default().fg(theme.dim),
        );
        let body = Span::styled(line.message.as_str(), message_style(&line.message, theme));
        out.push(Line::from(vec![stamp, body]));
    }
    Text::from(out)
}

fn message_style(message: &str, theme: &Theme) -> Style {
    let lower = message.to_lowercase();
    if lower.contains("failed") || lower.contains("error") || lower.contains("could not") {
        Style::default().fg(theme.error)
    } else if lower.contains("ready") || lower.contains("stopped") || lower.contains("installed") {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else if message.starts_with("> ") {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.accent)
    }
}
