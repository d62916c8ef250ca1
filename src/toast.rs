use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::status::ToastState;
use crate::theme::Theme;

#[derive(Clone)]
pub struct Toast {
    pub state: ToastState,
    pub message: String,
}

pub fn create_toast_widget<'a>(toast: &'a Toast, theme: &Theme) -> Paragraph<'a> {
    let color = match toast.state {
        ToastState::Success => theme.success,
        ToastState::Warning => theme.warning,
        ToastState::Error => theme.error,
        ToastState::Info => theme.accent,
    };
    Paragraph::new(toast.message.as_str())
        .block(
            Block::default()
                .title("Notification")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black).fg(color)),
        )
        .wrap(ratatui::widgets::Wrap { trim: true })
}
