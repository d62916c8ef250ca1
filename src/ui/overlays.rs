use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    if app.confirm_exit_mode {
        render_confirm_exit(frame, app);
    }

    if let Some(toast) = &app.toast {
        let area = Rect {
            x: frame.area().width.saturating_sub(51),
            y: 1,
            width: 50,
            height: 3,
        };
        frame.render_widget(crate::toast::create_toast_widget(toast, &app.theme), area);
    }
}

fn render_confirm_exit(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(60, 8, frame.area());
    frame.render_widget(Clear, area);

    let popup = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        );
    let inner = popup.inner(area);
    frame.render_widget(popup, area);

    let [message_area, hints_area] =
        Layout::vertical([Constraint::Min(2), Constraint::Length(2)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            "The dev server is still running. Stop it and quit?",
            Style::default().fg(theme.text),
        )]))
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true }),
        message_area,
    );

    frame.render_widget(
        Paragraph::new("Enter/y: stop and quit   Esc/n: keep running")
            .alignment(Alignment::Left)
            .style(Style::default().fg(theme.dim)),
        hints_area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, centered, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vertical);

    centered
}
