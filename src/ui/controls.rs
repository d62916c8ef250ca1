use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, help_area: Rect) {
    let controls = controls_line(app);

    let controls_widget = Paragraph::new(controls)
        .block(
            Block::default()
                .title(" Controls ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.dim)),
        )
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(controls_widget, help_area);
}

fn controls_line(app: &App) -> Line<'static> {
    let app_keys = &app.keybinds.app;
    let server_keys = &app.keybinds.server;
    let log_keys = &app.keybinds.logs;

    let mut spans = Vec::new();
    push_key(&mut spans, "Quit", app_keys.quit.clone(), Color::Red);
    spans.push(sep());
    push_key(
        &mut spans,
        "Start",
        server_keys.start.clone(),
        Color::LightGreen,
    );
    spans.push(sep());
    push_key(&mut spans, "Stop", server_keys.stop.clone(), Color::LightRed);
    spans.push(sep());
    push_key(
        &mut spans,
        "Open site",
        app_keys.open_site.clone(),
        Color::Cyan,
    );
    spans.push(sep());
    push_key(
        &mut spans,
        "Down",
        log_keys.scroll_down.clone(),
        Color::LightBlue,
    );
    spans.push(sep());
    push_key(
        &mut spans,
        "Up",
        log_keys.scroll_up.clone(),
        Color::LightBlue,
    );
    spans.push(sep());
    push_key(
        &mut spans,
        "Auto",
        log_keys.toggle_auto_scroll.clone(),
        Color::Green,
    );

    if app.confirm_exit_mode {
        spans.push(sep());
        spans.push(Span::styled(
            "Quit: Enter/y=stop and quit Esc=cancel",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

fn push_key(spans: &mut Vec<Span<'static>>, label: &str, value: String, color: Color) {
    spans.push(Span::styled(
        format!("{} ", label),
        Style::default().fg(color),
    ));
    spans.push(Span::styled("[", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        value,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled("]", Style::default().fg(Color::DarkGray)));
}

fn sep() -> Span<'static> {
    Span::styled(" · ", Style::default().fg(Color::DarkGray))
}
