use ratatui::layout::{Constraint, Layout, Rect};

pub struct Sections {
    pub status_bar: Rect,
    pub logs: Rect,
    pub help: Rect,
}

pub fn build(area: Rect) -> Sections {
    let outer = if area.width > 80 && area.height > 20 {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        }
    } else {
        area
    };

    let [status_bar, logs, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(controls_height(area.height)),
    ])
    .areas(outer);

    Sections {
        status_bar,
        logs,
        help,
    }
}

fn controls_height(frame_height: u16) -> u16 {
    if frame_height < 20 { 2 } else { 3 }
}
