use ratatui::Frame;

use crate::app::App;

mod controls;
mod layout;
mod logs;
mod overlays;
mod status_bar;

pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let sections = layout::build(frame.area());

    status_bar::render(frame, app, sections.status_bar);
    logs::render(frame, app, sections.logs);
    controls::render(frame, app, sections.help);
    overlays::render(frame, app);
}
