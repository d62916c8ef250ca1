use ratatui::style::Color;

/// Immutable color palette handed to the App at construction. UI modules
/// read it instead of hardcoding colors at every call site.
#[derive(Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            dim: Color::DarkGray,
        }
    }
}
