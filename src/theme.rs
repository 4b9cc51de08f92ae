use ratatui::style::{Color, Modifier, Style};

/// Styling for the catalog browser widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub product_title: Style,
    pub product_handle: Style,
    pub selection: Style,
    pub loading: Style,
    pub exhausted: Style,
    pub status_bar: Style,
    pub status_hint: Style,
}

impl Theme {
    /// Clean dark theme, the default.
    pub fn professional_dark() -> Self {
        Self {
            name: "Professional Dark".to_string(),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            product_title: Style::default().fg(Color::White),
            product_handle: Style::default().fg(Color::DarkGray),
            selection: Style::default()
                .bg(Color::Rgb(40, 44, 52))
                .add_modifier(Modifier::BOLD),
            loading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
            exhausted: Style::default().fg(Color::DarkGray),
            status_bar: Style::default().fg(Color::Gray).bg(Color::Rgb(24, 26, 31)),
            status_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// High contrast variant for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            name: "High Contrast".to_string(),
            border: Style::default().fg(Color::White),
            border_focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            product_title: Style::default().fg(Color::White),
            product_handle: Style::default().fg(Color::Gray),
            selection: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            loading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            exhausted: Style::default().fg(Color::White),
            status_bar: Style::default().fg(Color::White).bg(Color::Black),
            status_hint: Style::default().fg(Color::Gray),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::professional_dark()
    }
}
