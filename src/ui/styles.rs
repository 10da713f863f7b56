use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Completed step style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Completed step badge style
pub fn done_badge_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Running countdown style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Expired countdown style
pub fn expired_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border style for the focused pane
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Step action link style
pub fn link_style() -> Style {
    Style::default().fg(Color::Blue)
}

/// Full-screen focus overlay background
pub fn overlay_bg_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

/// Focus overlay motto style
pub fn overlay_motto_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::DIM)
}
