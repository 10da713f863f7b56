use crate::ui::styles::{hint_style, overlay_bg_style, overlay_motto_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Clear, Paragraph},
    Frame,
};

/// Render the full-screen focus overlay. Everything else stays alive
/// underneath but is neither visible nor interactive.
pub fn render_focus_overlay(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(overlay_bg_style()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Length(1), // Motto
            Constraint::Length(2),
            Constraint::Length(1), // Exit hint
            Constraint::Min(0),
        ])
        .split(area);

    let motto = Paragraph::new(Span::styled("S T I L L   H E R E", overlay_motto_style()))
        .alignment(Alignment::Center);
    f.render_widget(motto, chunks[1]);

    let hint = Paragraph::new(Span::styled("[Esc] Leave focus mode", hint_style()))
        .alignment(Alignment::Center);
    f.render_widget(hint, chunks[3]);
}
