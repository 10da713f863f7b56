use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Tab pane   "),
        Span::raw("↑/↓ select   "),
        Span::raw("Enter act   "),
        Span::raw("1-5 step   "),
        Span::raw("n note   "),
        Span::raw("x delete   "),
        Span::raw("r roadmap   "),
        Span::raw("o link   "),
        Span::raw("f focus   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
