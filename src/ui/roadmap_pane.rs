use crate::app::AppState;
use crate::domain::{Pane, UiMode, ROADMAP_FIELDS};
use crate::ui::styles::{
    border_style, default_style, focused_border_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the roadmap pane: three free-text fields edited inline
pub fn render_roadmap_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == Pane::Roadmap;
    let editing = app.ui_mode == UiMode::EditingRoadmap;

    let mut lines = Vec::new();
    for (idx, label) in ROADMAP_FIELDS.iter().enumerate() {
        let selected = focused && idx == app.roadmap_field;
        let label_style = if selected {
            selected_style()
        } else {
            title_style()
        };

        lines.push(Line::from(Span::styled(format!(" {}:", label), label_style)));

        let value = app.roadmap.field(idx);
        let mut value_spans = vec![Span::raw(" > "), Span::styled(value.to_string(), default_style())];
        if editing && idx == app.roadmap_field {
            value_spans.push(Span::styled("█", selected_style())); // Cursor
        }
        lines.push(Line::from(value_spans));
        lines.push(Line::raw(""));
    }

    let title = if editing {
        " Roadmap - [Editing] "
    } else {
        " Roadmap "
    };

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, title_style()));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
