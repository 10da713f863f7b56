use crate::app::AppState;
use crate::domain::{Pane, UiMode};
use crate::ui::styles::{
    border_style, default_style, focused_border_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the journal pane: newest note first, compose prompt on top
pub fn render_journal_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == Pane::Journal;
    let composing = app.ui_mode == UiMode::ComposingNote;

    let mut lines = Vec::new();

    if composing {
        lines.push(Line::from(vec![
            Span::raw(" > "),
            Span::styled(app.note_draft.clone(), default_style()),
            Span::styled("█", selected_style()), // Cursor
        ]));
        lines.push(Line::raw(""));
    }

    if app.notes.is_empty() && !composing {
        lines.push(Line::from(Span::styled(
            " No notes yet. Press n to write one.",
            hint_style(),
        )));
    }

    for (idx, note) in app.notes.iter().enumerate() {
        let selected = focused && !composing && idx == app.journal_cursor;

        lines.push(Line::from(Span::styled(
            format!(" {}", note.date),
            hint_style(),
        )));
        let text_style = if selected {
            selected_style()
        } else {
            default_style()
        };
        lines.push(Line::from(Span::styled(format!(" {}", note.text), text_style)));
        lines.push(Line::raw(""));
    }

    let title = if composing {
        format!(" Journal ({}) - [Composing] ", app.notes.len())
    } else {
        format!(" Journal ({}) ", app.notes.len())
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
