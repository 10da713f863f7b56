use crate::app::AppState;
use crate::domain::{Pane, PUBLISH_STEPS};
use crate::ui::styles::{
    border_style, default_style, done_badge_style, done_style, focused_border_style, hint_style,
    link_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the publish checklist pane
pub fn render_checklist_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == Pane::Checklist;

    let mut items: Vec<ListItem> = Vec::new();
    for (idx, step) in PUBLISH_STEPS.iter().enumerate() {
        let done = app.checklist.is_done(step.id);
        let selected = focused && idx == app.checklist_cursor;

        let badge = if done {
            Span::styled("[x]", done_badge_style())
        } else {
            Span::styled("[ ]", default_style())
        };

        let title_text = format!(" {}. {}", step.id, step.title);
        let title_span = if selected {
            Span::styled(title_text, selected_style())
        } else if done {
            Span::styled(title_text, done_style())
        } else {
            Span::styled(title_text, default_style())
        };

        let mut title_line = vec![Span::raw(" "), badge, title_span];
        if step.link.is_some() {
            title_line.push(Span::styled(" ↗", link_style()));
        }

        items.push(ListItem::new(vec![
            Line::from(title_line),
            Line::from(Span::styled(format!("      {}", step.desc), hint_style())),
        ]));
    }

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let title = format!(" Publish Checklist - {}% done ", app.completion_percent());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, title_style()));

    f.render_widget(List::new(items).block(block), area);
}
