use crate::app::AppState;
use crate::domain::{Pane, SELF_CHECK_ITEMS};
use crate::ui::styles::{
    border_style, default_style, done_badge_style, focused_border_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the daily self-check pane. State is session-only on purpose.
pub fn render_selfcheck_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == Pane::SelfCheck;

    let items: Vec<ListItem> = SELF_CHECK_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let checked = app.self_checks[idx];
            let badge = if checked {
                Span::styled("[x]", done_badge_style())
            } else {
                Span::styled("[ ]", default_style())
            };

            let style = if focused && idx == app.self_check_cursor {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(Line::from(vec![
                Span::raw(" "),
                badge,
                Span::styled(format!(" {}", label), style),
            ]))
        })
        .collect();

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(" Today, For Yourself ", title_style()));

    f.render_widget(List::new(items).block(block), area);
}
