use crate::app::AppState;
use crate::domain::{Pane, TimerPhase, FOCUS_PRESETS_MIN};
use crate::ui::styles::{
    border_style, default_style, expired_style, focused_border_style, hint_style, running_style,
    selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.pane == Pane::Timer;

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    // Preset row
    let mut preset_spans = vec![Span::raw("  ")];
    for (idx, minutes) in FOCUS_PRESETS_MIN.iter().enumerate() {
        let label = format!(" {} min ", minutes);
        let style = if focused && idx == app.preset_cursor {
            selected_style()
        } else {
            default_style()
        };
        preset_spans.push(Span::styled(label, style));
        preset_spans.push(Span::raw("  "));
    }
    lines.push(Line::from(preset_spans));
    lines.push(Line::raw(""));

    // Countdown display
    match app.timer.phase() {
        TimerPhase::Idle => {
            lines.push(Line::from(Span::styled(
                "  Pick a preset and press Enter",
                hint_style(),
            )));
        }
        TimerPhase::Running => {
            if let Some(display) = app.timer.display() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", display),
                    running_style(),
                )));
            }
        }
        TimerPhase::Expired => {
            lines.push(Line::from(Span::styled(
                "  0:00 - session over",
                expired_style(),
            )));
        }
    }

    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(" Focus Timer ", title_style()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
