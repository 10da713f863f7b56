pub mod checklist_pane;
pub mod journal_pane;
pub mod keybindings;
pub mod layout;
pub mod overlay;
pub mod roadmap_pane;
pub mod selfcheck_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use checklist_pane::render_checklist_pane;
use journal_pane::render_journal_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use overlay::render_focus_overlay;
use ratatui::Frame;
use roadmap_pane::render_roadmap_pane;
use selfcheck_pane::render_selfcheck_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Focus mode blocks the whole panel; render nothing else
    if app.focus_mode {
        render_focus_overlay(f, size);
        return;
    }

    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_checklist_pane(f, app, layout.checklist_area);
    render_timer_pane(f, app, layout.timer_area);
    render_selfcheck_pane(f, app, layout.self_check_area);
    render_roadmap_pane(f, app, layout.roadmap_area);
    render_journal_pane(f, app, layout.journal_area);
}
