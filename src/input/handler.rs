use crate::app::AppState;
use crate::domain::{Pane, UiMode, PUBLISH_STEPS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ComposingNote => handle_compose_mode(app, key),
        UiMode::EditingRoadmap => handle_roadmap_mode(app, key),
        UiMode::FocusOverlay => handle_overlay_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Tab => {
            app.next_pane();
            Ok(false)
        }
        KeyCode::BackTab => {
            app.prev_pane();
            Ok(false)
        }

        // Primary action for the focused pane
        KeyCode::Enter | KeyCode::Char(' ') => {
            match app.pane {
                Pane::Checklist => app.toggle_selected_step(),
                Pane::Timer => app.start_selected_preset(),
                Pane::SelfCheck => app.toggle_selected_self_check(),
                Pane::Roadmap => app.start_roadmap_edit(),
                Pane::Journal => app.start_composing(),
            }
            Ok(false)
        }

        // Toggle a publish step directly by number
        KeyCode::Char(c @ '1'..='5') => {
            let id = c.to_digit(10).unwrap_or(0) as u8;
            if PUBLISH_STEPS.iter().any(|s| s.id == id) {
                app.toggle_step(id);
            }
            Ok(false)
        }

        // Compose a note
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.start_composing();
            Ok(false)
        }

        // Delete the selected note
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.pane == Pane::Journal {
                app.delete_selected_note();
            }
            Ok(false)
        }

        // Edit the roadmap
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.start_roadmap_edit();
            Ok(false)
        }

        // Open the selected step's action link
        KeyCode::Char('o') | KeyCode::Char('O') => {
            if app.pane == Pane::Checklist {
                app.open_selected_link();
            }
            Ok(false)
        }

        // Focus mode
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.enter_focus_mode();
            Ok(false)
        }

        // Quit (hand control back to the shell)
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while composing a journal note
fn handle_compose_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_note();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_composing();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.note_draft.pop();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.note_draft.push(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while editing a roadmap field
fn handle_roadmap_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.finish_roadmap_edit();
            Ok(false)
        }
        KeyCode::Tab => {
            app.roadmap_next_field();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.roadmap_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.roadmap_push_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the focus overlay is up. Everything except the exit
/// affordance is swallowed -- the panel underneath is not interactive.
fn handle_overlay_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('F') => {
            app.leave_focus_mode();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerPhase;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        AppState::new(Box::new(MemoryStore::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, key(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('z'))).unwrap());
    }

    #[test]
    fn test_tab_cycles_panes() {
        let mut app = create_test_app();
        assert_eq!(app.pane, Pane::Checklist);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.pane, Pane::Timer);

        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.pane, Pane::Checklist);
    }

    #[test]
    fn test_enter_toggles_checklist_step() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.checklist.is_done(2));

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.checklist.is_done(2));
    }

    #[test]
    fn test_digit_toggles_step_directly() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('4'))).unwrap();
        assert!(app.checklist.is_done(4));
        assert_eq!(app.completion_percent(), 20);
    }

    #[test]
    fn test_enter_starts_timer_preset() {
        let mut app = create_test_app();
        app.pane = Pane::Timer;
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.timer.phase(), TimerPhase::Running);
        assert_eq!(app.timer.remaining_secs(), Some(10 * 60));
    }

    #[test]
    fn test_compose_note_flow() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ComposingNote);

        for c in "hi".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.notes.len(), 1);
        assert_eq!(app.notes[0].text, "hi");
    }

    #[test]
    fn test_compose_esc_discards_draft() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.notes.is_empty());
        assert!(app.note_draft.is_empty());
    }

    #[test]
    fn test_delete_note_from_journal_pane() {
        let mut app = create_test_app();
        app.add_note("bye".to_string());
        app.pane = Pane::Journal;

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.notes.is_empty());
    }

    #[test]
    fn test_delete_key_ignored_outside_journal() {
        let mut app = create_test_app();
        app.add_note("stays".to_string());
        app.pane = Pane::Checklist;

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.notes.len(), 1);
    }

    #[test]
    fn test_roadmap_edit_flow() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingRoadmap);

        for c in "css".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        for c in "grid".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.roadmap.learn, "css");
        assert_eq!(app.roadmap.struggle, "gri");
    }

    #[test]
    fn test_focus_overlay_swallows_keys() {
        let mut app = create_test_app();
        app.toggle_step(2);
        handle_key(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert!(app.focus_mode);

        // Blocked: no toggling, no composing, no quitting underneath
        assert!(!handle_key(&mut app, key(KeyCode::Char('1'))).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('n'))).unwrap());
        assert!(!handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(app.checklist.is_done(2));
        assert_eq!(app.completion_percent(), 20);
        assert_eq!(app.ui_mode, UiMode::FocusOverlay);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(!app.focus_mode);
        assert_eq!(app.ui_mode, UiMode::Normal);
        // Nothing was reset by entering/leaving the overlay
        assert!(app.checklist.is_done(2));
    }
}
