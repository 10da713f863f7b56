use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub checklist_area: Rect,
    pub timer_area: Rect,
    pub self_check_area: Rect,
    pub roadmap_area: Rect,
    pub journal_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Checklist across the full width
/// - Middle row: Timer (50%) | Self-check (50%)
/// - Bottom row: Roadmap (50%) | Journal (50%)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let keybindings_area = main_chunks[0];
    let content_area = main_chunks[1];

    let vertical_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(46), // Checklist
            Constraint::Percentage(26), // Timer + self-check
            Constraint::Percentage(28), // Roadmap + journal
        ])
        .split(content_area);

    let middle_horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical_split[1]);

    let bottom_horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical_split[2]);

    MainLayout {
        keybindings_area,
        checklist_area: vertical_split[0],
        timer_area: middle_horizontal[0],
        self_check_area: middle_horizontal[1],
        roadmap_area: bottom_horizontal[0],
        journal_area: bottom_horizontal[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.checklist_area.height > 0);
        assert!(layout.timer_area.height > 0);
        assert!(layout.self_check_area.height > 0);
        assert!(layout.roadmap_area.height > 0);
        assert!(layout.journal_area.height > 0);

        // Checklist spans the full width; the rows below split it
        assert_eq!(layout.checklist_area.width, area.width);
        assert_eq!(
            layout.timer_area.width + layout.self_check_area.width,
            area.width
        );
    }
}
