/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    ComposingNote,
    EditingRoadmap,
    /// Full-screen distraction blocker; everything else keeps existing underneath
    FocusOverlay,
}

/// Pane that currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Checklist,
    Timer,
    SelfCheck,
    Roadmap,
    Journal,
}

impl Pane {
    /// Get all panes in tab order
    pub fn all() -> &'static [Pane] {
        &[
            Pane::Checklist,
            Pane::Timer,
            Pane::SelfCheck,
            Pane::Roadmap,
            Pane::Journal,
        ]
    }

    /// Next pane in tab order (wraps around)
    pub fn next(&self) -> Pane {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous pane in tab order (wraps around)
    pub fn prev(&self) -> Pane {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}
