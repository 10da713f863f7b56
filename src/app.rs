use crate::domain::{
    Checklist, FocusTimer, NoteEntry, Pane, Roadmap, UiMode, FOCUS_PRESETS_MIN, PUBLISH_STEPS,
    ROADMAP_FIELDS, SELF_CHECK_ITEMS,
};
use crate::notifications;
use crate::persistence::{
    load_record_or_default, save_record, Store, CHECKLIST_KEY, NOTES_KEY, ROADMAP_KEY,
};
use uuid::Uuid;

/// Main application state.
///
/// The three persisted records (checklist, roadmap, notes) are cached here
/// and written back through the injected store on every mutation. Storage
/// is authoritative at load time; everything else is session-only.
pub struct AppState {
    store: Box<dyn Store>,

    // Persisted records
    pub checklist: Checklist,
    pub roadmap: Roadmap,
    pub notes: Vec<NoteEntry>,

    // Session-only state
    pub timer: FocusTimer,
    pub self_checks: [bool; SELF_CHECK_ITEMS.len()],
    pub focus_mode: bool,

    // UI state
    pub ui_mode: UiMode,
    pub pane: Pane,
    pub checklist_cursor: usize,
    pub preset_cursor: usize,
    pub self_check_cursor: usize,
    pub journal_cursor: usize,
    pub roadmap_field: usize,
    pub note_draft: String,
}

impl AppState {
    /// Load all records from the store and build the initial state
    pub fn new(store: Box<dyn Store>) -> Self {
        let checklist = load_record_or_default(store.as_ref(), CHECKLIST_KEY);
        let roadmap = load_record_or_default(store.as_ref(), ROADMAP_KEY);
        let notes = load_record_or_default(store.as_ref(), NOTES_KEY);

        Self {
            store,
            checklist,
            roadmap,
            notes,
            timer: FocusTimer::new(),
            self_checks: [false; SELF_CHECK_ITEMS.len()],
            focus_mode: false,
            ui_mode: UiMode::Normal,
            pane: Pane::Checklist,
            checklist_cursor: 0,
            preset_cursor: 0,
            self_check_cursor: 0,
            journal_cursor: 0,
            roadmap_field: 0,
            note_draft: String::new(),
        }
    }

    /// Stop the countdown and flush every record. Called once on exit.
    pub fn dispose(&mut self) {
        self.timer.stop();
        self.persist_checklist();
        self.persist_roadmap();
        self.persist_notes();
    }

    // ── Persistence write-back ───────────────────────────────────────
    // Write failures degrade persistence but never the UI: log and move on.

    fn persist_checklist(&self) {
        if let Err(e) = save_record(self.store.as_ref(), CHECKLIST_KEY, &self.checklist) {
            eprintln!("Warning: could not save checklist: {:#}", e);
        }
    }

    fn persist_roadmap(&self) {
        if let Err(e) = save_record(self.store.as_ref(), ROADMAP_KEY, &self.roadmap) {
            eprintln!("Warning: could not save roadmap: {:#}", e);
        }
    }

    fn persist_notes(&self) {
        if let Err(e) = save_record(self.store.as_ref(), NOTES_KEY, &self.notes) {
            eprintln!("Warning: could not save notes: {:#}", e);
        }
    }

    // ── Checklist ────────────────────────────────────────────────────

    /// Toggle a publish step and persist the resulting set
    pub fn toggle_step(&mut self, id: u8) {
        self.checklist.toggle(id);
        self.persist_checklist();
    }

    pub fn toggle_selected_step(&mut self) {
        let step = PUBLISH_STEPS[self.checklist_cursor];
        self.toggle_step(step.id);
    }

    pub fn completion_percent(&self) -> u8 {
        self.checklist.completion_percent()
    }

    /// Open the selected step's action link in the default browser
    pub fn open_selected_link(&self) {
        let step = PUBLISH_STEPS[self.checklist_cursor];
        if let Some(link) = step.link {
            if let Err(e) = open::that(link) {
                eprintln!("Warning: could not open {}: {}", link, e);
            }
        }
    }

    // ── Focus timer ──────────────────────────────────────────────────

    /// Start the preset under the cursor
    pub fn start_selected_preset(&mut self) {
        self.timer.start(FOCUS_PRESETS_MIN[self.preset_cursor]);
    }

    /// Advance the countdown; fires the completion notification on the
    /// tick that reaches 0:00
    pub fn tick(&mut self) {
        if self.timer.tick() {
            notifications::notify_focus_complete();
        }
    }

    // ── Self-check ───────────────────────────────────────────────────

    pub fn toggle_selected_self_check(&mut self) {
        self.self_checks[self.self_check_cursor] = !self.self_checks[self.self_check_cursor];
    }

    // ── Journal ──────────────────────────────────────────────────────

    /// Add a note to the front of the journal. Blank or whitespace-only
    /// text is silently ignored.
    pub fn add_note(&mut self, text: String) {
        if text.trim().is_empty() {
            return;
        }
        self.notes.insert(0, NoteEntry::new(text));
        self.journal_cursor = 0;
        self.persist_notes();
    }

    /// Remove the note with the given id, if present
    pub fn delete_note(&mut self, id: Uuid) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() != before {
            self.clamp_journal_cursor();
            self.persist_notes();
        }
    }

    pub fn delete_selected_note(&mut self) {
        if let Some(note) = self.notes.get(self.journal_cursor) {
            let id = note.id;
            self.delete_note(id);
        }
    }

    fn clamp_journal_cursor(&mut self) {
        if self.journal_cursor >= self.notes.len() {
            self.journal_cursor = self.notes.len().saturating_sub(1);
        }
    }

    /// Begin composing a note
    pub fn start_composing(&mut self) {
        self.pane = Pane::Journal;
        self.ui_mode = UiMode::ComposingNote;
        self.note_draft.clear();
    }

    /// Submit the draft as a new note. Blank drafts leave the compose
    /// prompt open, mirroring the silent-reject rule.
    pub fn submit_note(&mut self) {
        if self.note_draft.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.note_draft);
        self.add_note(text);
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_composing(&mut self) {
        self.note_draft.clear();
        self.ui_mode = UiMode::Normal;
    }

    // ── Roadmap ──────────────────────────────────────────────────────

    /// Overwrite one roadmap field, preserving its siblings, and persist
    /// the whole record
    pub fn set_roadmap_field(&mut self, index: usize, value: String) {
        *self.roadmap.field_mut(index) = value;
        self.persist_roadmap();
    }

    /// Begin editing the roadmap field under the cursor
    pub fn start_roadmap_edit(&mut self) {
        self.pane = Pane::Roadmap;
        self.ui_mode = UiMode::EditingRoadmap;
    }

    pub fn roadmap_push_char(&mut self, c: char) {
        self.roadmap.field_mut(self.roadmap_field).push(c);
        self.persist_roadmap();
    }

    pub fn roadmap_backspace(&mut self) {
        if self.roadmap.field_mut(self.roadmap_field).pop().is_some() {
            self.persist_roadmap();
        }
    }

    pub fn roadmap_next_field(&mut self) {
        self.roadmap_field = (self.roadmap_field + 1) % ROADMAP_FIELDS.len();
    }

    pub fn finish_roadmap_edit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ── Focus mode overlay ───────────────────────────────────────────

    /// Enter the full-screen overlay. Nothing is reset; the panel keeps
    /// existing underneath.
    pub fn enter_focus_mode(&mut self) {
        self.focus_mode = true;
        self.ui_mode = UiMode::FocusOverlay;
    }

    /// Leave the overlay and restore the normal view
    pub fn leave_focus_mode(&mut self) {
        self.focus_mode = false;
        self.ui_mode = UiMode::Normal;
    }

    // ── Pane navigation ──────────────────────────────────────────────

    pub fn next_pane(&mut self) {
        self.pane = self.pane.next();
    }

    pub fn prev_pane(&mut self) {
        self.pane = self.pane.prev();
    }

    /// Row count of the pane that has focus
    fn selection_len(&self) -> usize {
        match self.pane {
            Pane::Checklist => PUBLISH_STEPS.len(),
            Pane::Timer => FOCUS_PRESETS_MIN.len(),
            Pane::SelfCheck => SELF_CHECK_ITEMS.len(),
            Pane::Roadmap => ROADMAP_FIELDS.len(),
            Pane::Journal => self.notes.len(),
        }
    }

    fn selection_cursor_mut(&mut self) -> &mut usize {
        match self.pane {
            Pane::Checklist => &mut self.checklist_cursor,
            Pane::Timer => &mut self.preset_cursor,
            Pane::SelfCheck => &mut self.self_check_cursor,
            Pane::Roadmap => &mut self.roadmap_field,
            Pane::Journal => &mut self.journal_cursor,
        }
    }

    pub fn move_selection_up(&mut self) {
        let cursor = self.selection_cursor_mut();
        if *cursor > 0 {
            *cursor -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.selection_len();
        let cursor = self.selection_cursor_mut();
        if len > 0 && *cursor < len - 1 {
            *cursor += 1;
        }
    }
}
