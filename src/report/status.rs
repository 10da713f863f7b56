use crate::domain::{Checklist, NoteEntry, Roadmap, PUBLISH_STEPS, ROADMAP_FIELDS};
use crate::persistence::{load_record_or_default, Store, CHECKLIST_KEY, NOTES_KEY, ROADMAP_KEY};

/// How many recent notes `nook status` shows
const RECENT_NOTES: usize = 3;

/// Build the plain-text summary printed by `nook status`
pub fn render_status(store: &dyn Store) -> String {
    let checklist: Checklist = load_record_or_default(store, CHECKLIST_KEY);
    let roadmap: Roadmap = load_record_or_default(store, ROADMAP_KEY);
    let notes: Vec<NoteEntry> = load_record_or_default(store, NOTES_KEY);

    let mut out = String::new();

    out.push_str(&format!(
        "Publish checklist: {}% complete\n",
        checklist.completion_percent()
    ));
    for step in &PUBLISH_STEPS {
        let marker = if checklist.is_done(step.id) { "x" } else { " " };
        out.push_str(&format!("  [{}] {}. {}\n", marker, step.id, step.title));
    }

    let has_roadmap = (0..ROADMAP_FIELDS.len()).any(|idx| !roadmap.field(idx).is_empty());
    if has_roadmap {
        out.push_str("\nRoadmap:\n");
        for (idx, label) in ROADMAP_FIELDS.iter().enumerate() {
            let value = roadmap.field(idx);
            if !value.is_empty() {
                out.push_str(&format!("  {}: {}\n", label, value));
            }
        }
    }

    if notes.is_empty() {
        out.push_str("\nNo journal notes yet.\n");
    } else {
        out.push_str(&format!("\nJournal ({} notes):\n", notes.len()));
        for note in notes.iter().take(RECENT_NOTES) {
            out.push_str(&format!("  {} - {}\n", note.date, note.text));
        }
        if notes.len() > RECENT_NOTES {
            out.push_str(&format!("  ... and {} more\n", notes.len() - RECENT_NOTES));
        }
    }

    out
}
