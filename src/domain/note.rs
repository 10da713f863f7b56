use chrono::{DateTime, Local, Locale};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journal entry. Entries are created, prepended and deleted --
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub id: Uuid,
    pub text: String,
    /// Display timestamp, formatted once at creation
    pub date: String,
}

impl NoteEntry {
    /// Build an entry stamped with the current local time
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            date: format_note_date(Local::now()),
        }
    }
}

/// Journal timestamps always use the tr-TR display format:
/// day, long month name, year, then HH:MM (e.g. "6 Ağustos 2026 14:30").
pub fn format_note_date(when: DateTime<Local>) -> String {
    when.format_localized("%-d %B %Y %H:%M", Locale::tr_TR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_note_date_turkish_months() {
        let when = Local.with_ymd_and_hms(2026, 8, 6, 14, 30, 0).unwrap();
        assert_eq!(format_note_date(when), "6 Ağustos 2026 14:30");

        let when = Local.with_ymd_and_hms(2026, 1, 9, 9, 5, 0).unwrap();
        assert_eq!(format_note_date(when), "9 Ocak 2026 09:05");
    }

    #[test]
    fn test_new_note_has_id_and_date() {
        let note = NoteEntry::new("hello".to_string());
        assert_eq!(note.text, "hello");
        assert!(!note.id.is_nil());
        assert!(!note.date.is_empty());
    }

    #[test]
    fn test_note_ids_are_unique() {
        let a = NoteEntry::new("a".to_string());
        let b = NoteEntry::new("b".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_note_json_roundtrip() {
        let note = NoteEntry::new("ship it".to_string());
        let json = serde_json::to_string(&note).unwrap();
        let parsed: NoteEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, note);
    }
}
