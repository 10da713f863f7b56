pub mod checklist;
pub mod enums;
pub mod note;
pub mod roadmap;
pub mod timer;

pub use checklist::{Checklist, PublishStep, PUBLISH_STEPS, SELF_CHECK_ITEMS};
pub use enums::{Pane, UiMode};
pub use note::{format_note_date, NoteEntry};
pub use roadmap::{Roadmap, ROADMAP_FIELDS};
pub use timer::{format_countdown, FocusTimer, TimerPhase, FOCUS_PRESETS_MIN};
