pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_nook_dir, get_nook_dir, init_local_nook, read_file};
pub use store::{
    load_record_or_default, save_record, try_load_record, CorruptRecord, FileStore, MemoryStore,
    Store, CHECKLIST_KEY, NOTES_KEY, ROADMAP_KEY,
};
