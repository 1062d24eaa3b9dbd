//! Configuration management for startdeck
//!
//! - **settings**: the persisted `Config` record and its enums
//! - **storage**: key/value backends (`FileStorage` on disk)
//! - **store**: load-or-default and best-effort save under the fixed key

pub mod settings;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use settings::{Config, FONTS, Section, Sections, Theme};
pub use storage::{FileStorage, Storage};
pub use store::ConfigStore;
