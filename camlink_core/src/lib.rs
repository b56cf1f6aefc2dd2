pub mod connections;
pub mod core;
pub mod logbook;
pub mod storage;
pub mod utils;

// re‑export ergonomic entry points
pub use crate::core::session_manager::{ConnectionOutcome, SessionManager};
pub use crate::logbook::LogBook;
pub use crate::storage::settings::DeviceSettings;
pub use crate::storage::store::SettingsStore;
