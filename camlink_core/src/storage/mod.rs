pub mod settings;
pub mod store;

pub use settings::DeviceSettings;
pub use store::{SettingsError, SettingsStore};
