use serde::{Deserialize, Serialize};

/// The persisted device credentials.
///
/// JSON shape: `{ "ip": "...", "username": "...", "password": "..." }`.
/// Every field defaults to the empty string, so `{}` and documents with
/// any subset of fields deserialize cleanly. The password is stored in
/// plaintext; the record is held immutably and passed by reference into
/// each connection attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSettings {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
