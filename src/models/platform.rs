use serde::{Deserialize, Serialize};

/// A streaming platform the user may connect their account to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    /// Platform id used in content availability mappings (e.g., "netflix")
    pub id: String,
    /// Display name (e.g., "Netflix")
    pub name: String,
    /// Connection state, mutated only by an explicit user toggle
    #[serde(default)]
    pub is_connected: bool,
}

impl Platform {
    /// Creates a new, disconnected platform
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_connected: false,
        }
    }

    /// Flips the connection state and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.is_connected = !self.is_connected;
        self.is_connected
    }
}
