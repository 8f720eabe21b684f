mod content;
mod platform;
mod preferences;
mod shuffle;

pub use content::{Content, ContentId, ContentType, CulturalTag, PlatformAvailability};
pub use platform::Platform;
pub use preferences::{PreferenceStore, PreferenceUpdate, UserPreferences};
pub use shuffle::{ContentFilter, ShuffleMode, ShuffleRequest, ShuffleResult};
