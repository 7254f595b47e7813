//! Application-level configuration constants.

// Backend endpoints
pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const PREDICT_ENDPOINT: &str = "/predict";

// Fixed user-facing strings for failure paths and connectivity changes.
pub const CHAT_FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting. Please check your internet and try again.";
pub const OFFLINE_MESSAGE: &str = "You are currently offline";
pub const ONLINE_MESSAGE: &str = "Connection restored";

// DOM anchors
pub const GAUGE_CONTAINER_ID: &str = "confidenceGauge";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

// Animation tick for the gauge driver (~60 fps).
pub const FRAME_MS: u32 = 16;

// Upload constraints
pub const MAX_UPLOAD_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

// localStorage keys
pub const STORAGE_KEY_LANG: &str = "selectedLanguage";
pub const STORAGE_KEY_CONTRAST: &str = "highContrast";
