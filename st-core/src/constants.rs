// User-facing dialog text
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this item? This action cannot be undone.";
pub const DELETE_FAILED_MESSAGE: &str = "Delete failed.";

// Defaults
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_RESOURCE: &str = "stories";

// Headers
pub const JSON_CONTENT_TYPE: &str = "application/json";
