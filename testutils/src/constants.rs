pub const TEST_ENTITY_ID: &str = "42";
pub const TEST_RESOURCE: &str = "stories";
pub const TEST_ENTITY_PATH: &str = "/stories/42";
pub const TEST_REDIRECT_PATH: &str = "/stories";
