mod terminal_test;

use std::sync::Arc;

use rstest::*;
use st_testutils::{
    FakeServer,
    TEST_ENTITY_ID,
    TEST_ENTITY_PATH,
    TEST_REDIRECT_PATH,
    TEST_RESOURCE,
};

use crate::prelude::*;

// st-testutils links against its own copy of this crate, so the entity/endpoint fixtures are
// rebuilt here rather than imported.
#[fixture]
fn id() -> EntityId {
    EntityId::new(TEST_ENTITY_ID).unwrap()
}

#[fixture]
fn endpoint() -> Endpoint {
    Endpoint::new(Url::parse(DEFAULT_ENDPOINT).unwrap(), TEST_RESOURCE)
}
