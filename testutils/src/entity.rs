use rstest::*;
use st_core::prelude::*;

use crate::constants::*;

#[fixture]
pub fn test_id() -> EntityId {
    EntityId::new(TEST_ENTITY_ID).unwrap()
}
