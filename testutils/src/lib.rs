mod constants;
mod entity;
mod fake;

pub use constants::*;
pub use entity::*;
pub use fake::*;
