pub mod action;
pub mod constants;
pub mod entity;
pub mod env;
pub mod errors;
pub mod logging;

pub mod prelude {
    pub use reqwest::Url;
    pub use tracing::{
        debug,
        error,
        info,
        warn,
    };

    pub use crate::action::DeleteAction;
    pub use crate::constants::*;
    pub use crate::entity::{
        Endpoint,
        EntityId,
    };
    #[cfg(any(test, feature = "mock"))]
    pub use crate::env::MockEnvironment;
    pub use crate::env::{
        Environment,
        ResponseDescriptor,
        TerminalEnvironment,
    };
    pub use crate::errors::EmptyResult;
}

#[cfg(test)]
mod tests;
