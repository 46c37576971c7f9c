//! The capabilities a [`DeleteAction`](crate::action::DeleteAction) needs from the outside world.
//!
//! In the web frontend these were all ambient browser globals (`confirm`, `fetch`,
//! `window.location`, `alert`); here they're collected behind a single trait so that the action
//! can be driven from a terminal, or from a mock in tests.
mod terminal;

use async_trait::async_trait;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use reqwest::header::HeaderMap;
use reqwest::{
    Method,
    StatusCode,
    Url,
};
pub use terminal::TerminalEnvironment;

#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait Environment: Send + Sync {
    /// Blocks until the user answers; `true` means "go ahead".
    fn confirm(&self, message: &str) -> bool;

    async fn request(&self, method: Method, url: Url, headers: HeaderMap) -> anyhow::Result<ResponseDescriptor>;

    fn navigate(&self, url: &Url);

    fn alert(&self, message: &str);
}

/// The parts of an HTTP response that the delete action reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub ok: bool,

    /// At least one redirect was followed on the way to `url`; this can be true even when `url`
    /// is the URL that was originally requested
    pub redirected: bool,

    /// Final URL after any redirects were followed
    pub url: Url,
}

impl ResponseDescriptor {
    pub fn new(status: StatusCode, requested: &Url, final_url: Url) -> ResponseDescriptor {
        ResponseDescriptor {
            status,
            ok: status.is_success(),
            redirected: &final_url != requested,
            url: final_url,
        }
    }
}
