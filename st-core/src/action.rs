use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{
    CONTENT_TYPE,
    HeaderMap,
    HeaderValue,
};
use tokio::task::JoinHandle;

use crate::prelude::*;

/// Confirm-then-delete for a single kind of resource.
///
/// The action never retries and never reports anything except through the environment: a
/// redirect navigates, a 2xx is silent, and anything else raises the "Delete failed." alert.
/// Transport errors (the request never completing) are _not_ handled here; they bubble up to
/// whoever is driving the action.
pub struct DeleteAction<E> {
    env: Arc<E>,
    endpoint: Endpoint,
}

impl<E: Environment> DeleteAction<E> {
    pub fn new(env: Arc<E>, endpoint: Endpoint) -> DeleteAction<E> {
        DeleteAction { env, endpoint }
    }

    pub async fn delete_entity(&self, id: &EntityId) -> EmptyResult {
        let url = self.endpoint.url_for(id)?;
        if !self.env.confirm(CONFIRM_DELETE_MESSAGE) {
            debug!("deletion of {id} cancelled by user");
            return Ok(());
        }

        send_delete(self.env.as_ref(), url).await
    }

    /// Same as `delete_entity`, except that only the confirmation happens on the calling task;
    /// the request and the response handling are handed off to the runtime and the caller gets
    /// the handle back immediately.  Returns `None` if the user declined.
    pub fn spawn(&self, id: &EntityId) -> anyhow::Result<Option<JoinHandle<EmptyResult>>>
    where
        E: 'static,
    {
        let url = self.endpoint.url_for(id)?;
        if !self.env.confirm(CONFIRM_DELETE_MESSAGE) {
            debug!("deletion of {id} cancelled by user");
            return Ok(None);
        }

        let env = self.env.clone();
        Ok(Some(tokio::spawn(async move { send_delete(env.as_ref(), url).await })))
    }
}

async fn send_delete<E: Environment + ?Sized>(env: &E, url: Url) -> EmptyResult {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    info!("deleting {url}");
    match env.request(Method::DELETE, url, headers).await? {
        ResponseDescriptor { redirected: true, url, .. } => env.navigate(&url),
        ResponseDescriptor { ok: true, status, .. } => debug!("delete succeeded with {status}"),
        ResponseDescriptor { status, .. } => {
            debug!("delete rejected with {status}");
            env.alert(DELETE_FAILED_MESSAGE);
        },
    }

    Ok(())
}
