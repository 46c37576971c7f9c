use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::errors::*;

err_impl! {EntityError,
    #[error("invalid entity identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("endpoint cannot carry a resource path: {0}")]
    InvalidEndpoint(String),
}

/// Opaque token naming the resource to delete.  The only thing we care about is that it fits in a
/// single URL path segment; anything else about the format is owned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> anyhow::Result<EntityId> {
        let id = id.into();
        if id.is_empty() || id == "." || id == ".." || id.contains('/') {
            return Err(EntityError::invalid_identifier(&id));
        }
        Ok(EntityId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EntityId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<EntityId> {
        EntityId::new(s)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where deletions get sent: `<base>/<resource>/<id>`
#[derive(Clone, Debug)]
pub struct Endpoint {
    base: Url,
    resource: String,
}

impl Endpoint {
    pub fn new(base: Url, resource: &str) -> Endpoint {
        Endpoint { base, resource: resource.trim_matches('/').into() }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url_for(&self, id: &EntityId) -> anyhow::Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| EntityError::invalid_endpoint(self.base.as_str()))?;
            segments.pop_if_empty();
            segments.extend(self.resource.split('/').filter(|s| !s.is_empty()));
            segments.push(id.as_str());
        }
        Ok(url)
    }
}
