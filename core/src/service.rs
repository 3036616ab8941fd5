//! User resource operations on top of a [`Transport`].
//!
//! # Design
//! `UserService` owns its transport and identifier source and holds no other
//! state, so independent calls can run concurrently on a shared reference.
//! Failures from the transport are returned untouched: no wrapping, no
//! retries, no local recovery.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::Transport;
use crate::id::{IdGenerator, UuidGenerator};
use crate::transport::HttpTransport;
use crate::types::{CreateUserInput, UpdateUserInput, UserModel};

const COLLECTION_PATH: &str = "/user";

fn user_path(user_id: &str) -> String {
    format!("{COLLECTION_PATH}/{user_id}")
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Client for the remote `/user` collection.
#[derive(Debug, Clone)]
pub struct UserService<T, G = UuidGenerator> {
    transport: T,
    ids: G,
}

impl UserService<HttpTransport, UuidGenerator> {
    /// Service over HTTP with random v4 identifiers.
    pub fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(config)?, UuidGenerator))
    }
}

impl<T: Transport, G: IdGenerator> UserService<T, G> {
    pub fn new(transport: T, ids: G) -> Self {
        Self { transport, ids }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a user by identifier. The identifier is used verbatim in the
    /// path.
    #[instrument(skip(self))]
    pub async fn get(&self, user_id: &str) -> Result<UserModel, ApiError> {
        debug!("fetching user");
        let response = self.transport.get(&user_path(user_id)).await?;
        response.json()
    }

    /// Create a user under a freshly generated identifier.
    ///
    /// Not idempotent: every call generates a new identifier and so creates a
    /// new resource.
    #[instrument(skip(self, input))]
    pub async fn add(&self, input: CreateUserInput) -> Result<(), ApiError> {
        let user_id = self.ids.generate();
        debug!(%user_id, "adding user");
        let body = to_body(&input.with_id(user_id))?;
        self.transport.post(COLLECTION_PATH, body).await?;
        Ok(())
    }

    /// Apply a partial update by fetching the current record, overlaying the
    /// present fields of `input`, and writing the result back.
    ///
    /// The identifier travels in the path only. If the fetch fails nothing is
    /// written.
    #[instrument(skip(self, input))]
    pub async fn update(&self, user_id: &str, input: UpdateUserInput) -> Result<(), ApiError> {
        let (_, current) = self.get(user_id).await?.into_parts();
        let body = to_body(&current.apply(input))?;
        debug!("writing merged user");
        self.transport.put(&user_path(user_id), body).await?;
        Ok(())
    }

    /// Delete a user, then hand its identifier to `callback` and return
    /// whatever the callback produces.
    ///
    /// The callback runs only after the delete succeeded. A failing callback
    /// does not undo the delete.
    #[instrument(skip(self, callback))]
    pub async fn delete<F, Fut, R, E>(&self, user_id: &str, callback: F) -> Result<R, E>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        E: From<ApiError>,
    {
        self.transport.delete(&user_path(user_id)).await?;
        debug!("user deleted, running callback");
        callback(user_id.to_string()).await
    }
}
