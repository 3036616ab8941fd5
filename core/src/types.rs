//! Domain DTOs for the user API.
//!
//! # Design
//! The wire format uses camelCase (`userId`), matching the remote endpoint.
//! `CreateUserInput` is a `UserModel` without its identifier, and
//! `UpdateUserInput` is a `CreateUserInput` with every field optional. The
//! helpers on these types are the only place records are merged, so the
//! service never touches individual fields.

use serde::{Deserialize, Serialize};

/// A single user record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    pub user_id: String,
    pub name: String,
    pub address: String,
}

impl UserModel {
    /// Split the record into its identifier and the remaining fields.
    pub fn into_parts(self) -> (String, CreateUserInput) {
        (
            self.user_id,
            CreateUserInput {
                name: self.name,
                address: self.address,
            },
        )
    }
}

/// Caller-supplied fields for a new user. The identifier is generated
/// client-side when the user is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
    pub address: String,
}

impl CreateUserInput {
    pub fn with_id(self, user_id: impl Into<String>) -> UserModel {
        UserModel {
            user_id: user_id.into(),
            name: self.name,
            address: self.address,
        }
    }

    /// Overlay the fields present in `update`; absent fields keep their
    /// current value.
    pub fn apply(self, update: UpdateUserInput) -> CreateUserInput {
        CreateUserInput {
            name: update.name.unwrap_or(self.name),
            address: update.address.unwrap_or(self.address),
        }
    }
}

/// Partial update for an existing user. Only the fields present are
/// applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
