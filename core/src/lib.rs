//! Async client for the remote user resource.
//!
//! # Overview
//! `UserService` exposes get / add / update / delete against a `/user`
//! collection behind a fixed base URL. The network sits behind the
//! [`Transport`] trait and identifier generation behind [`IdGenerator`], so
//! both can be swapped out in tests.
//!
//! # Design
//! - The service is stateless apart from its two collaborators; concurrent
//!   calls never share mutable state.
//! - `update` is read-modify-write: it fetches the record, overlays the
//!   partial input, and writes the full field set back.
//! - `delete` takes a continuation that runs after a successful delete and
//!   whose result becomes the operation's result.
//! - Transport errors reach the caller unchanged.

pub mod config;
pub mod error;
pub mod http;
pub mod id;
pub mod service;
pub mod transport;
pub mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpResponse, Transport};
pub use id::{IdGenerator, UuidGenerator};
pub use service::UserService;
pub use transport::HttpTransport;
pub use types::{CreateUserInput, UpdateUserInput, UserModel};
