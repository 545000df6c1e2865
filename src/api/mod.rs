//! Remote user service: the five `/Usuarios` operations behind one trait so the
//! table controller can run against the HTTP client or an in-memory fake.

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use self::client::{UsuariosClient, DEFAULT_BASE_URL};
pub use self::error::ApiError;
pub use self::types::User;

use std::future::Future;

/// Operations exposed by the backend user resource.
///
/// Implementations propagate failures as [`ApiError`] and never retry.
pub trait UserService {
    /// `GET /Usuarios`
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    /// `GET /Usuarios/search/{name}`
    fn search_users_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    /// `DELETE /Usuarios/{id}`
    fn delete_user(&self, id: i64) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `PUT /Usuarios/{id}`, replacing every non-id field.
    fn update_user(
        &self,
        id: i64,
        user: &User,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `POST /Usuarios`; the returned record carries the server-assigned id.
    fn create_user(&self, user: &User) -> impl Future<Output = Result<User, ApiError>> + Send;
}
