use serde::{Deserialize, Serialize};
use std::fmt;

/// A user record as exchanged with the `/Usuarios` endpoints.
///
/// `id` is assigned by the server and is `None` only for a record that has not
/// been persisted yet. It is left out of request bodies while unset.
///
/// Text fields keep a wire `null` as `None`, so a record read from the server
/// and sent back by a full-replacement update carries the same nulls.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "pkUsuario", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre", default)]
    pub display_name: Option<String>,
    #[serde(rename = "userName", default)]
    pub login_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(rename = "fkRol", default)]
    pub role_id: Option<i64>,
}

impl User {
    /// An empty draft as entered by the operator: blank text, no role.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: None,
            display_name: Some(String::new()),
            login_name: Some(String::new()),
            password: Some(String::new()),
            role_id: None,
        }
    }

    /// Display name, `""` when the server has none.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn login_name(&self) -> &str {
        self.login_name.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Whether the user has a role assigned. Role `0` counts as none.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.role_id, Some(role) if role != 0)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("login_name", &self.login_name)
            .field("password", &"***")
            .field("role_id", &self.role_id)
            .finish()
    }
}

/// The `{ "result": ... }` wrapper used by the backend.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub result: T,
}
