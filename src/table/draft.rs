use super::error::TableError;
use crate::api::User;
use std::{fmt, str::FromStr};

/// Which dialog, if any, the table currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Adding,
    Editing,
}

impl Dialog {
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Editable fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    DisplayName,
    LoginName,
    Password,
    Role,
}

impl DraftField {
    pub const ALL: [Self; 4] = [Self::DisplayName, Self::LoginName, Self::Password, Self::Role];

    /// Merge `value` into `draft`. A blank role clears it.
    ///
    /// # Errors
    /// Returns `TableError::InvalidField` if a role value is not an integer.
    pub fn apply(self, draft: &mut User, value: &str) -> Result<(), TableError> {
        match self {
            Self::DisplayName => draft.display_name = Some(value.to_string()),
            Self::LoginName => draft.login_name = Some(value.to_string()),
            Self::Password => draft.password = Some(value.to_string()),
            Self::Role => {
                let trimmed = value.trim();
                draft.role_id = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.parse().map_err(|_| TableError::InvalidField {
                        field: self,
                        value: value.to_string(),
                    })?)
                };
            }
        }
        Ok(())
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DisplayName => "name",
            Self::LoginName => "login",
            Self::Password => "password",
            Self::Role => "role",
        };
        f.write_str(name)
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "nombre" => Ok(Self::DisplayName),
            "login" | "username" => Ok(Self::LoginName),
            "password" => Ok(Self::Password),
            "role" | "rol" => Ok(Self::Role),
            _ => Err(format!(
                "unknown field {s}, expected one of: name, login, password, role"
            )),
        }
    }
}
