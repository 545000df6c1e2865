use super::draft::DraftField;
use crate::api::ApiError;
use thiserror::Error;

/// Errors surfaced by the table controller to the presentation layer.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("no user dialog is open")]
    DialogClosed,

    #[error("unknown user id: {0}")]
    UnknownUser(i64),

    #[error("the user being edited has no id")]
    MissingId,

    #[error("invalid value for {field}: {value}")]
    InvalidField { field: DraftField, value: String },
}
