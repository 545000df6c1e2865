//! reqwest-backed implementation of [`UserService`]. Endpoint paths are built by
//! appending segments to the configured base URL, so a base with a path prefix
//! (`https://host/api`) keeps working. Errors are passed through unchanged apart
//! from mapping them into [`ApiError`].

use super::{
    error::ApiError,
    types::{Envelope, User},
    UserService,
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default base URL of the backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5298";
/// Collection path of the user resource.
const USERS: &str = "Usuarios";
/// Maximum number of error body characters surfaced to the operator.
const MAX_ERROR_CHARS: usize = 200;

/// HTTP client for the `/Usuarios` API.
#[derive(Debug, Clone)]
pub struct UsuariosClient {
    http: Client,
    base_url: Url,
}

impl UsuariosClient {
    /// Build a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidUrl` if the URL is empty, unparsable, not
    /// `http`/`https`, or cannot be a base; `ApiError::Transport` if the
    /// underlying client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let base_url = Url::parse(trimmed.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{trimmed}: {e}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::InvalidUrl(format!(
                    "unsupported scheme {scheme}, expected http:// or https://"
                )))
            }
        }

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{trimmed} cannot be a base URL")));
        }

        let http = Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Resolve an endpoint by appending `segments` to the base URL.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidUrl` if the base URL cannot take path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        debug!("endpoint URL: {}", url);

        Ok(url)
    }
}

impl UserService for UsuariosClient {
    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.endpoint(&[USERS])?;
        let response = self.http.get(url).send().await?;

        decode_result(success(response).await?).await
    }

    #[instrument(skip(self))]
    async fn search_users_by_name(&self, name: &str) -> Result<Vec<User>, ApiError> {
        let url = self.endpoint(&[USERS, "search", name])?;
        let response = self.http.get(url).send().await?;

        decode_result(success(response).await?).await
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&[USERS, &id.to_string()])?;
        let response = self.http.delete(url).send().await?;

        success(response).await?;

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn update_user(&self, id: i64, user: &User) -> Result<(), ApiError> {
        let url = self.endpoint(&[USERS, &id.to_string()])?;
        let response = self.http.put(url).json(user).send().await?;

        success(response).await?;

        Ok(())
    }

    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.endpoint(&[USERS])?;
        let response = self.http.post(url).json(user).send().await?;

        let created: User = decode_result(success(response).await?).await?;
        if created.id.is_none() {
            return Err(ApiError::Decode(
                "created user has no pkUsuario".to_string(),
            ));
        }

        Ok(created)
    }
}

/// Pass 2xx responses through and turn everything else into `ApiError::Http`.
async fn success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ApiError::Http {
        status: status.as_u16(),
        body: sanitize_body(&body),
    })
}

/// Decode the `{ "result": T }` envelope.
async fn decode_result<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;

    serde_json::from_slice::<Envelope<T>>(&bytes)
        .map(|envelope| envelope.result)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Trim and truncate error bodies before they reach the operator.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
