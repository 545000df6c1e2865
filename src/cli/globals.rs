use crate::api::UsuariosClient;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(api_url: String, timeout: Duration) -> Self {
        Self { api_url, timeout }
    }

    /// Build the API client for these settings.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn client(&self) -> anyhow::Result<UsuariosClient> {
        Ok(UsuariosClient::new(&self.api_url, self.timeout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("http://localhost:5298".to_string(), Duration::from_secs(10));
        assert_eq!(args.api_url, "http://localhost:5298");
        assert_eq!(args.timeout, Duration::from_secs(10));
        assert!(args.client().is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let args = GlobalArgs::new("ftp://localhost".to_string(), Duration::from_secs(10));
        let err = args.client().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme ftp"));
    }
}
