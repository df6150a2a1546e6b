//! HTTP client for the backend contract.

use crate::{
    error::ApiError,
    types::{LoginRequest, LoginResponse, Session, User},
};

/// Client for the backend HTTP API.
///
/// Cheap to clone; clones share the underlying connection pool, which lets
/// the runtime hand a copy to each spawned request task.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url }
    }

    /// Exchange credentials for a session via `POST /login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        tracing::debug!(email, "submitting login");

        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let body: LoginResponse = Self::success(response).await?.json().await?;
        Ok(Session::from(body))
    }

    /// List all users via `GET /api/users`.
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        tracing::debug!("fetching user list");

        let response =
            self.http.get(self.url("/api/users")).bearer_auth(token).send().await?;

        Ok(Self::success(response).await?.json().await?)
    }

    /// Look up one user via `GET /api/users/:id`.
    pub async fn get_user(&self, token: &str, id: &str) -> Result<User, ApiError> {
        tracing::debug!(id, "fetching user");

        let response = self
            .http
            .get(self.url(&format!("/api/users/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        Ok(Self::success(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map non-2xx responses to [`ApiError::Status`], keeping the body for
    /// the inline error display.
    async fn success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.url("/login"), "http://localhost:8080/login");
    }

    #[test]
    fn user_path_embeds_id() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(client.url("/api/users/u-1"), "http://localhost:8080/api/users/u-1");
    }
}
