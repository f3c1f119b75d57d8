//! HTTP client for the Stratus control API
//!
//! All remote reads and writes go through the repository traits defined
//! here. Command handlers only ever see the traits, which keeps them
//! testable against in-memory fakes; [`StratusApiClient`] is the live
//! implementation talking to the `/v1` endpoints.

use crate::model::{
    LoginResponse, Organization, OrganizationListResponse, Space, SpaceListResponse, SpaceQuota,
    SpaceQuotaListResponse,
};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use strum::Display;
use url::Url;

/// What kind of resource a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResourceKind {
    Organization,
    Space,
    #[strum(serialize = "Space quota")]
    SpaceQuota,
}

/// Error emitted by the Stratus control API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{kind} {name} not found")]
    NotFound { kind: ResourceKind, name: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// Error document returned by the control API on failures
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Read and mutate organizations
#[async_trait]
pub trait OrganizationRepository {
    /// Look up one organization by name, case-insensitively
    async fn find_by_name(&self, name: &str) -> Result<Organization, ApiError>;
    async fn list(&self) -> Result<Vec<Organization>, ApiError>;
    async fn create(&self, name: &str) -> Result<Organization, ApiError>;
    async fn delete(&self, guid: &str) -> Result<(), ApiError>;
}

/// Read and mutate spaces, always scoped to one organization
#[async_trait]
pub trait SpaceRepository {
    /// Look up one space by name within an organization, case-insensitively
    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> Result<Space, ApiError>;
    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<Space>, ApiError>;
    async fn create(&self, name: &str, org_guid: &str) -> Result<Space, ApiError>;
    async fn rename(&self, guid: &str, new_name: &str) -> Result<Space, ApiError>;
    async fn delete(&self, guid: &str) -> Result<(), ApiError>;
}

/// Read space quota definitions and move them on and off spaces
#[async_trait]
pub trait SpaceQuotaRepository {
    async fn find_by_name_in_org(&self, name: &str, org_guid: &str)
        -> Result<SpaceQuota, ApiError>;
    async fn find_by_guid(&self, guid: &str) -> Result<SpaceQuota, ApiError>;
    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<SpaceQuota>, ApiError>;
    async fn assign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError>;
    async fn unassign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError>;
}

/// Exchange credentials for an access token
#[async_trait]
pub trait AuthRepository {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;
}

pub struct StratusApiClient {
    base_url: String,
    access_token: Option<String>,
    http: reqwest::Client,
}

impl StratusApiClient {
    pub fn new(api_url: &Url) -> Self {
        Self {
            base_url: api_url.as_str().trim_end_matches('/').to_string(),
            access_token: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Start a request, attaching the access token if available
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Map a non-success response to an [`ApiError::Api`], preferring
    /// the message in the error document over the bare status
    async fn fail_on_error(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|error| error.message)
            .unwrap_or_else(|_| format!("the API responded with status {}", status));
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AuthRepository for StratusApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/v1/auth/login", self.base_url);

        // "Authorization", "Basic " + base64(username + ":" + password)
        let combined_credentials = [username, password].join(":");
        let encoded_credentials = general_purpose::STANDARD.encode(combined_credentials);
        let mut authorization_header_value = String::from("Basic ");
        authorization_header_value.push_str(encoded_credentials.as_str());

        let response = self
            .http
            .post(&url)
            .header("Authorization", authorization_header_value.as_str())
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Api {
                status: StatusCode::UNAUTHORIZED.as_u16(),
                message: "Credentials were rejected, please try again.".to_string(),
            });
        }

        let response = Self::fail_on_error(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OrganizationRepository for StratusApiClient {
    async fn find_by_name(&self, name: &str) -> Result<Organization, ApiError> {
        let url = format!("{}/v1/organizations", self.base_url);

        let response = self
            .request(Method::GET, &url)
            .query(&[("name", name.to_lowercase())])
            .send()
            .await?;
        let response = Self::fail_on_error(response).await?;

        let list: OrganizationListResponse = response.json().await?;
        list.organizations
            .into_iter()
            .find(|organization| organization.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::Organization,
                name: name.to_string(),
            })
    }

    async fn list(&self) -> Result<Vec<Organization>, ApiError> {
        let url = format!("{}/v1/organizations", self.base_url);

        let response = self.request(Method::GET, &url).send().await?;
        let response = Self::fail_on_error(response).await?;

        let list: OrganizationListResponse = response.json().await?;
        Ok(list.organizations)
    }

    async fn create(&self, name: &str) -> Result<Organization, ApiError> {
        let url = format!("{}/v1/organizations", self.base_url);

        let response = self
            .request(Method::POST, &url)
            .json(&json!({ "name": name }))
            .send()
            .await?;
        let response = Self::fail_on_error(response).await?;

        Ok(response.json().await?)
    }

    async fn delete(&self, guid: &str) -> Result<(), ApiError> {
        let url = format!("{}/v1/organizations/{}", self.base_url, guid);

        let response = self.request(Method::DELETE, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::Organization,
                name: guid.to_string(),
            });
        }
        Self::fail_on_error(response).await?;

        Ok(())
    }
}

#[async_trait]
impl SpaceRepository for StratusApiClient {
    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> Result<Space, ApiError> {
        let url = format!("{}/v1/organizations/{}/spaces", self.base_url, org_guid);

        let response = self
            .request(Method::GET, &url)
            .query(&[("name", name.to_lowercase())])
            .send()
            .await?;
        let response = Self::fail_on_error(response).await?;

        let list: SpaceListResponse = response.json().await?;
        list.spaces
            .into_iter()
            .find(|space| space.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::Space,
                name: name.to_string(),
            })
    }

    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<Space>, ApiError> {
        let url = format!("{}/v1/organizations/{}/spaces", self.base_url, org_guid);

        let response = self.request(Method::GET, &url).send().await?;
        let response = Self::fail_on_error(response).await?;

        let list: SpaceListResponse = response.json().await?;
        Ok(list.spaces)
    }

    async fn create(&self, name: &str, org_guid: &str) -> Result<Space, ApiError> {
        let url = format!("{}/v1/organizations/{}/spaces", self.base_url, org_guid);

        let response = self
            .request(Method::POST, &url)
            .json(&json!({ "name": name }))
            .send()
            .await?;
        let response = Self::fail_on_error(response).await?;

        Ok(response.json().await?)
    }

    async fn rename(&self, guid: &str, new_name: &str) -> Result<Space, ApiError> {
        let url = format!("{}/v1/spaces/{}", self.base_url, guid);

        let response = self
            .request(Method::PATCH, &url)
            .json(&json!({ "name": new_name }))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::Space,
                name: guid.to_string(),
            });
        }
        let response = Self::fail_on_error(response).await?;

        Ok(response.json().await?)
    }

    async fn delete(&self, guid: &str) -> Result<(), ApiError> {
        let url = format!("{}/v1/spaces/{}", self.base_url, guid);

        let response = self.request(Method::DELETE, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::Space,
                name: guid.to_string(),
            });
        }
        Self::fail_on_error(response).await?;

        Ok(())
    }
}

#[async_trait]
impl SpaceQuotaRepository for StratusApiClient {
    async fn find_by_name_in_org(
        &self,
        name: &str,
        org_guid: &str,
    ) -> Result<SpaceQuota, ApiError> {
        let url = format!(
            "{}/v1/organizations/{}/space_quotas",
            self.base_url, org_guid
        );

        let response = self
            .request(Method::GET, &url)
            .query(&[("name", name.to_lowercase())])
            .send()
            .await?;
        let response = Self::fail_on_error(response).await?;

        let list: SpaceQuotaListResponse = response.json().await?;
        list.space_quotas
            .into_iter()
            .find(|quota| quota.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: name.to_string(),
            })
    }

    async fn find_by_guid(&self, guid: &str) -> Result<SpaceQuota, ApiError> {
        let url = format!("{}/v1/space_quotas/{}", self.base_url, guid);

        let response = self.request(Method::GET, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: guid.to_string(),
            });
        }
        let response = Self::fail_on_error(response).await?;

        Ok(response.json().await?)
    }

    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<SpaceQuota>, ApiError> {
        let url = format!(
            "{}/v1/organizations/{}/space_quotas",
            self.base_url, org_guid
        );

        let response = self.request(Method::GET, &url).send().await?;
        let response = Self::fail_on_error(response).await?;

        let list: SpaceQuotaListResponse = response.json().await?;
        Ok(list.space_quotas)
    }

    async fn assign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}/v1/space_quotas/{}/spaces/{}",
            self.base_url, quota_guid, space_guid
        );

        let response = self.request(Method::PUT, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: quota_guid.to_string(),
            });
        }
        Self::fail_on_error(response).await?;

        Ok(())
    }

    async fn unassign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError> {
        let url = format!(
            "{}/v1/space_quotas/{}/spaces/{}",
            self.base_url, quota_guid, space_guid
        );

        let response = self.request(Method::DELETE, &url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: quota_guid.to_string(),
            });
        }
        Self::fail_on_error(response).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_display() {
        assert_eq!(ResourceKind::Organization.to_string(), "Organization");
        assert_eq!(ResourceKind::Space.to_string(), "Space");
        assert_eq!(ResourceKind::SpaceQuota.to_string(), "Space quota");
    }

    #[test]
    fn test_not_found_message() {
        let error = ApiError::NotFound {
            kind: ResourceKind::Space,
            name: "my-space".to_string(),
        };
        assert_eq!(error.to_string(), "Space my-space not found");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let url = Url::parse("https://api.stratus.example.com/").unwrap();
        let client = StratusApiClient::new(&url);
        assert_eq!(client.base_url, "https://api.stratus.example.com");
    }
}
