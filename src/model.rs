//! Domain model for the Stratus control API
//!
//! These types mirror the JSON documents exchanged with the platform.
//! Organizations own spaces, and a space may have at most one space
//! quota assigned to it.

use serde::{Deserialize, Serialize};

/// An organization as returned by the control API
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub guid: String,
    pub name: String,
}

impl Organization {
    /// Reduce to the summary stored in the local session
    pub fn fields(&self) -> OrganizationFields {
        OrganizationFields {
            guid: self.guid.clone(),
            name: self.name.clone(),
        }
    }
}

/// A space as returned by the control API
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Space {
    pub guid: String,
    pub name: String,
    pub organization_guid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_quota_guid: Option<String>,
}

impl Space {
    /// Reduce to the summary stored in the local session
    pub fn fields(&self) -> SpaceFields {
        SpaceFields {
            guid: self.guid.clone(),
            name: self.name.clone(),
        }
    }
}

/// A space quota definition scoped to one organization
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpaceQuota {
    pub guid: String,
    pub name: String,
    pub memory_limit_mb: i64,
    pub service_instance_limit: i64,
}

impl SpaceQuota {
    /// Render the memory limit the way the platform UI does, with -1
    /// meaning no limit
    pub fn formatted_memory_limit(&self) -> String {
        if self.memory_limit_mb < 0 {
            "unlimited".to_string()
        } else {
            format!("{}M", self.memory_limit_mb)
        }
    }
}

/// The slice of an organization kept in the session file
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OrganizationFields {
    pub guid: String,
    pub name: String,
}

/// The slice of a space kept in the session file
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpaceFields {
    pub guid: String,
    pub name: String,
}

/// Response payload of GET /v1/organizations
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OrganizationListResponse {
    pub organizations: Vec<Organization>,
}

/// Response payload of GET /v1/organizations/{guid}/spaces
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpaceListResponse {
    pub spaces: Vec<Space>,
}

/// Response payload of GET /v1/organizations/{guid}/space_quotas
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpaceQuotaListResponse {
    pub space_quotas: Vec<SpaceQuota>,
}

/// Response payload of POST /v1/auth/login
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
}
