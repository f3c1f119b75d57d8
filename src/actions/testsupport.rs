//! In-memory doubles for the command handler tests.
//!
//! The fake repositories record every call in a shared log so tests can
//! assert both what happened and in which order. The fake terminal
//! scripts prompt answers and captures the whole conversation.

use crate::api::{
    ApiError, AuthRepository, OrganizationRepository, ResourceKind, SpaceQuotaRepository,
    SpaceRepository,
};
use crate::model::{
    LoginResponse, Organization, OrganizationFields, Space, SpaceFields, SpaceQuota,
};
use crate::session::Session;
use crate::terminal::{Terminal, TerminalError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use url::Url;

/// Shared call log threaded through all fakes of one test
pub fn call_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

/// A session logged in as my-user against the example endpoint,
/// with nothing targeted yet
pub fn logged_in_session() -> Session {
    let mut session = Session::default();
    session.set_api_url(Url::parse("https://api.stratus.example.com").unwrap());
    session.set_access_token("access-token".to_string());
    session.set_username("my-user".to_string());
    session
}

/// A session logged in as my-user with my-org and my-space targeted
pub fn session_with_defaults() -> Session {
    let mut session = logged_in_session();
    session.set_organization_fields(OrganizationFields {
        guid: "my-org-guid".to_string(),
        name: "my-org".to_string(),
    });
    session.set_space_fields(SpaceFields {
        guid: "my-space-guid".to_string(),
        name: "my-space".to_string(),
    });
    session
}

pub fn organization(name: &str) -> Organization {
    Organization {
        guid: format!("{}-guid", name),
        name: name.to_string(),
    }
}

pub fn space(name: &str, org_name: &str) -> Space {
    Space {
        guid: format!("{}-guid", name),
        name: name.to_string(),
        organization_guid: format!("{}-guid", org_name),
        space_quota_guid: None,
    }
}

pub fn quota(name: &str) -> SpaceQuota {
    SpaceQuota {
        guid: format!("{}-guid", name),
        name: name.to_string(),
        memory_limit_mb: 2048,
        service_instance_limit: 10,
    }
}

/// Terminal double with scripted answers and a recorded transcript
pub struct FakeTerminal {
    pub outputs: Vec<String>,
    pub prompts: Vec<String>,
    pub confirm_answers: VecDeque<bool>,
    pub ask_answers: VecDeque<String>,
}

impl FakeTerminal {
    pub fn new() -> FakeTerminal {
        FakeTerminal {
            outputs: Vec::new(),
            prompts: Vec::new(),
            confirm_answers: VecDeque::new(),
            ask_answers: VecDeque::new(),
        }
    }

    pub fn answering_confirm(answer: bool) -> FakeTerminal {
        let mut terminal = FakeTerminal::new();
        terminal.confirm_answers.push_back(answer);
        terminal
    }

    pub fn answering_asks(answers: &[&str]) -> FakeTerminal {
        let mut terminal = FakeTerminal::new();
        terminal.ask_answers = answers.iter().map(|answer| answer.to_string()).collect();
        terminal
    }

    pub fn transcript_contains(&self, needle: &str) -> bool {
        self.outputs.iter().any(|line| line.contains(needle))
    }
}

impl Terminal for FakeTerminal {
    fn say(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn ok(&mut self) {
        self.outputs.push("OK".to_string());
    }

    fn failed(&mut self, text: &str) {
        self.outputs.push(format!("FAILED {}", text));
    }

    fn confirm_delete(&mut self, kind: &str, name: &str) -> bool {
        self.prompts
            .push(format!("Really delete the {} {}?", kind, name));
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn ask(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.prompts.push(prompt.to_string());
        self.ask_answers
            .pop_front()
            .ok_or(TerminalError::Prompt(
                inquire::InquireError::OperationCanceled,
            ))
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.ask(prompt)
    }
}

/// Organization repository double backed by a fixed list
pub struct FakeOrganizationRepository {
    pub organizations: Vec<Organization>,
    pub log: Arc<Mutex<Vec<String>>>,
    pub deleted: Mutex<Vec<String>>,
    pub delete_fails: bool,
}

impl FakeOrganizationRepository {
    pub fn with_organizations(
        organizations: Vec<Organization>,
        log: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        Self {
            organizations,
            log,
            deleted: Mutex::new(Vec::new()),
            delete_fails: false,
        }
    }
}

#[async_trait]
impl OrganizationRepository for FakeOrganizationRepository {
    async fn find_by_name(&self, name: &str) -> Result<Organization, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("org.find_by_name {}", name));
        self.organizations
            .iter()
            .find(|organization| organization.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::Organization,
                name: name.to_string(),
            })
    }

    async fn list(&self) -> Result<Vec<Organization>, ApiError> {
        self.log.lock().unwrap().push("org.list".to_string());
        Ok(self.organizations.clone())
    }

    async fn create(&self, name: &str) -> Result<Organization, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("org.create {}", name));
        Ok(organization(name))
    }

    async fn delete(&self, guid: &str) -> Result<(), ApiError> {
        self.log.lock().unwrap().push(format!("org.delete {}", guid));
        if self.delete_fails {
            return Err(ApiError::Api {
                status: 500,
                message: "the platform blew up".to_string(),
            });
        }
        self.deleted.lock().unwrap().push(guid.to_string());
        Ok(())
    }
}

/// Space repository double backed by a fixed list
pub struct FakeSpaceRepository {
    pub spaces: Vec<Space>,
    pub log: Arc<Mutex<Vec<String>>>,
    pub deleted: Mutex<Vec<String>>,
    pub delete_fails: bool,
}

impl FakeSpaceRepository {
    pub fn with_spaces(spaces: Vec<Space>, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            spaces,
            log,
            deleted: Mutex::new(Vec::new()),
            delete_fails: false,
        }
    }
}

#[async_trait]
impl SpaceRepository for FakeSpaceRepository {
    async fn find_by_name_in_org(&self, name: &str, org_guid: &str) -> Result<Space, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("space.find_by_name_in_org {} {}", name, org_guid));
        self.spaces
            .iter()
            .find(|space| space.name.eq_ignore_ascii_case(name) && space.organization_guid == org_guid)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::Space,
                name: name.to_string(),
            })
    }

    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<Space>, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("space.list_in_org {}", org_guid));
        Ok(self
            .spaces
            .iter()
            .filter(|space| space.organization_guid == org_guid)
            .cloned()
            .collect())
    }

    async fn create(&self, name: &str, org_guid: &str) -> Result<Space, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("space.create {} {}", name, org_guid));
        Ok(Space {
            guid: format!("{}-guid", name),
            name: name.to_string(),
            organization_guid: org_guid.to_string(),
            space_quota_guid: None,
        })
    }

    async fn rename(&self, guid: &str, new_name: &str) -> Result<Space, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("space.rename {} {}", guid, new_name));
        let space = self
            .spaces
            .iter()
            .find(|space| space.guid == guid)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::Space,
                name: guid.to_string(),
            })?;
        Ok(Space {
            name: new_name.to_string(),
            ..space
        })
    }

    async fn delete(&self, guid: &str) -> Result<(), ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("space.delete {}", guid));
        if self.delete_fails {
            return Err(ApiError::Api {
                status: 500,
                message: "the platform blew up".to_string(),
            });
        }
        self.deleted.lock().unwrap().push(guid.to_string());
        Ok(())
    }
}

/// Space quota repository double backed by a fixed list
pub struct FakeSpaceQuotaRepository {
    pub quotas: Vec<SpaceQuota>,
    pub org_guid: String,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl FakeSpaceQuotaRepository {
    pub fn with_quotas(
        quotas: Vec<SpaceQuota>,
        org_guid: &str,
        log: Arc<Mutex<Vec<String>>>,
    ) -> Self {
        Self {
            quotas,
            org_guid: org_guid.to_string(),
            log,
        }
    }
}

#[async_trait]
impl SpaceQuotaRepository for FakeSpaceQuotaRepository {
    async fn find_by_name_in_org(
        &self,
        name: &str,
        org_guid: &str,
    ) -> Result<SpaceQuota, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("quota.find_by_name_in_org {} {}", name, org_guid));
        if org_guid != self.org_guid {
            return Err(ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: name.to_string(),
            });
        }
        self.quotas
            .iter()
            .find(|quota| quota.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: name.to_string(),
            })
    }

    async fn find_by_guid(&self, guid: &str) -> Result<SpaceQuota, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("quota.find_by_guid {}", guid));
        self.quotas
            .iter()
            .find(|quota| quota.guid == guid)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                kind: ResourceKind::SpaceQuota,
                name: guid.to_string(),
            })
    }

    async fn list_in_org(&self, org_guid: &str) -> Result<Vec<SpaceQuota>, ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("quota.list_in_org {}", org_guid));
        if org_guid != self.org_guid {
            return Ok(Vec::new());
        }
        Ok(self.quotas.clone())
    }

    async fn assign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("quota.assign {} {}", quota_guid, space_guid));
        Ok(())
    }

    async fn unassign(&self, quota_guid: &str, space_guid: &str) -> Result<(), ApiError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("quota.unassign {} {}", quota_guid, space_guid));
        Ok(())
    }
}

/// Auth double accepting exactly one password
pub struct FakeAuthRepository {
    pub valid_password: String,
}

impl FakeAuthRepository {
    pub fn accepting(password: &str) -> Self {
        Self {
            valid_password: password.to_string(),
        }
    }
}

#[async_trait]
impl AuthRepository for FakeAuthRepository {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if password == self.valid_password {
            Ok(LoginResponse {
                access_token: "new-access-token".to_string(),
                username: username.to_string(),
            })
        } else {
            Err(ApiError::Api {
                status: 401,
                message: "Credentials were rejected, please try again.".to_string(),
            })
        }
    }
}
