//! Preconditions checked before a command handler does any work
//!
//! Each command declares the requirements it needs as a static slice.
//! They are evaluated against the local session only, in declaration
//! order, and the first failure aborts the command before any network
//! traffic or prompting happens.

use crate::session::Session;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("Not logged in. Use 'stratus login' to log in.")]
    NotLoggedIn,
    #[error("No org targeted. Use 'stratus target -o ORG' to target an org.")]
    NoOrgTargeted,
}

/// A single precondition a command can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The session holds an access token
    LoggedIn,
    /// The session has an organization targeted
    TargetedOrg,
}

impl Requirement {
    pub fn check(&self, session: &Session) -> Result<(), RequirementError> {
        match self {
            Requirement::LoggedIn => {
                if session.is_logged_in() {
                    Ok(())
                } else {
                    Err(RequirementError::NotLoggedIn)
                }
            }
            Requirement::TargetedOrg => {
                if session.organization_fields().is_some() {
                    Ok(())
                } else {
                    Err(RequirementError::NoOrgTargeted)
                }
            }
        }
    }
}

/// Commands that only need a logged in user
pub const LOGIN_REQUIRED: &[Requirement] = &[Requirement::LoggedIn];

/// Commands that work against the targeted organization
pub const TARGETED_ORG_REQUIRED: &[Requirement] =
    &[Requirement::LoggedIn, Requirement::TargetedOrg];

/// Check every requirement in order, stopping at the first failure
pub fn check_all(session: &Session, requirements: &[Requirement]) -> Result<(), RequirementError> {
    for requirement in requirements {
        requirement.check(session)?;
    }
    Ok(())
}
