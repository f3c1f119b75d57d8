//! Command handlers.
//!
//! Each handler takes the already-parsed inputs for one verb, the
//! mutable session, the repositories it reads or mutates and the
//! terminal. Handlers never construct their own collaborators, which is
//! what lets the tests drive them with in-memory fakes.

use crate::error::CliError;
use crate::model::OrganizationFields;
use crate::requirements::RequirementError;
use crate::session::Session;

pub mod auth;
pub mod orgs;
pub mod quotas;
pub mod spaces;
pub mod target;

#[cfg(test)]
pub mod testsupport;

/// The organization currently targeted in the session.
///
/// Only called after a `TargetedOrg` requirement has passed, so the
/// error arm is a safety net rather than an expected path.
pub(crate) fn targeted_organization(session: &Session) -> Result<OrganizationFields, CliError> {
    session
        .organization_fields()
        .cloned()
        .ok_or(CliError::Requirement(RequirementError::NoOrgTargeted))
}
