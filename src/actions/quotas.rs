//! Space quota command handlers.
//!
//! Quotas are defined per organization; assigning one to a space links
//! the two by GUID on the platform side.

use crate::actions::targeted_organization;
use crate::api::{SpaceQuotaRepository, SpaceRepository};
use crate::error::CliError;
use crate::requirements::{self, check_all};
use crate::session::Session;
use crate::terminal::{entity_name, Terminal};
use tracing::trace;

/// List the space quotas defined in the targeted organization.
pub async fn list_space_quotas<Q, T>(
    session: &mut Session,
    quotas: &Q,
    terminal: &mut T,
) -> Result<(), CliError>
where
    Q: SpaceQuotaRepository,
    T: Terminal,
{
    trace!("Listing space quotas...");
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    terminal.say(&format!(
        "Getting space quotas in org {} as {}...",
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    let quota_list = quotas.list_in_org(&organization.guid).await?;
    terminal.ok();

    if quota_list.is_empty() {
        terminal.say("No space quotas found");
    } else {
        for quota in &quota_list {
            terminal.say(&format!(
                "{:<20} {}",
                quota.name,
                quota.formatted_memory_limit()
            ));
        }
    }

    Ok(())
}

/// Assign a named quota to a named space, both in the targeted org.
pub async fn set_space_quota<S, Q, T>(
    space_name: &str,
    quota_name: &str,
    session: &mut Session,
    spaces: &S,
    quotas: &Q,
    terminal: &mut T,
) -> Result<(), CliError>
where
    S: SpaceRepository,
    Q: SpaceQuotaRepository,
    T: Terminal,
{
    trace!(
        "Assigning space quota {} to space {}...",
        quota_name,
        space_name
    );
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;
    let quota = quotas
        .find_by_name_in_org(quota_name, &organization.guid)
        .await?;

    terminal.say(&format!(
        "Assigning space quota {} to space {} as {}...",
        entity_name(&quota.name),
        entity_name(&space.name),
        entity_name(session.username())
    ));

    quotas.assign(&quota.guid, &space.guid).await?;
    terminal.ok();

    Ok(())
}

/// Remove a named quota from a named space, both in the targeted org.
pub async fn unset_space_quota<S, Q, T>(
    space_name: &str,
    quota_name: &str,
    session: &mut Session,
    spaces: &S,
    quotas: &Q,
    terminal: &mut T,
) -> Result<(), CliError>
where
    S: SpaceRepository,
    Q: SpaceQuotaRepository,
    T: Terminal,
{
    trace!(
        "Unassigning space quota {} from space {}...",
        quota_name,
        space_name
    );
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;
    let quota = quotas
        .find_by_name_in_org(quota_name, &organization.guid)
        .await?;

    terminal.say(&format!(
        "Unassigning space quota {} from space {} as {}...",
        entity_name(&quota.name),
        entity_name(&space.name),
        entity_name(session.username())
    ));

    quotas.unassign(&quota.guid, &space.guid).await?;
    terminal.ok();

    Ok(())
}
