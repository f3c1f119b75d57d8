//! Space command handlers.
//!
//! Space names are resolved against the control API at the moment they
//! run; a space GUID is never taken from the session. The targeted
//! organization's stored fields are used as-is, except by create and
//! delete, which re-resolve the effective org by name.

use crate::actions::targeted_organization;
use crate::api::{OrganizationRepository, SpaceQuotaRepository, SpaceRepository};
use crate::error::CliError;
use crate::model::Organization;
use crate::requirements::{self, check_all};
use crate::session::Session;
use crate::terminal::{entity_name, Terminal};
use tracing::trace;

/// The organization a space command works against: the -o override if
/// given, otherwise the targeted org. Either way the name is resolved
/// through the API on this very invocation.
async fn effective_organization<O: OrganizationRepository>(
    org_flag: Option<&str>,
    session: &Session,
    organizations: &O,
) -> Result<Organization, CliError> {
    let name = match org_flag {
        Some(name) => name.to_string(),
        None => targeted_organization(session)?.name,
    };
    Ok(organizations.find_by_name(&name).await?)
}

/// List the spaces of the targeted organization.
pub async fn list_spaces<S, T>(
    session: &mut Session,
    spaces: &S,
    terminal: &mut T,
) -> Result<(), CliError>
where
    S: SpaceRepository,
    T: Terminal,
{
    trace!("Listing spaces...");
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    terminal.say(&format!(
        "Getting spaces in org {} as {}...",
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    let space_list = spaces.list_in_org(&organization.guid).await?;
    terminal.ok();

    if space_list.is_empty() {
        terminal.say("No spaces found");
    } else {
        for space in &space_list {
            terminal.say(&space.name);
        }
    }

    Ok(())
}

/// Show one space of the targeted organization.
pub async fn show_space<S, Q, T>(
    space_name: &str,
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
    trace!("Showing space {}...", space_name);
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    terminal.say(&format!(
        "Getting info for space {} in org {} as {}...",
        entity_name(space_name),
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;
    let quota_name = match &space.space_quota_guid {
        Some(guid) => quotas.find_by_guid(guid).await?.name,
        None => "none".to_string(),
    };
    terminal.ok();

    terminal.say(&format!("name:         {}", space.name));
    terminal.say(&format!("guid:         {}", space.guid));
    terminal.say(&format!("org:          {}", organization.name));
    terminal.say(&format!("space quota:  {}", quota_name));

    Ok(())
}

/// Create a space in the effective organization.
pub async fn create_space<O, S, T>(
    space_name: &str,
    org_flag: Option<&str>,
    session: &mut Session,
    organizations: &O,
    spaces: &S,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    S: SpaceRepository,
    T: Terminal,
{
    trace!("Creating space {}...", space_name);
    let requirements = if org_flag.is_some() {
        requirements::LOGIN_REQUIRED
    } else {
        requirements::TARGETED_ORG_REQUIRED
    };
    check_all(session, requirements)?;

    let organization = effective_organization(org_flag, session, organizations).await?;

    terminal.say(&format!(
        "Creating space {} in org {} as {}...",
        entity_name(space_name),
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    let space = spaces.create(space_name, &organization.guid).await?;
    terminal.ok();
    terminal.say(&format!(
        "TIP: Use 'stratus target -o {} -s {}' to target the new space",
        organization.name, space.name
    ));

    Ok(())
}

/// Rename a space in the targeted organization.
///
/// When the renamed space is the targeted one the session is updated so
/// the target keeps pointing at it under the new name.
pub async fn rename_space<S, T>(
    space_name: &str,
    new_name: &str,
    session: &mut Session,
    spaces: &S,
    terminal: &mut T,
) -> Result<(), CliError>
where
    S: SpaceRepository,
    T: Terminal,
{
    trace!("Renaming space {} to {}...", space_name, new_name);
    check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
    let organization = targeted_organization(session)?;

    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;

    terminal.say(&format!(
        "Renaming space {} to {} in org {} as {}...",
        entity_name(&space.name),
        entity_name(new_name),
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    let renamed = spaces.rename(&space.guid, new_name).await?;
    terminal.ok();

    let renaming_targeted_space = session
        .space_fields()
        .map(|fields| fields.guid == renamed.guid)
        .unwrap_or(false);
    if renaming_targeted_space {
        session.set_space_fields(renamed.fields());
    }

    Ok(())
}

/// Delete a space after confirmation, in the effective organization.
///
/// Deleting the targeted space also clears the space target from the
/// session, matched by GUID so a differently-cased name still counts.
pub async fn delete_space<O, S, T>(
    space_name: &str,
    org_flag: Option<&str>,
    force: bool,
    session: &mut Session,
    organizations: &O,
    spaces: &S,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    S: SpaceRepository,
    T: Terminal,
{
    trace!("Deleting space {}...", space_name);
    let requirements = if org_flag.is_some() {
        requirements::LOGIN_REQUIRED
    } else {
        requirements::TARGETED_ORG_REQUIRED
    };
    check_all(session, requirements)?;

    let organization = effective_organization(org_flag, session, organizations).await?;
    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;

    if !force && !terminal.confirm_delete("space", space_name) {
        return Ok(());
    }

    terminal.say(&format!(
        "Deleting space {} in org {} as {}...",
        entity_name(space_name),
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    spaces.delete(&space.guid).await?;
    terminal.ok();

    let deleting_targeted_space = session
        .space_fields()
        .map(|fields| fields.guid == space.guid)
        .unwrap_or(false);
    if deleting_targeted_space {
        session.clear_space_fields();
        terminal.say("TIP: No space targeted, use 'stratus target -s SPACE' to target a space");
    }

    Ok(())
}

/// Delete a space addressed by org and space name, without prompting.
///
/// Both names come from the command line, so this works with nothing
/// targeted. Success is silent.
pub async fn delete_org_space<O, S, T>(
    org_name: &str,
    space_name: &str,
    session: &mut Session,
    organizations: &O,
    spaces: &S,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    S: SpaceRepository,
    T: Terminal,
{
    trace!("Deleting space {} in org {}...", space_name, org_name);
    check_all(session, requirements::LOGIN_REQUIRED)?;

    terminal.say(&format!(
        "Deleting space {} in org {}...",
        entity_name(space_name),
        entity_name(org_name)
    ));

    let organization = organizations.find_by_name(org_name).await?;
    let space = spaces
        .find_by_name_in_org(space_name, &organization.guid)
        .await?;
    spaces.delete(&space.guid).await?;

    Ok(())
}
