//! Organization command handlers.

use crate::api::{OrganizationRepository, SpaceRepository};
use crate::error::CliError;
use crate::requirements::{self, check_all};
use crate::session::Session;
use crate::terminal::{entity_name, Terminal};
use tracing::trace;

/// List every organization visible to the logged in user.
pub async fn list_orgs<O, T>(
    session: &mut Session,
    organizations: &O,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    T: Terminal,
{
    trace!("Listing organizations...");
    check_all(session, requirements::LOGIN_REQUIRED)?;

    terminal.say(&format!(
        "Getting orgs as {}...",
        entity_name(session.username())
    ));

    let organization_list = organizations.list().await?;
    terminal.ok();

    if organization_list.is_empty() {
        terminal.say("No orgs found");
    } else {
        for organization in &organization_list {
            terminal.say(&organization.name);
        }
    }

    Ok(())
}

/// Show one organization and the names of its spaces.
pub async fn show_org<O, S, T>(
    org_name: &str,
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
    trace!("Showing organization {}...", org_name);
    check_all(session, requirements::LOGIN_REQUIRED)?;

    terminal.say(&format!(
        "Getting info for org {} as {}...",
        entity_name(org_name),
        entity_name(session.username())
    ));

    let organization = organizations.find_by_name(org_name).await?;
    let space_list = spaces.list_in_org(&organization.guid).await?;
    terminal.ok();

    let space_names = if space_list.is_empty() {
        "none".to_string()
    } else {
        space_list
            .iter()
            .map(|space| space.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    terminal.say(&format!("name:    {}", organization.name));
    terminal.say(&format!("guid:    {}", organization.guid));
    terminal.say(&format!("spaces:  {}", space_names));

    Ok(())
}

/// Create a new organization.
pub async fn create_org<O, T>(
    org_name: &str,
    session: &mut Session,
    organizations: &O,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    T: Terminal,
{
    trace!("Creating organization {}...", org_name);
    check_all(session, requirements::LOGIN_REQUIRED)?;

    terminal.say(&format!(
        "Creating org {} as {}...",
        entity_name(org_name),
        entity_name(session.username())
    ));

    let organization = organizations.create(org_name).await?;
    terminal.ok();
    terminal.say(&format!(
        "TIP: Use 'stratus target -o {}' to target the new org",
        organization.name
    ));

    Ok(())
}

/// Delete an organization after confirmation.
///
/// Deleting the targeted organization clears both the org and the
/// space target, matched by GUID.
pub async fn delete_org<O, T>(
    org_name: &str,
    force: bool,
    session: &mut Session,
    organizations: &O,
    terminal: &mut T,
) -> Result<(), CliError>
where
    O: OrganizationRepository,
    T: Terminal,
{
    trace!("Deleting organization {}...", org_name);
    check_all(session, requirements::LOGIN_REQUIRED)?;

    let organization = organizations.find_by_name(org_name).await?;

    if !force && !terminal.confirm_delete("org", &organization.name) {
        return Ok(());
    }

    terminal.say(&format!(
        "Deleting org {} as {}...",
        entity_name(&organization.name),
        entity_name(session.username())
    ));

    organizations.delete(&organization.guid).await?;
    terminal.ok();

    let deleting_targeted_org = session
        .organization_fields()
        .map(|fields| fields.guid == organization.guid)
        .unwrap_or(false);
    if deleting_targeted_org {
        session.clear_organization_fields();
        session.clear_space_fields();
        terminal.say("TIP: No org targeted, use 'stratus target -o ORG' to target an org");
    }

    Ok(())
}
