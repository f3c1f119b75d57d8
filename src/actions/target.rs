//! Target command handler.

use crate::actions::targeted_organization;
use crate::api::{OrganizationRepository, SpaceRepository};
use crate::error::CliError;
use crate::requirements::{self, check_all};
use crate::session::Session;
use crate::terminal::{entity_name, Terminal};
use tracing::trace;
use url::Url;

/// Show or change the targeted organization and space.
///
/// Flags are applied in order: a new org target first (which drops any
/// old space target), then the space, resolved inside whichever org is
/// targeted by that point. The final target is always printed. Each
/// flag carries its own preconditions; without flags this is a pure
/// display of the session and works logged out.
pub async fn target<O, S, T>(
    org_flag: Option<&str>,
    space_flag: Option<&str>,
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
    trace!("Targeting org {:?}, space {:?}...", org_flag, space_flag);

    if let Some(name) = org_flag {
        check_all(session, requirements::LOGIN_REQUIRED)?;
        let organization = organizations.find_by_name(name).await?;
        session.set_organization_fields(organization.fields());
        // a space target from the old org no longer applies
        session.clear_space_fields();
    }

    if let Some(name) = space_flag {
        // the org set just above counts as the targeted org
        check_all(session, requirements::TARGETED_ORG_REQUIRED)?;
        let organization = targeted_organization(session)?;
        let space = spaces
            .find_by_name_in_org(name, &organization.guid)
            .await?;
        session.set_space_fields(space.fields());
    }

    show_target(session, terminal);

    Ok(())
}

/// Print the current target: endpoint, user, org and space, with
/// placeholders for whatever is not set.
pub fn show_target<T: Terminal>(session: &Session, terminal: &mut T) {
    let api_url = session.api_url().map(Url::as_str).unwrap_or("none");
    terminal.say(&format!("API endpoint:  {}", api_url));
    terminal.say(&format!("User:          {}", entity_name(session.username())));
    match session.organization_fields() {
        Some(fields) => {
            terminal.say(&format!("Org:           {}", entity_name(&fields.name)));
        }
        None => {
            terminal.say("Org:           No org targeted, use 'stratus target -o ORG'");
        }
    }
    match session.space_fields() {
        Some(fields) => {
            terminal.say(&format!("Space:         {}", entity_name(&fields.name)));
        }
        None => {
            terminal.say("Space:         No space targeted, use 'stratus target -s SPACE'");
        }
    }
}
