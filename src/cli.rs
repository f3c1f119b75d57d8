//! Maps parsed command lines onto the action handlers.
//!
//! This is the only place that touches `ArgMatches`; handlers receive
//! plain values. The live API client is built from the session here and
//! handed to each handler as the repositories it needs.

use clap::ArgMatches;
use stratus::actions;
use stratus::api::StratusApiClient;
use stratus::commands::{
    COMMAND_CREATE_ORG, COMMAND_CREATE_SPACE, COMMAND_DELETE_ORG, COMMAND_DELETE_ORG_SPACE,
    COMMAND_DELETE_SPACE, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_ORG, COMMAND_ORGS,
    COMMAND_RENAME_SPACE, COMMAND_SET_SPACE_QUOTA, COMMAND_SPACE, COMMAND_SPACES,
    COMMAND_SPACE_QUOTAS, COMMAND_TARGET, COMMAND_UNSET_SPACE_QUOTA, PARAMETER_API_URL,
    PARAMETER_FORCE, PARAMETER_NEW_NAME, PARAMETER_ORG, PARAMETER_PASSWORD, PARAMETER_QUOTA,
    PARAMETER_SPACE, PARAMETER_USERNAME,
};
use stratus::error::CliError;
use stratus::session::Session;
use stratus::terminal::Terminal;
use url::Url;

fn extract_subcommand_name(matches: &ArgMatches) -> String {
    let name = match matches.subcommand() {
        Some((name, _)) => name,
        None => "unknown",
    };

    name.to_string()
}

/// Build the live client from the session, with the token when present
fn api_client(session: &Session) -> Result<StratusApiClient, CliError> {
    let api_url = session.api_url().ok_or(CliError::NoApiEndpoint)?;
    let mut client = StratusApiClient::new(api_url);
    if let Some(token) = session.access_token() {
        client = client.with_access_token(token.to_string());
    }
    Ok(client)
}

pub async fn execute_command<T: Terminal>(
    matches: &ArgMatches,
    session: &mut Session,
    terminal: &mut T,
) -> Result<(), CliError> {
    match matches.subcommand() {
        // Authentication
        Some((COMMAND_LOGIN, sub_matches)) => {
            let api_url = sub_matches
                .get_one::<Url>(PARAMETER_API_URL)
                .cloned()
                .or_else(|| session.api_url().cloned())
                .ok_or(CliError::NoApiEndpoint)?;
            let username = sub_matches
                .get_one::<String>(PARAMETER_USERNAME)
                .map(String::as_str);
            let password = sub_matches
                .get_one::<String>(PARAMETER_PASSWORD)
                .map(String::as_str);
            let client = StratusApiClient::new(&api_url);
            actions::auth::login(api_url, username, password, session, &client, terminal).await
        }
        Some((COMMAND_LOGOUT, _)) => actions::auth::logout(session, terminal),
        Some((COMMAND_TARGET, sub_matches)) => {
            let org = sub_matches
                .get_one::<String>(PARAMETER_ORG)
                .map(String::as_str);
            let space = sub_matches
                .get_one::<String>(PARAMETER_SPACE)
                .map(String::as_str);
            if org.is_none() && space.is_none() {
                // a bare target only reads the session
                actions::target::show_target(session, terminal);
                Ok(())
            } else {
                let client = api_client(session)?;
                actions::target::target(org, space, session, &client, &client, terminal).await
            }
        }

        // Organizations
        Some((COMMAND_ORGS, _)) => {
            let client = api_client(session)?;
            actions::orgs::list_orgs(session, &client, terminal).await
        }
        Some((COMMAND_ORG, sub_matches)) => {
            // unwrap is safe, because the argument is mandatory and clap enforces it before this point
            let org_name = sub_matches.get_one::<String>(PARAMETER_ORG).unwrap();
            let client = api_client(session)?;
            actions::orgs::show_org(org_name, session, &client, &client, terminal).await
        }
        Some((COMMAND_CREATE_ORG, sub_matches)) => {
            let org_name = sub_matches.get_one::<String>(PARAMETER_ORG).unwrap();
            let client = api_client(session)?;
            actions::orgs::create_org(org_name, session, &client, terminal).await
        }
        Some((COMMAND_DELETE_ORG, sub_matches)) => {
            let org_name = sub_matches.get_one::<String>(PARAMETER_ORG).unwrap();
            let force = sub_matches.get_flag(PARAMETER_FORCE);
            let client = api_client(session)?;
            actions::orgs::delete_org(org_name, force, session, &client, terminal).await
        }

        // Spaces
        Some((COMMAND_SPACES, _)) => {
            let client = api_client(session)?;
            actions::spaces::list_spaces(session, &client, terminal).await
        }
        Some((COMMAND_SPACE, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let client = api_client(session)?;
            actions::spaces::show_space(space_name, session, &client, &client, terminal).await
        }
        Some((COMMAND_CREATE_SPACE, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let org = sub_matches
                .get_one::<String>(PARAMETER_ORG)
                .map(String::as_str);
            let client = api_client(session)?;
            actions::spaces::create_space(space_name, org, session, &client, &client, terminal)
                .await
        }
        Some((COMMAND_RENAME_SPACE, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let new_name = sub_matches.get_one::<String>(PARAMETER_NEW_NAME).unwrap();
            let client = api_client(session)?;
            actions::spaces::rename_space(space_name, new_name, session, &client, terminal).await
        }
        Some((COMMAND_DELETE_SPACE, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let org = sub_matches
                .get_one::<String>(PARAMETER_ORG)
                .map(String::as_str);
            let force = sub_matches.get_flag(PARAMETER_FORCE);
            let client = api_client(session)?;
            actions::spaces::delete_space(
                space_name, org, force, session, &client, &client, terminal,
            )
            .await
        }
        Some((COMMAND_DELETE_ORG_SPACE, sub_matches)) => {
            let org_name = sub_matches.get_one::<String>(PARAMETER_ORG).unwrap();
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let client = api_client(session)?;
            actions::spaces::delete_org_space(
                org_name, space_name, session, &client, &client, terminal,
            )
            .await
        }

        // Space quotas
        Some((COMMAND_SPACE_QUOTAS, _)) => {
            let client = api_client(session)?;
            actions::quotas::list_space_quotas(session, &client, terminal).await
        }
        Some((COMMAND_SET_SPACE_QUOTA, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let quota_name = sub_matches.get_one::<String>(PARAMETER_QUOTA).unwrap();
            let client = api_client(session)?;
            actions::quotas::set_space_quota(
                space_name, quota_name, session, &client, &client, terminal,
            )
            .await
        }
        Some((COMMAND_UNSET_SPACE_QUOTA, sub_matches)) => {
            let space_name = sub_matches.get_one::<String>(PARAMETER_SPACE).unwrap();
            let quota_name = sub_matches.get_one::<String>(PARAMETER_QUOTA).unwrap();
            let client = api_client(session)?;
            actions::quotas::unset_space_quota(
                space_name, quota_name, session, &client, &client, terminal,
            )
            .await
        }

        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            matches,
        ))),
    }
}
