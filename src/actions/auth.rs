//! Login and logout command handlers.

use crate::api::AuthRepository;
use crate::error::CliError;
use crate::session::Session;
use crate::terminal::{entity_name, Terminal};
use tracing::trace;
use url::Url;

/// Log in against the given endpoint.
///
/// Credentials not passed as flags are prompted for. A successful login
/// replaces the stored token and username and drops both targets, since
/// the new user may not see the old ones.
pub async fn login<A, T>(
    api_url: Url,
    username_flag: Option<&str>,
    password_flag: Option<&str>,
    session: &mut Session,
    auth: &A,
    terminal: &mut T,
) -> Result<(), CliError>
where
    A: AuthRepository,
    T: Terminal,
{
    trace!("Logging in to {}...", api_url);
    terminal.say(&format!("API endpoint: {}", entity_name(api_url.as_str())));

    let username = match username_flag {
        Some(username) => username.to_string(),
        None => terminal.ask("Username:")?,
    };
    let password = match password_flag {
        Some(password) => password.to_string(),
        None => terminal.ask_secret("Password:")?,
    };

    terminal.say("Authenticating...");
    let login = auth.login(&username, &password).await?;

    session.set_api_url(api_url);
    session.set_access_token(login.access_token);
    session.set_username(login.username.clone());
    session.clear_organization_fields();
    session.clear_space_fields();

    terminal.ok();
    terminal.say(&format!("Logged in as {}", entity_name(&login.username)));
    terminal.say("TIP: Use 'stratus target -o ORG -s SPACE' to target an org and space");

    Ok(())
}

/// Log out, forgetting the token and both targets.
pub fn logout<T>(session: &mut Session, terminal: &mut T) -> Result<(), CliError>
where
    T: Terminal,
{
    trace!("Logging out...");
    if session.is_logged_in() {
        terminal.say(&format!(
            "Logging out {}...",
            entity_name(session.username())
        ));
    } else {
        terminal.say("Logging out...");
    }

    session.clear_session();
    terminal.ok();

    Ok(())
}
