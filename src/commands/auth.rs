//! Login and logout command definitions.

use crate::commands::params::{
    api_url_parameter, password_parameter, username_parameter, COMMAND_LOGIN, COMMAND_LOGOUT,
};
use clap::Command;

/// Create the login command.
pub fn login_command() -> Command {
    Command::new(COMMAND_LOGIN)
        .about("Log in to the platform")
        .override_usage("stratus login [-a API_URL] [-u USERNAME] [-p PASSWORD]")
        .arg(api_url_parameter())
        .arg(username_parameter())
        .arg(password_parameter())
}

/// Create the logout command.
pub fn logout_command() -> Command {
    Command::new(COMMAND_LOGOUT).about("Log out and forget the stored token")
}
