//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names used across the
//! command modules, plus constructors for the arguments that several
//! commands share.

use clap::{Arg, ArgAction};
use url::Url;

// Auth commands
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_LOGOUT: &str = "logout";
pub const COMMAND_TARGET: &str = "target";

// Organization commands
pub const COMMAND_ORGS: &str = "orgs";
pub const COMMAND_ORG: &str = "org";
pub const COMMAND_CREATE_ORG: &str = "create-org";
pub const COMMAND_DELETE_ORG: &str = "delete-org";

// Space commands
pub const COMMAND_SPACES: &str = "spaces";
pub const COMMAND_SPACE: &str = "space";
pub const COMMAND_CREATE_SPACE: &str = "create-space";
pub const COMMAND_RENAME_SPACE: &str = "rename-space";
pub const COMMAND_DELETE_SPACE: &str = "delete-space";
pub const COMMAND_DELETE_ORG_SPACE: &str = "delete-org-space";

// Space quota commands
pub const COMMAND_SPACE_QUOTAS: &str = "space-quotas";
pub const COMMAND_SET_SPACE_QUOTA: &str = "set-space-quota";
pub const COMMAND_UNSET_SPACE_QUOTA: &str = "unset-space-quota";

// Parameter names
pub const PARAMETER_ORG: &str = "org";
pub const PARAMETER_SPACE: &str = "space";
pub const PARAMETER_NEW_NAME: &str = "new-name";
pub const PARAMETER_QUOTA: &str = "quota";
pub const PARAMETER_FORCE: &str = "force";
pub const PARAMETER_API_URL: &str = "api-url";
pub const PARAMETER_USERNAME: &str = "username";
pub const PARAMETER_PASSWORD: &str = "password";
pub const PARAMETER_VERBOSE: &str = "verbose";

/// Create the positional organization name argument.
pub fn org_name_argument() -> Arg {
    Arg::new(PARAMETER_ORG)
        .value_name("ORG")
        .required(true)
        .help("Organization name")
}

/// Create the positional space name argument.
pub fn space_name_argument() -> Arg {
    Arg::new(PARAMETER_SPACE)
        .value_name("SPACE")
        .required(true)
        .help("Space name")
}

/// Create the positional space quota name argument.
pub fn quota_name_argument() -> Arg {
    Arg::new(PARAMETER_QUOTA)
        .value_name("SPACE_QUOTA")
        .required(true)
        .help("Space quota name")
}

/// Create the organization override flag.
///
/// Commands that normally work against the targeted organization accept
/// this flag to name a different one for a single invocation.
pub fn org_flag_parameter() -> Arg {
    Arg::new(PARAMETER_ORG)
        .short('o')
        .long(PARAMETER_ORG)
        .num_args(1)
        .required(false)
        .value_name("ORG")
        .help("Organization containing the space (defaults to the targeted org)")
}

/// Create the force flag that skips the confirmation prompt.
pub fn force_parameter() -> Arg {
    Arg::new(PARAMETER_FORCE)
        .short('f')
        .long(PARAMETER_FORCE)
        .action(ArgAction::SetTrue)
        .required(false)
        .help("Force deletion without confirmation")
}

/// Create the API endpoint parameter.
pub fn api_url_parameter() -> Arg {
    Arg::new(PARAMETER_API_URL)
        .short('a')
        .long(PARAMETER_API_URL)
        .num_args(1)
        .required(false)
        .value_name("API_URL")
        .help("URL of the platform control API")
        .value_parser(clap::value_parser!(Url))
}

/// Create the username parameter.
pub fn username_parameter() -> Arg {
    Arg::new(PARAMETER_USERNAME)
        .short('u')
        .long(PARAMETER_USERNAME)
        .num_args(1)
        .required(false)
        .value_name("USERNAME")
        .help("Username (prompted for when omitted)")
}

/// Create the password parameter.
pub fn password_parameter() -> Arg {
    Arg::new(PARAMETER_PASSWORD)
        .short('p')
        .long(PARAMETER_PASSWORD)
        .num_args(1)
        .required(false)
        .value_name("PASSWORD")
        .help("Password (prompted for when omitted)")
}

/// Create the global verbose flag.
pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .required(false)
        .global(true)
        .help("Enable verbose logging")
}
