//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using
//! the clap crate. Every verb is a flat subcommand, one file per
//! resource family.

use clap::{ArgMatches, Command};

// Import all submodules
pub mod auth;
pub mod org;
pub mod params;
pub mod quota;
pub mod space;
pub mod target;

// Re-export the names the dispatcher matches on
pub use params::{
    COMMAND_CREATE_ORG, COMMAND_CREATE_SPACE, COMMAND_DELETE_ORG, COMMAND_DELETE_ORG_SPACE,
    COMMAND_DELETE_SPACE, COMMAND_LOGIN, COMMAND_LOGOUT, COMMAND_ORG, COMMAND_ORGS,
    COMMAND_RENAME_SPACE, COMMAND_SET_SPACE_QUOTA, COMMAND_SPACE, COMMAND_SPACES,
    COMMAND_SPACE_QUOTAS, COMMAND_TARGET, COMMAND_UNSET_SPACE_QUOTA, PARAMETER_API_URL,
    PARAMETER_FORCE, PARAMETER_NEW_NAME, PARAMETER_ORG, PARAMETER_PASSWORD, PARAMETER_QUOTA,
    PARAMETER_SPACE, PARAMETER_USERNAME, PARAMETER_VERBOSE,
};

/// Create and configure all CLI commands and their arguments.
///
/// This function defines the entire command-line interface for the
/// stratus CLI by combining the modularized command definitions.
///
/// # Returns
///
/// An `ArgMatches` instance containing the parsed command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::verbose_parameter())
        // Add all the modularized command groups
        .subcommand(auth::login_command())
        .subcommand(auth::logout_command())
        .subcommand(target::target_command())
        .subcommand(org::orgs_command())
        .subcommand(org::org_command())
        .subcommand(org::create_org_command())
        .subcommand(org::delete_org_command())
        .subcommand(space::spaces_command())
        .subcommand(space::space_command())
        .subcommand(space::create_space_command())
        .subcommand(space::rename_space_command())
        .subcommand(space::delete_space_command())
        .subcommand(space::delete_org_space_command())
        .subcommand(quota::space_quotas_command())
        .subcommand(quota::set_space_quota_command())
        .subcommand(quota::unset_space_quota_command())
        .get_matches()
}
