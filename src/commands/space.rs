//! Space command definitions.

use crate::commands::params::{
    force_parameter, org_flag_parameter, org_name_argument, space_name_argument,
    COMMAND_CREATE_SPACE, COMMAND_DELETE_ORG_SPACE, COMMAND_DELETE_SPACE, COMMAND_RENAME_SPACE,
    COMMAND_SPACE, COMMAND_SPACES, PARAMETER_NEW_NAME,
};
use clap::{Arg, Command};

/// Create the spaces listing command.
pub fn spaces_command() -> Command {
    Command::new(COMMAND_SPACES).about("List all spaces in the targeted org")
}

/// Create the single space display command.
pub fn space_command() -> Command {
    Command::new(COMMAND_SPACE)
        .about("Show space info")
        .arg(space_name_argument())
}

/// Create the create-space command.
pub fn create_space_command() -> Command {
    Command::new(COMMAND_CREATE_SPACE)
        .about("Create a new space")
        .override_usage("stratus create-space [-o ORG] SPACE")
        .arg(space_name_argument())
        .arg(org_flag_parameter())
}

/// Create the rename-space command.
pub fn rename_space_command() -> Command {
    Command::new(COMMAND_RENAME_SPACE)
        .about("Rename a space in the targeted org")
        .override_usage("stratus rename-space SPACE NEW_SPACE")
        .arg(space_name_argument())
        .arg(
            Arg::new(PARAMETER_NEW_NAME)
                .value_name("NEW_SPACE")
                .required(true)
                .help("New space name"),
        )
}

/// Create the delete-space command.
pub fn delete_space_command() -> Command {
    Command::new(COMMAND_DELETE_SPACE)
        .about("Delete a space")
        .override_usage("stratus delete-space [-o ORG] [-f] SPACE")
        .arg(space_name_argument())
        .arg(org_flag_parameter())
        .arg(force_parameter())
}

/// Create the delete-org-space command.
///
/// Both names are positional, so this one works without any session
/// target and never prompts.
pub fn delete_org_space_command() -> Command {
    Command::new(COMMAND_DELETE_ORG_SPACE)
        .about("Delete a space in a named organization")
        .override_usage("stratus delete-org-space ORG SPACE")
        .arg(org_name_argument())
        .arg(space_name_argument())
}
