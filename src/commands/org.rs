//! Organization command definitions.

use crate::commands::params::{
    force_parameter, org_name_argument, COMMAND_CREATE_ORG, COMMAND_DELETE_ORG, COMMAND_ORG,
    COMMAND_ORGS,
};
use clap::Command;

/// Create the orgs listing command.
pub fn orgs_command() -> Command {
    Command::new(COMMAND_ORGS).about("List all organizations you can see")
}

/// Create the single organization display command.
pub fn org_command() -> Command {
    Command::new(COMMAND_ORG)
        .about("Show organization info")
        .arg(org_name_argument())
}

/// Create the create-org command.
pub fn create_org_command() -> Command {
    Command::new(COMMAND_CREATE_ORG)
        .about("Create a new organization")
        .arg(org_name_argument())
}

/// Create the delete-org command.
pub fn delete_org_command() -> Command {
    Command::new(COMMAND_DELETE_ORG)
        .about("Delete an organization")
        .override_usage("stratus delete-org [-f] ORG")
        .arg(org_name_argument())
        .arg(force_parameter())
}
