//! Space quota command definitions.

use crate::commands::params::{
    quota_name_argument, space_name_argument, COMMAND_SET_SPACE_QUOTA, COMMAND_SPACE_QUOTAS,
    COMMAND_UNSET_SPACE_QUOTA,
};
use clap::Command;

/// Create the space-quotas listing command.
pub fn space_quotas_command() -> Command {
    Command::new(COMMAND_SPACE_QUOTAS).about("List space quotas defined in the targeted org")
}

/// Create the set-space-quota command.
pub fn set_space_quota_command() -> Command {
    Command::new(COMMAND_SET_SPACE_QUOTA)
        .about("Assign a space quota to a space")
        .override_usage("stratus set-space-quota SPACE SPACE_QUOTA")
        .arg(space_name_argument())
        .arg(quota_name_argument())
}

/// Create the unset-space-quota command.
pub fn unset_space_quota_command() -> Command {
    Command::new(COMMAND_UNSET_SPACE_QUOTA)
        .about("Remove a space quota from a space")
        .override_usage("stratus unset-space-quota SPACE SPACE_QUOTA")
        .arg(space_name_argument())
        .arg(quota_name_argument())
}
