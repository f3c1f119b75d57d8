//! Target command definition.

use crate::commands::params::{org_flag_parameter, COMMAND_TARGET, PARAMETER_SPACE};
use clap::{Arg, Command};

/// Create the target command.
///
/// Without flags the command shows the current target; with flags it
/// re-targets the named organization and/or space.
pub fn target_command() -> Command {
    Command::new(COMMAND_TARGET)
        .about("Show or set the targeted org and space")
        .override_usage("stratus target [-o ORG] [-s SPACE]")
        .arg(org_flag_parameter().help("Organization to target"))
        .arg(
            Arg::new(PARAMETER_SPACE)
                .short('s')
                .long(PARAMETER_SPACE)
                .num_args(1)
                .required(false)
                .value_name("SPACE")
                .help("Space to target"),
        )
}
