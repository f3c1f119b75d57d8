use thiserror::Error;

use crate::{
    api::ApiError, exit_codes::CliExitCode, requirements::RequirementError, session::SessionError,
    terminal::TerminalError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),
    /// A command precondition was not met
    #[error("{0}")]
    Requirement(#[from] RequirementError),
    /// The control API call failed
    #[error("{0}")]
    Api(#[from] ApiError),
    /// The session file could not be read or written
    #[error("{0}")]
    Session(#[from] SessionError),
    /// Prompting the user failed
    #[error("{0}")]
    Terminal(#[from] TerminalError),
    /// No API endpoint is known yet
    #[error("No API endpoint set. Use 'stratus login -a API_URL' to log in to a platform endpoint.")]
    NoApiEndpoint,
}

impl CliError {
    /// Get the appropriate exit code for this error
    ///
    /// Usage problems map to the sysexits range, remote failures to the
    /// application-specific codes above 100.
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => CliExitCode::UsageError,
            CliError::Requirement(RequirementError::NotLoggedIn) => CliExitCode::AuthError,
            CliError::Requirement(RequirementError::NoOrgTargeted) => CliExitCode::UsageError,
            CliError::Api(ApiError::NotFound { .. }) => CliExitCode::NotFound,
            CliError::Api(ApiError::Http(_)) => CliExitCode::NetworkError,
            CliError::Api(ApiError::Json(_)) => CliExitCode::DataError,
            CliError::Api(ApiError::Api { status: 401, .. }) => CliExitCode::AuthError,
            CliError::Api(ApiError::Api { .. }) => CliExitCode::ApiError,
            CliError::Session(_) => CliExitCode::ConfigError,
            CliError::Terminal(_) => CliExitCode::SoftwareError,
            CliError::NoApiEndpoint => CliExitCode::ConfigError,
        }
    }
}
