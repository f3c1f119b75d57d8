//! Process exit codes for the stratus binary
//!
//! Every error surfaced to the user maps onto one of these codes so
//! that scripting and automation can branch on the kind of failure.

/// Exit codes reported when a command fails
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliExitCode {
    /// Command line usage error (64) - User input error
    UsageError = 64,

    /// Data format error (65) - Response or file data was malformed
    DataError = 65,

    /// Addressee unknown (67) - A named resource does not exist
    NotFound = 67,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,

    /// Configuration error (78) - Session or configuration file issue
    ConfigError = 78,

    /// Authentication error (100) - Login or token issues
    AuthError = 100,

    /// Network error (101) - Connection or communication issues
    NetworkError = 101,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl CliExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code.code()
    }
}
