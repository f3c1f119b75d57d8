//! Local session state for the stratus CLI
//!
//! The session file remembers the API endpoint, the access token of the
//! logged in user and the currently targeted organization and space. It
//! lives in the platform configuration directory (or wherever
//! `STRATUS_CONFIG_DIR` points) and is rewritten after every command
//! that completes successfully.

use crate::model::{OrganizationFields, SpaceFields};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use serde_yaml;
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "stratus";
pub const DEFAULT_SESSION_FILE_NAME: &str = "session.yml";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load session data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write session data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
}

/// Everything the CLI remembers between invocations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organization: Option<OrganizationFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    space: Option<SpaceFields>,
}

impl Session {
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The username recorded at login, or an empty string when nobody
    /// is logged in
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn organization_fields(&self) -> Option<&OrganizationFields> {
        self.organization.as_ref()
    }

    pub fn space_fields(&self) -> Option<&SpaceFields> {
        self.space.as_ref()
    }

    pub fn set_api_url(&mut self, api_url: Url) {
        self.api_url = Some(api_url);
    }

    pub fn set_access_token(&mut self, access_token: String) {
        self.access_token = Some(access_token);
    }

    pub fn set_username(&mut self, username: String) {
        self.username = Some(username);
    }

    pub fn set_organization_fields(&mut self, fields: OrganizationFields) {
        self.organization = Some(fields);
    }

    pub fn set_space_fields(&mut self, fields: SpaceFields) {
        self.space = Some(fields);
    }

    pub fn clear_organization_fields(&mut self) {
        self.organization = None;
    }

    pub fn clear_space_fields(&mut self) {
        self.space = None;
    }

    /// Forget the login and both targets, keeping the API endpoint so
    /// the next login does not have to repeat it
    pub fn clear_session(&mut self) {
        self.access_token = None;
        self.username = None;
        self.organization = None;
        self.space = None;
    }

    pub fn get_default_session_file_path() -> Result<PathBuf, SessionError> {
        // Check for STRATUS_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var("STRATUS_CONFIG_DIR") {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_SESSION_FILE_NAME);
            return Ok(config_path);
        }

        let configuration_directory = config_dir();
        match configuration_directory {
            Some(configuration_directory) => {
                let mut default_session_file_path = configuration_directory;
                default_session_file_path.push(DEFAULT_APPLICATION_ID);
                default_session_file_path.push(DEFAULT_SESSION_FILE_NAME);

                Ok(default_session_file_path)
            }
            None => Err(SessionError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default session, creating an empty one if none exists
    /// This is more user-friendly for first-time users
    pub fn load_or_create_default() -> Result<Session, SessionError> {
        let default_file_path = Session::get_default_session_file_path()?;
        debug!(
            "Loading or creating session from {}...",
            default_file_path.display()
        );

        // Try to load the existing session
        match Session::load_from_file(default_file_path.clone()) {
            Ok(session) => Ok(session),
            Err(e) => {
                // Check if this is a "file not found" error
                match &e {
                    SessionError::FailedToLoadData { cause } => {
                        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
                            if io_err.kind() == std::io::ErrorKind::NotFound {
                                debug!("Session file not found, starting a new session");
                                let default_session = Session::default();

                                // Try to save the new session
                                match default_session.save(&default_file_path) {
                                    Ok(()) => {
                                        debug!("New session file created successfully");
                                        Ok(default_session)
                                    }
                                    Err(save_error) => {
                                        // If we can't save, return the original error with more context
                                        Err(SessionError::FailedToLoadData {
                                            cause: Box::new(std::io::Error::other(format!(
                                                "Session file not found and failed to create a new one. Tried to create at: {:?}. Error: {}",
                                                default_file_path, save_error
                                            ))),
                                        })
                                    }
                                }
                            } else {
                                Err(e)
                            }
                        } else {
                            Err(e)
                        }
                    }
                    _ => Err(e),
                }
            }
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Session, SessionError> {
        match fs::read_to_string(path) {
            Ok(session) => {
                let session = serde_yaml::from_str(&session);
                match session {
                    Ok(session) => Ok(session),
                    Err(cause) => Err(SessionError::FailedToLoadData {
                        cause: Box::new(cause),
                    }),
                }
            }
            Err(cause) => Err(SessionError::FailedToLoadData {
                cause: Box::new(cause),
            }),
        }
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), SessionError> {
        match serde_yaml::to_writer(writer, &self.clone()) {
            Ok(()) => Ok(()),
            Err(e) => Err(SessionError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), SessionError> {
        // first check if the parent directory exists and try to create it if not
        let session_directory = path.parent();
        match session_directory {
            Some(path) => {
                // this operation only executes if the directory does not exist
                match fs::create_dir_all(path) {
                    Ok(()) => (),
                    Err(_) => return Err(SessionError::FailedToFindConfigurationDirectory),
                }
            }
            None => return Err(SessionError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path);
        match file {
            Ok(file) => {
                let writer: Box<dyn Write> = Box::new(file);
                Ok(self.write(writer)?)
            }
            Err(e) => Err(SessionError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save_to_default(&self) -> Result<(), SessionError> {
        self.save(&Self::get_default_session_file_path()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_session() -> Session {
        let mut session = Session::default();
        session.set_api_url(Url::parse("https://api.stratus.example.com").unwrap());
        session.set_access_token("access-token".to_string());
        session.set_username("my-user".to_string());
        session.set_organization_fields(OrganizationFields {
            guid: "my-org-guid".to_string(),
            name: "my-org".to_string(),
        });
        session.set_space_fields(SpaceFields {
            guid: "my-space-guid".to_string(),
            name: "my-space".to_string(),
        });
        session
    }

    #[test]
    fn test_default_session_is_logged_out() {
        let session = Session::default();

        assert!(!session.is_logged_in());
        assert_eq!(session.username(), "");
        assert_eq!(session.api_url(), None);
        assert_eq!(session.organization_fields(), None);
        assert_eq!(session.space_fields(), None);
    }

    #[test]
    fn test_clear_session_keeps_api_url() {
        let mut session = populated_session();

        session.clear_session();

        assert!(!session.is_logged_in());
        assert_eq!(session.username(), "");
        assert_eq!(session.organization_fields(), None);
        assert_eq!(session.space_fields(), None);
        assert_eq!(
            session.api_url().map(Url::as_str),
            Some("https://api.stratus.example.com/")
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join(DEFAULT_SESSION_FILE_NAME);

        let session = populated_session();
        session.save(&path).unwrap();

        let loaded = Session::load_from_file(path).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_save_creates_missing_parent_directory() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory
            .path()
            .join("nested")
            .join(DEFAULT_SESSION_FILE_NAME);

        populated_session().save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("does-not-exist.yml");

        let result = Session::load_from_file(path);

        assert!(matches!(
            result,
            Err(SessionError::FailedToLoadData { .. })
        ));
    }
}
