//! Error mapping guide:
//! - Map io::ErrorKind::NotFound to exit code 127; all others to 1.
//! - Configuration problems never abort a run; callers log and fall back.
use std::fmt;
use std::io;

/// Map an io::Error to a process exit code:
/// - 127 for NotFound (command not found)
/// - 1 for all other errors
pub fn exit_code_for_io_error(e: &io::Error) -> u8 {
    if e.kind() == io::ErrorKind::NotFound {
        127
    } else {
        1
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBlacklist {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBlacklist { pattern, source } => {
                write!(f, "invalid STDERRED_BLACKLIST pattern '{pattern}': {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidBlacklist { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub enum StderredError {
    Io(io::Error),
    Config(ConfigError),
    Message(String),
}

impl fmt::Display for StderredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StderredError::Io(e) => write!(f, "{e}"),
            StderredError::Config(e) => write!(f, "{e}"),
            StderredError::Message(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for StderredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StderredError::Io(e) => Some(e),
            StderredError::Config(e) => Some(e),
            StderredError::Message(_) => None,
        }
    }
}

impl From<io::Error> for StderredError {
    fn from(e: io::Error) -> Self {
        StderredError::Io(e)
    }
}

impl From<ConfigError> for StderredError {
    fn from(e: ConfigError) -> Self {
        StderredError::Config(e)
    }
}

/// Convert StderredError to exit code (parity with io::Error mapping).
pub fn exit_code_for_error(e: &StderredError) -> u8 {
    match e {
        StderredError::Io(ioe) => exit_code_for_io_error(ioe),
        StderredError::Config(_) | StderredError::Message(_) => 1,
    }
}
