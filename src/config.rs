//! Environment configuration for the stderr painter.
//!
//! - STDERRED_ESC_CODE: escape sequence written before each stderr chunk
//! - STDERRED_BLACKLIST: regex matched against the program's base name;
//!   a match makes the environment invalid for painting
//! - STDERRED_COLOR: auto|always|never
//! - NO_COLOR: presence disables color (https://no-color.org/)

use std::path::Path;

use regex::Regex;

use crate::color::{parse_color_mode, ColorMode, DEFAULT_ESC_CODE};
use crate::errors::ConfigError;

pub const ENV_ESC_CODE: &str = "STDERRED_ESC_CODE";
pub const ENV_BLACKLIST: &str = "STDERRED_BLACKLIST";
pub const ENV_COLOR: &str = "STDERRED_COLOR";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone)]
pub struct Config {
    pub esc_code: String,
    pub blacklist: Option<Regex>,
    pub color_mode: Option<ColorMode>,
    pub no_color: bool,
    pub program: String,
}

impl Config {
    /// Read the process environment for `program`.
    pub fn from_env(program: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok(), program)
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, program: &str) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let esc_code = lookup(ENV_ESC_CODE)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ESC_CODE.to_string());

        let blacklist = match lookup(ENV_BLACKLIST).filter(|s| !s.trim().is_empty()) {
            Some(pattern) => match Regex::new(&pattern) {
                Ok(re) => Some(re),
                Err(source) => return Err(ConfigError::InvalidBlacklist { pattern, source }),
            },
            None => None,
        };

        let color_mode = lookup(ENV_COLOR).and_then(|v| {
            let mode = parse_color_mode(&v);
            if mode.is_none() {
                tracing::warn!(value = %v, "ignoring unrecognized STDERRED_COLOR value");
            }
            mode
        });

        Ok(Config {
            esc_code,
            blacklist,
            color_mode,
            no_color: lookup(ENV_NO_COLOR).is_some(),
            program: program.to_string(),
        })
    }

    /// Same as `from_lookup`, but an invalid blacklist is logged and dropped.
    pub fn from_lookup_lenient<F>(lookup: F, program: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_lookup(&lookup, program) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("{e}; continuing without a blacklist");
                let without_blacklist = |k: &str| {
                    if k == ENV_BLACKLIST {
                        None
                    } else {
                        lookup(k)
                    }
                };
                match Self::from_lookup(without_blacklist, program) {
                    Ok(cfg) => cfg,
                    Err(_) => Config::defaults(program),
                }
            }
        }
    }

    pub fn defaults(program: &str) -> Self {
        Config {
            esc_code: DEFAULT_ESC_CODE.to_string(),
            blacklist: None,
            color_mode: None,
            no_color: false,
            program: program.to_string(),
        }
    }

    /// Base name of the configured program.
    pub fn program_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.program)
    }

    /// False when the blacklist matches the program name.
    pub fn accepts_program(&self) -> bool {
        match &self.blacklist {
            Some(re) => !re.is_match(self.program_name()),
            None => true,
        }
    }
}
