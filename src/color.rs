#![allow(clippy::module_name_repetitions)]
//! Color mode configuration and ANSI painting helpers.
//!
//! Decision order for stderr painting (see [`color_enabled`]):
//! 1. `NO_COLOR` disables color unconditionally.
//! 2. An invalid environment (e.g. blacklisted program) disables color, even
//!    with `--color always`.
//! 3. CLI `--color`, then `STDERRED_COLOR`, then auto.
//! 4. Auto paints only when the probe reports a terminal.
//!
//! Nothing here reads process-wide state; callers pass the probe and config.

use clap::ValueEnum;

use crate::config::Config;
use crate::probe::EnvProbe;

/// Bright red, the default stderr color.
pub const DEFAULT_ESC_CODE: &str = "\x1b[91m";
pub const RESET: &str = "\x1b[0m";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

pub fn parse_color_mode(s: &str) -> Option<ColorMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" => Some(ColorMode::Auto),
        "always" | "on" | "true" | "yes" => Some(ColorMode::Always),
        "never" | "off" | "false" | "no" => Some(ColorMode::Never),
        _ => None,
    }
}

/// Mode in effect: CLI override first, then the configured preference.
pub fn effective_color_mode(config: &Config, cli_mode: Option<ColorMode>) -> ColorMode {
    cli_mode.or(config.color_mode).unwrap_or(ColorMode::Auto)
}

pub fn color_enabled(
    probe: &dyn EnvProbe,
    config: &Config,
    cli_mode: Option<ColorMode>,
) -> bool {
    if config.no_color {
        return false;
    }
    if !probe.has_valid_env() {
        return false;
    }
    match effective_color_mode(config, cli_mode) {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => probe.is_tty(),
    }
}

/// Wrap string with ANSI color code when enabled; otherwise return unchanged.
pub fn paint(enabled: bool, code: &str, s: &str) -> String {
    if enabled {
        format!("{code}{s}{RESET}")
    } else {
        s.to_string()
    }
}

/// Color-aware stderr one-liner for the tool's own errors.
pub fn log_error_stderr(use_color: bool, msg: &str) {
    eprintln!("{}", paint(use_color, "\x1b[31;1m", msg));
}
