//! stderred: paint a child process's stderr on interactive terminals.
//!
//! Every environment question (is stderr a terminal, is the environment valid
//! for painting) goes through [`EnvProbe`]. Production passes [`SystemProbe`];
//! tests pass a [`MockRegistry`] whose flags they control.

mod color;
mod config;
mod doctor;
mod errors;
mod logging;
mod mocks;
mod painter;
mod probe;
mod run;

pub use color::{
    color_enabled, effective_color_mode, log_error_stderr, paint, parse_color_mode,
    ColorMode, DEFAULT_ESC_CODE, RESET,
};
pub use config::{Config, ENV_BLACKLIST, ENV_COLOR, ENV_ESC_CODE, ENV_NO_COLOR};
pub use doctor::DoctorReport;
pub use errors::{exit_code_for_error, exit_code_for_io_error, ConfigError, StderredError};
pub use logging::{logging_init, ENV_LOG};
pub use mocks::{FnHooks, MockFlags, MockGuard, MockHooks, MockRegistry, MockState, ScenarioHooks};
pub use painter::ColorWriter;
pub use probe::{EnvProbe, SystemProbe};
pub use run::{exit_code_for_status, pump, run_colorized};
