//! `stderred doctor`: report what the painter sees and decides.

use serde::Serialize;

use crate::color::{color_enabled, effective_color_mode, ColorMode};
use crate::config::Config;
use crate::probe::EnvProbe;

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub version: String,
    pub build_target: String,
    pub build_profile: String,
    pub build_date: String,
    pub build_rustc: String,
    pub program: String,
    pub is_tty: bool,
    pub has_valid_env: bool,
    pub color_mode: String,
    pub no_color: bool,
    pub color_enabled: bool,
    pub esc_code: String,
    pub blacklist: Option<String>,
}

impl DoctorReport {
    pub fn collect(probe: &dyn EnvProbe, config: &Config, cli_mode: Option<ColorMode>) -> Self {
        DoctorReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            build_target: env!("STDERRED_BUILD_TARGET").to_string(),
            build_profile: env!("STDERRED_BUILD_PROFILE").to_string(),
            build_date: env!("STDERRED_BUILD_DATE").to_string(),
            build_rustc: env!("STDERRED_BUILD_RUSTC").to_string(),
            program: config.program.clone(),
            is_tty: probe.is_tty(),
            has_valid_env: probe.has_valid_env(),
            color_mode: effective_color_mode(config, cli_mode).as_str().to_string(),
            no_color: config.no_color,
            color_enabled: color_enabled(probe, config, cli_mode),
            esc_code: config.esc_code.escape_debug().to_string(),
            blacklist: config.blacklist.as_ref().map(|re| re.as_str().to_string()),
        }
    }

    pub fn render_text(&self) -> String {
        let yn = |b: bool| if b { "yes" } else { "no" };
        let mut lines = vec![
            "stderred doctor".to_string(),
            format!("  version: v{}", self.version),
            format!("  build: {} ({})", self.build_target, self.build_profile),
            format!("  built: {} with {}", self.build_date, self.build_rustc),
            format!("  program: {}", self.program),
            format!("  stderr is a tty: {}", yn(self.is_tty)),
            format!("  valid environment: {}", yn(self.has_valid_env)),
            format!("  color mode: {}", self.color_mode),
            format!("  NO_COLOR set: {}", yn(self.no_color)),
            format!("  color enabled: {}", yn(self.color_enabled)),
            format!("  escape code: \"{}\"", self.esc_code),
        ];
        lines.push(format!(
            "  blacklist: {}",
            self.blacklist.as_deref().unwrap_or("(none)")
        ));
        lines.join("\n")
    }
}
