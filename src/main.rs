use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stderred::{
    color_enabled, exit_code_for_error, exit_code_for_status, log_error_stderr, logging_init,
    run_colorized, ColorMode, Config, DoctorReport, EnvProbe, SystemProbe,
};

#[derive(Parser, Debug)]
#[command(
    name = "stderred",
    version,
    about = "Run a command and paint its stderr when writing to a terminal."
)]
struct Cli {
    /// Colorize stderr: auto|always|never (overrides STDERRED_COLOR)
    #[arg(long = "color", value_enum, global = true)]
    color: Option<ColorMode>,

    /// Print detailed execution info
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug, Clone)]
enum Cmd {
    /// Run a command with its stderr painted
    Run {
        /// Command and arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
    /// Show what stderred detects about the environment
    Doctor {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
        /// Program to check against STDERRED_BLACKLIST (default: stderred itself)
        program: Option<String>,
    },
}

fn system_probe(program: &str) -> SystemProbe {
    SystemProbe::new(Config::from_lookup_lenient(
        |k| std::env::var(k).ok(),
        program,
    ))
}

fn run_doctor(probe: &SystemProbe, cli_mode: Option<ColorMode>, json: bool) -> anyhow::Result<()> {
    let report = DoctorReport::collect(probe, probe.config(), cli_mode);
    if json {
        let s = serde_json::to_string_pretty(&report).context("serialize doctor report")?;
        println!("{s}");
    } else {
        eprintln!("{}", report.render_text());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging_init(cli.verbose);

    match &cli.command {
        Cmd::Doctor { json, program } => {
            let program = program.clone().unwrap_or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|p| p.file_name().map(|s| s.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| "stderred".to_string())
            });
            let probe = system_probe(&program);
            match run_doctor(&probe, cli.color, *json) {
                Ok(()) => ExitCode::from(0),
                Err(e) => {
                    eprintln!("stderred: {e:#}");
                    ExitCode::from(1)
                }
            }
        }
        Cmd::Run { args } => {
            let program = args.first().map(String::as_str).unwrap_or_default();
            let probe = system_probe(program);
            let config = probe.config();
            let enabled = color_enabled(&probe, config, cli.color);
            if cli.verbose {
                eprintln!(
                    "stderred: program={} tty={} valid_env={} color={}",
                    config.program_name(),
                    probe.is_tty(),
                    probe.has_valid_env(),
                    enabled
                );
            }
            match run_colorized(args, enabled, &config.esc_code) {
                Ok(status) => ExitCode::from(exit_code_for_status(&status)),
                Err(e) => {
                    log_error_stderr(enabled, &e.to_string());
                    ExitCode::from(exit_code_for_error(&e))
                }
            }
        }
    }
}
