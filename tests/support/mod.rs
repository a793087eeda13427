/*!
Test support helpers shared across integration tests.

- have_sh(): check a POSIX shell is available for child-process tests
- lookup(vars): variable lookup closure for Config::from_lookup
- stderred_cmd(): Command for the built binary with a clean color environment

These helpers do not print skip messages themselves so tests can keep their
own "skipping: ..." outputs.
*/

use std::process::Command;

/// Return true if `sh` is available on PATH.
#[allow(dead_code)]
pub fn have_sh() -> bool {
    which::which("sh").is_ok()
}

/// Build a lookup over fixed variables; anything else is unset.
#[allow(dead_code)]
pub fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |k| {
        vars.iter()
            .find(|(name, _)| *name == k)
            .map(|(_, v)| v.to_string())
    }
}

/// The stderred binary with color-related variables cleared.
#[allow(dead_code)]
pub fn stderred_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stderred"));
    for k in [
        "NO_COLOR",
        "STDERRED_COLOR",
        "STDERRED_ESC_CODE",
        "STDERRED_BLACKLIST",
        "STDERRED_LOG",
    ] {
        cmd.env_remove(k);
    }
    cmd
}
