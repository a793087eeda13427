//! Environment/TTY questions the painter asks, and who answers them.
//!
//! Production code uses [`SystemProbe`]; tests hand a [`MockRegistry`] to the
//! same call sites.

use crate::config::Config;
use crate::mocks::MockRegistry;

pub trait EnvProbe {
    /// Whether the runtime environment permits painting at all.
    fn has_valid_env(&self) -> bool;
    /// Whether stderr is an interactive terminal.
    fn is_tty(&self) -> bool;
}

impl<P: EnvProbe + ?Sized> EnvProbe for &P {
    fn has_valid_env(&self) -> bool {
        (**self).has_valid_env()
    }

    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

impl<H> EnvProbe for MockRegistry<'_, H> {
    fn has_valid_env(&self) -> bool {
        MockRegistry::has_valid_env(self)
    }

    fn is_tty(&self) -> bool {
        self.mock_tty()
    }
}

/// Real inspection of the current process.
#[derive(Debug, Clone)]
pub struct SystemProbe {
    config: Config,
}

impl SystemProbe {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl EnvProbe for SystemProbe {
    fn has_valid_env(&self) -> bool {
        self.config.accepts_program()
    }

    fn is_tty(&self) -> bool {
        atty::is(atty::Stream::Stderr)
    }
}
