#![allow(clippy::module_name_repetitions)]
//! Overridable environment/TTY answers for tests.
//!
//! A [`MockRegistry`] pairs two lifecycle hooks (`init`/`reset`) with two
//! borrowed flag cells. The host reads the flags through the registry (see
//! [`crate::EnvProbe`]) instead of inspecting the real terminal, while test code
//! keeps direct access to the same cells and may flip them between assertions.
//!
//! The registry never owns the flag storage: the `'a` lifetime ties it to a
//! harness-owned [`MockFlags`] (or any pair of `Cell<bool>`), so storage always
//! outlives the registry. Both types are `!Sync`; a test running on another
//! thread builds its own storage and registry.
//!
//! Typical use:
//! ```
//! use stderred::{MockFlags, MockRegistry, ScenarioHooks};
//!
//! let flags = MockFlags::new(true, false);
//! let registry = MockRegistry::new(
//!     ScenarioHooks::new(&flags, false, true),
//!     flags.has_valid_env_cell(),
//!     flags.mock_tty_cell(),
//! );
//! {
//!     let _armed = registry.armed();
//!     assert_eq!(registry.flags(), (false, true));
//! }
//! assert_eq!(registry.flags(), (true, false));
//! ```

use std::cell::Cell;
use std::fmt;

/// Lifecycle hooks driven by [`MockRegistry::init`] and [`MockRegistry::reset`].
pub trait MockHooks {
    /// Establish the scenario's flag values.
    fn arm(&self);
    /// Return the flags to the harness baseline.
    fn restore(&self);
}

impl<H: MockHooks + ?Sized> MockHooks for &H {
    fn arm(&self) {
        (**self).arm()
    }

    fn restore(&self) {
        (**self).restore()
    }
}

impl<H: MockHooks + ?Sized> MockHooks for Box<H> {
    fn arm(&self) {
        (**self).arm()
    }

    fn restore(&self) {
        (**self).restore()
    }
}

/// Hooks built from two closures.
pub struct FnHooks<I, R> {
    init: I,
    reset: R,
}

impl<I, R> FnHooks<I, R>
where
    I: Fn(),
    R: Fn(),
{
    pub fn new(init: I, reset: R) -> Self {
        Self { init, reset }
    }
}

impl<I, R> MockHooks for FnHooks<I, R>
where
    I: Fn(),
    R: Fn(),
{
    fn arm(&self) {
        (self.init)()
    }

    fn restore(&self) {
        (self.reset)()
    }
}

impl<I, R> fmt::Debug for FnHooks<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHooks").finish_non_exhaustive()
    }
}

/// Harness-owned flag storage with the baseline it was created with.
#[derive(Debug)]
pub struct MockFlags {
    has_valid_env: Cell<bool>,
    mock_tty: Cell<bool>,
    baseline: (bool, bool),
}

impl MockFlags {
    pub fn new(has_valid_env: bool, mock_tty: bool) -> Self {
        Self {
            has_valid_env: Cell::new(has_valid_env),
            mock_tty: Cell::new(mock_tty),
            baseline: (has_valid_env, mock_tty),
        }
    }

    pub fn has_valid_env_cell(&self) -> &Cell<bool> {
        &self.has_valid_env
    }

    pub fn mock_tty_cell(&self) -> &Cell<bool> {
        &self.mock_tty
    }

    pub fn set(&self, has_valid_env: bool, mock_tty: bool) {
        self.has_valid_env.set(has_valid_env);
        self.mock_tty.set(mock_tty);
    }

    /// Current `(has_valid_env, mock_tty)`.
    pub fn get(&self) -> (bool, bool) {
        (self.has_valid_env.get(), self.mock_tty.get())
    }

    pub fn baseline(&self) -> (bool, bool) {
        self.baseline
    }

    pub fn restore_baseline(&self) {
        let (env, tty) = self.baseline;
        self.set(env, tty);
    }
}

impl Default for MockFlags {
    /// No valid environment, no terminal.
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Hooks that arm a fixed flag pair into [`MockFlags`] and restore its baseline.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioHooks<'a> {
    flags: &'a MockFlags,
    has_valid_env: bool,
    mock_tty: bool,
}

impl<'a> ScenarioHooks<'a> {
    pub fn new(flags: &'a MockFlags, has_valid_env: bool, mock_tty: bool) -> Self {
        Self {
            flags,
            has_valid_env,
            mock_tty,
        }
    }
}

impl MockHooks for ScenarioHooks<'_> {
    fn arm(&self) {
        self.flags.set(self.has_valid_env, self.mock_tty);
    }

    fn restore(&self) {
        self.flags.restore_baseline();
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MockState {
    Baseline,
    Mocked,
}

pub struct MockRegistry<'a, H> {
    hooks: H,
    has_valid_env: &'a Cell<bool>,
    mock_tty: &'a Cell<bool>,
    state: Cell<MockState>,
}

impl<'a, H: MockHooks> MockRegistry<'a, H> {
    /// Store hooks and flag handles. Nothing is invoked or inspected here.
    pub fn new(hooks: H, has_valid_env: &'a Cell<bool>, mock_tty: &'a Cell<bool>) -> Self {
        Self {
            hooks,
            has_valid_env,
            mock_tty,
            state: Cell::new(MockState::Baseline),
        }
    }

    /// Run the arm hook. Re-arming an already mocked registry is allowed.
    pub fn init(&self) {
        self.hooks.arm();
        self.state.set(MockState::Mocked);
        tracing::debug!(
            has_valid_env = self.has_valid_env.get(),
            mock_tty = self.mock_tty.get(),
            "mock registry armed"
        );
    }

    /// Run the restore hook. Safe from any state, including before `init`.
    pub fn reset(&self) {
        self.hooks.restore();
        self.state.set(MockState::Baseline);
        tracing::debug!(
            has_valid_env = self.has_valid_env.get(),
            mock_tty = self.mock_tty.get(),
            "mock registry reset"
        );
    }

    /// Arm now, reset when the guard drops.
    pub fn armed(&self) -> MockGuard<'_> {
        self.init();
        MockGuard { registry: self }
    }
}

impl<H> MockRegistry<'_, H> {
    pub fn has_valid_env(&self) -> bool {
        self.has_valid_env.get()
    }

    pub fn mock_tty(&self) -> bool {
        self.mock_tty.get()
    }

    /// `(has_valid_env, mock_tty)` as currently stored.
    pub fn flags(&self) -> (bool, bool) {
        (self.has_valid_env(), self.mock_tty())
    }

    pub fn state(&self) -> MockState {
        self.state.get()
    }
}

impl<H> fmt::Debug for MockRegistry<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRegistry")
            .field("has_valid_env", &self.has_valid_env.get())
            .field("mock_tty", &self.mock_tty.get())
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// Object-safe view of a registry, used by [`MockGuard`].
trait Lifecycle {
    fn reset(&self);
}

impl<H: MockHooks> Lifecycle for MockRegistry<'_, H> {
    fn reset(&self) {
        MockRegistry::reset(self)
    }
}

/// Keeps a registry armed for the guard's scope.
#[must_use = "dropping the guard resets the registry immediately"]
pub struct MockGuard<'r> {
    registry: &'r dyn Lifecycle,
}

impl Drop for MockGuard<'_> {
    fn drop(&mut self) {
        self.registry.reset();
    }
}

impl fmt::Debug for MockGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_before_init_return_construction_values() {
        let flags = MockFlags::new(true, false);
        let reg = MockRegistry::new(
            ScenarioHooks::new(&flags, false, true),
            flags.has_valid_env_cell(),
            flags.mock_tty_cell(),
        );
        assert_eq!(reg.flags(), (true, false));
        assert_eq!(reg.state(), MockState::Baseline);
    }

    #[test]
    fn test_init_then_read_returns_exact_values() {
        for (v1, v2) in [(false, false), (false, true), (true, false), (true, true)] {
            let flags = MockFlags::new(!v1, !v2);
            let reg = MockRegistry::new(
                ScenarioHooks::new(&flags, v1, v2),
                flags.has_valid_env_cell(),
                flags.mock_tty_cell(),
            );
            reg.init();
            assert_eq!(reg.flags(), (v1, v2));
            assert_eq!(reg.state(), MockState::Mocked);
        }
    }

    #[test]
    fn test_reset_is_idempotent_and_safe_without_init() {
        let flags = MockFlags::new(true, true);
        let reg = MockRegistry::new(
            ScenarioHooks::new(&flags, false, false),
            flags.has_valid_env_cell(),
            flags.mock_tty_cell(),
        );
        reg.reset();
        assert_eq!(reg.flags(), (true, true));
        reg.init();
        reg.reset();
        let once = reg.flags();
        reg.reset();
        assert_eq!(reg.flags(), once);
        assert_eq!(reg.state(), MockState::Baseline);
    }

    #[test]
    fn test_rearm_reports_latest_values_only() {
        let flags = MockFlags::default();
        let scenario = Cell::new((true, false));
        let reg = MockRegistry::new(
            FnHooks::new(
                || {
                    let (env, tty) = scenario.get();
                    flags.set(env, tty);
                },
                || flags.restore_baseline(),
            ),
            flags.has_valid_env_cell(),
            flags.mock_tty_cell(),
        );
        reg.init();
        assert_eq!(reg.flags(), (true, false));
        scenario.set((false, true));
        reg.init();
        assert_eq!(reg.flags(), (false, true));
    }

    #[test]
    fn test_direct_cell_writes_are_visible_through_registry() {
        let flags = MockFlags::new(false, false);
        let reg = MockRegistry::new(
            ScenarioHooks::new(&flags, true, true),
            flags.has_valid_env_cell(),
            flags.mock_tty_cell(),
        );
        flags.mock_tty_cell().set(true);
        assert!(reg.mock_tty());
        assert!(!reg.has_valid_env());
    }

    #[test]
    fn test_guard_resets_on_drop() {
        let flags = MockFlags::new(true, false);
        let reg = MockRegistry::new(
            ScenarioHooks::new(&flags, false, true),
            flags.has_valid_env_cell(),
            flags.mock_tty_cell(),
        );
        {
            let _g = reg.armed();
            assert_eq!(reg.flags(), (false, true));
            assert_eq!(reg.state(), MockState::Mocked);
        }
        assert_eq!(reg.flags(), (true, false));
        assert_eq!(reg.state(), MockState::Baseline);
    }

    #[test]
    fn test_boxed_hooks_count_calls() {
        let flags = MockFlags::default();
        let arms = Cell::new(0u32);
        let restores = Cell::new(0u32);
        let hooks: Box<dyn MockHooks + '_> = Box::new(FnHooks::new(
            || arms.set(arms.get() + 1),
            || restores.set(restores.get() + 1),
        ));
        let reg = MockRegistry::new(hooks, flags.has_valid_env_cell(), flags.mock_tty_cell());
        assert_eq!((arms.get(), restores.get()), (0, 0));
        reg.init();
        reg.init();
        reg.reset();
        assert_eq!((arms.get(), restores.get()), (2, 1));
    }
}
