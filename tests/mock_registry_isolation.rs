use std::cell::Cell;

use stderred::{
    color_enabled, Config, EnvProbe, FnHooks, MockFlags, MockRegistry, MockState, ScenarioHooks,
};

/// Two test cases sharing one registry, driven the way a harness would.
#[test]
fn test_reset_between_cases_hides_previous_scenario() {
    let flags = MockFlags::new(true, false);
    let reg = MockRegistry::new(
        ScenarioHooks::new(&flags, false, true),
        flags.has_valid_env_cell(),
        flags.mock_tty_cell(),
    );

    // case A
    reg.init();
    assert_eq!(reg.flags(), (false, true));
    assert!(!color_enabled(&reg, &Config::defaults("a"), None));
    reg.reset();

    // case B never calls init
    assert_eq!(reg.flags(), (true, false));
    assert_eq!(reg.state(), MockState::Baseline);
}

#[test]
fn test_pre_init_read_equals_constructed_baseline() {
    let flags = MockFlags::new(true, false);
    let reg = MockRegistry::new(
        FnHooks::new(|| flags.set(false, false), || flags.restore_baseline()),
        flags.has_valid_env_cell(),
        flags.mock_tty_cell(),
    );
    assert_eq!(reg.flags(), flags.baseline());
    assert!(reg.has_valid_env());
    assert!(!reg.is_tty());
}

#[test]
fn test_registry_over_plain_cells_without_mock_flags() {
    let env = Cell::new(false);
    let tty = Cell::new(false);
    let reg = MockRegistry::new(
        FnHooks::new(
            || {
                env.set(true);
                tty.set(true);
            },
            || {
                env.set(false);
                tty.set(false);
            },
        ),
        &env,
        &tty,
    );
    reg.reset();
    reg.reset();
    assert_eq!(reg.flags(), (false, false));
    reg.init();
    assert_eq!((env.get(), tty.get()), (true, true));
    // test code flips one flag directly; the other is untouched
    tty.set(false);
    assert_eq!(reg.flags(), (true, false));
}

#[test]
fn test_guard_resets_even_when_case_panics() {
    let flags = MockFlags::new(true, false);
    let reg = MockRegistry::new(
        ScenarioHooks::new(&flags, false, true),
        flags.has_valid_env_cell(),
        flags.mock_tty_cell(),
    );
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _armed = reg.armed();
        assert_eq!(reg.flags(), (false, true));
        panic!("case failed");
    }));
    assert!(outcome.is_err());
    assert_eq!(reg.flags(), (true, false));
}

#[test]
fn test_parallel_cases_own_their_registries() {
    let handles: Vec<_> = [(true, false), (false, true), (true, true)]
        .into_iter()
        .map(|(env, tty)| {
            std::thread::spawn(move || {
                let flags = MockFlags::default();
                let reg = MockRegistry::new(
                    ScenarioHooks::new(&flags, env, tty),
                    flags.has_valid_env_cell(),
                    flags.mock_tty_cell(),
                );
                let _armed = reg.armed();
                let got = reg.flags();
                got == (env, tty)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().expect("join"));
    }
}
