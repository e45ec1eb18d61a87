//! The traceback toggle as read from the process environment.
//!
//! Kept to a single test in its own binary: it mutates the environment.
#![allow(unsafe_code)]

use std::process::ExitCode;

use pretty_assertions::assert_eq;
use wlss_validator::prelude::*;
use wlss_validator::report;

constrained! {
    MyInt: Int { value_min: 0 }
}

const NOTICE: &str =
    "If you need to have full trace unset WLSS_LIB_TRACEBACK environment variable.";

fn failure() -> anyhow::Error {
    MyInt::new(-10).unwrap_err().into()
}

#[test]
fn toggle_follows_environment() {
    // SAFETY: no other thread of this test binary touches the environment.
    unsafe { std::env::remove_var(TracebackMode::ENV_VAR) };
    assert_eq!(TracebackMode::from_env(), TracebackMode::Full);
    let full = report::render(&failure());
    assert!(full.contains("src/foundation/value.rs"));
    assert!(!full.contains(NOTICE));

    // SAFETY: as above.
    unsafe { std::env::set_var(TracebackMode::ENV_VAR, "disable") };
    assert_eq!(TracebackMode::from_env(), TracebackMode::Suppressed);
    let suppressed = report::render(&failure());
    assert!(suppressed.contains(file!()));
    assert!(!suppressed.contains("src/foundation/value.rs"));
    assert_eq!(suppressed.lines().last(), Some(NOTICE));
    assert_eq!(
        report::run(|| {
            MyInt::new(-1)?;
            Ok(())
        }),
        ExitCode::FAILURE
    );

    // SAFETY: as above.
    unsafe { std::env::set_var(TracebackMode::ENV_VAR, "enable") };
    assert_eq!(TracebackMode::from_env(), TracebackMode::Full);

    let other = report::render(&anyhow::anyhow!("boom"));
    assert!(other.starts_with("Error: boom"));

    // SAFETY: as above.
    unsafe { std::env::remove_var(TracebackMode::ENV_VAR) };
}
