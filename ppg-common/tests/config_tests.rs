//! Unit tests for listen-port resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate PPG_SA_PORT are marked with #[serial] to ensure
//! they run sequentially, not in parallel.

use ppg_common::config::{resolve_port, DEFAULT_PORT};
use serial_test::serial;
use std::env;

const ENV_VAR: &str = "PPG_SA_PORT";

#[test]
#[serial]
fn cli_argument_has_highest_priority() {
    env::set_var(ENV_VAR, "6000");

    let port = resolve_port(Some(7123), ENV_VAR, DEFAULT_PORT);
    assert_eq!(port, 7123);

    env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn env_var_overrides_default() {
    env::set_var(ENV_VAR, "6001");

    let port = resolve_port(None, ENV_VAR, DEFAULT_PORT);
    assert_eq!(port, 6001);

    env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn non_numeric_env_var_is_ignored() {
    env::set_var(ENV_VAR, "not-a-port");

    let port = resolve_port(None, ENV_VAR, DEFAULT_PORT);
    assert_eq!(port, DEFAULT_PORT);

    env::remove_var(ENV_VAR);
}

#[test]
#[serial]
fn falls_back_to_compiled_default() {
    env::remove_var(ENV_VAR);

    let port = resolve_port(None, ENV_VAR, DEFAULT_PORT);
    assert_eq!(port, DEFAULT_PORT);
}
