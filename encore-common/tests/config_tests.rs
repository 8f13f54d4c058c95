//! Tests for database location resolution
//!
//! Tests that manipulate ENCORE_DB are marked #[serial] so they don't race
//! each other over the process environment.

use std::env;
use std::path::PathBuf;

use encore_common::config::{resolve_database_path, DB_ENV_VAR};
use serial_test::serial;

#[test]
#[serial]
fn test_cli_argument_has_highest_priority() {
    env::set_var(DB_ENV_VAR, "/tmp/from-env.db");

    let path = resolve_database_path(Some("/tmp/from-cli.db"));
    assert_eq!(path, PathBuf::from("/tmp/from-cli.db"));

    env::remove_var(DB_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_when_no_cli_argument() {
    env::set_var(DB_ENV_VAR, "/tmp/from-env.db");

    let path = resolve_database_path(None);
    assert_eq!(path, PathBuf::from("/tmp/from-env.db"));

    env::remove_var(DB_ENV_VAR);
}

#[test]
#[serial]
fn test_empty_env_var_ignored() {
    env::set_var(DB_ENV_VAR, "");

    let path = resolve_database_path(None);
    assert_ne!(path, PathBuf::from(""));

    env::remove_var(DB_ENV_VAR);
}

#[test]
#[serial]
fn test_fallback_names_the_database_file() {
    env::remove_var(DB_ENV_VAR);

    let path = resolve_database_path(None);
    assert_eq!(path.file_name().unwrap(), "encore.db");
}
