//! CLI surface specs: arguments, exit codes, config resolution.

use super::prelude::*;

/// Unknown subcommands are usage errors.
#[test]
fn unknown_subcommand_is_usage_error() {
    sitecheck_cmd().arg("frobnicate").assert().code(2);
}

/// Exit code 2 when an explicit config file does not exist.
#[test]
fn missing_explicit_config_exits_two() {
    let temp = Project::site();
    check_in(temp.path())
        .args(["-C", "no-such.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// Exit code 2 for a config with an unsupported version.
#[test]
fn unsupported_config_version_exits_two() {
    let temp = Project::site();
    temp.file("sitecheck.toml", "version = 99\n");

    check_in(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

/// Unknown config keys warn on stderr but do not fail the run.
#[test]
fn unknown_config_key_warns_but_passes() {
    let temp = Project::site();
    temp.file("sitecheck.toml", "version = 1\n\n[surprise]\nkey = true\n");

    check_in(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown config key `surprise`"));
}

/// SITECHECK_CONFIG selects the config file like -C does.
#[test]
fn config_env_var_is_honored() {
    let temp = Project::site();
    temp.file("alt.toml", "version = 99\n");

    let alt = temp.path().join("alt.toml");
    check_in(temp.path())
        .env("SITECHECK_CONFIG", &alt)
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

/// Enable flags run only the named checks.
#[test]
fn smoke_flag_runs_only_smoke() {
    let temp = Project::empty();
    check_in(temp.path())
        .arg("--smoke")
        .assert()
        .success()
        .stdout(predicates::str::contains("1 check passed"));
}

/// Disable flags skip the named checks.
#[test]
fn no_assets_flag_skips_assets() {
    let temp = Project::empty();
    check_in(temp.path())
        .arg("--no-assets")
        .assert()
        .success()
        .stdout(predicates::str::contains("1 check passed"));
}
