//! Output format specs: text rendering, JSON document, color, limits.

use super::prelude::*;

/// Passing checks are silent; only the summary prints.
#[test]
fn passing_run_prints_only_summary() {
    let temp = Project::site();
    let output = check_in(temp.path()).output().unwrap();

    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "2 checks passed\n"
    );
}

/// Failing text output names the check, file, violation type, and advice.
#[test]
fn failing_text_output_shape() {
    let temp = Project::site();
    temp.remove("index.html");
    let output = check_in(temp.path()).output().unwrap();

    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "assets: FAIL\n  index.html: missing_asset\n    Expected a file at index.html. Create it or point sitecheck at the right root.\n1 check passed, 1 failed\n"
    );
}

/// Captured output carries no ANSI escapes without a TTY.
#[test]
fn no_color_without_tty() {
    let temp = Project::site();
    temp.remove("index.html");

    check_in(temp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}

/// --no-color suppresses escapes even when color is forced by env.
#[test]
fn no_color_flag_wins_over_color_env() {
    let temp = Project::site();
    temp.remove("index.html");

    check_in(temp.path())
        .args(["--no-color"])
        .env("COLOR", "1")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}

/// The JSON document has a timestamp, overall verdict, and per-check results.
#[test]
fn json_document_structure() {
    let temp = Project::site();
    let json = json_output(check_in(temp.path()).args(["-o", "json"]));

    assert_eq!(json["passed"], true);
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    let checks = json["checks"].as_array().unwrap();
    assert_eq!(checks.len(), 2);
    for check in checks {
        assert_eq!(check["passed"], true);
        assert!(check["duration_ms"].is_u64());
    }
}

/// JSON violations carry type, file, advice, and marker.
#[test]
fn json_violations_are_structured() {
    let temp = Project::site();
    temp.file("assets/style.css", "body{font-family:sans-serif;}");
    let json = json_output(check_in(temp.path()).args(["-o", "json"]));

    assert_eq!(json["passed"], false);
    let violation = &json["checks"][1]["violations"][0];
    assert_eq!(violation["type"], "missing_marker");
    assert_eq!(violation["file"], "assets/style.css");
    assert_eq!(violation["marker"], "Google Sans");
}

/// --limit stops after the first violation; later targets go unreported.
#[test]
fn limit_caps_reported_violations() {
    let temp = Project::empty();

    check_in(temp.path())
        .args(["--limit", "1"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("index.html: missing_asset"))
        .stdout(predicates::str::contains("assets/style.css").not());
}

/// --no-limit shows every violation.
#[test]
fn no_limit_shows_all_violations() {
    let temp = Project::empty();

    check_in(temp.path())
        .arg("--no-limit")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("index.html: missing_asset"))
        .stdout(predicates::str::contains("assets/style.css: missing_asset"));
}
