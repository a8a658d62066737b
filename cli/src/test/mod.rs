#![allow(clippy::unwrap_used)]

use predicates::prelude::{
    predicate::str::{contains, is_empty},
    PredicateBooleanExt,
};
use test_context::TestContext;


#[test]
fn test_config_defaults() {
    let ctx = TestContext::new();

    ctx.bare_command()
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""file_path": "todo.txt""#)
                .and(contains(r#""profile_exists": false"#))
                .and(contains(r#""log_level": "warn""#)),
        )
        .stderr(is_empty());
}

#[test]
fn test_file_arg_overrides_env() {
    let ctx = TestContext::new();

    ctx.bare_command()
        .env("TODO_FILE", "wrong.txt")
        .args(["--file", "right.txt"])
        .arg("config")
        .assert()
        .success()
        .stdout(contains(r#""file_path": "right.txt""#))
        .stderr(is_empty());
}

#[test]
fn test_profile_sets_file_path() {
    let ctx = TestContext::new();
    let profile_path = ctx.write_profile("from_profile.txt");

    ctx.bare_command()
        .env("TODO_PROFILE", profile_path.to_str().unwrap())
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains(r#""file_path": "from_profile.txt""#)
                .and(contains(r#""profile_exists": true"#)),
        );
}

#[test]
fn test_profile_file_is_used_for_notes() {
    let ctx = TestContext::new();
    let notes_path = ctx.temp_dir.path().join("profiled.txt");
    let profile_path = ctx.write_profile(notes_path.to_str().unwrap());

    ctx.bare_command()
        .args(["--profile-path", profile_path.to_str().unwrap()])
        .args(["add", "via", "profile"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&notes_path).unwrap().trim_end(),
        "via profile"
    );
}

#[test]
fn test_broken_profile_fails() {
    let ctx = TestContext::new();
    let profile_path = ctx.temp_dir.path().join("broken.toml");
    std::fs::write(&profile_path, "file_path = [").unwrap();

    ctx.bare_command()
        .args(["--profile-path", profile_path.to_str().unwrap()])
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("Failed to deserialize profile"));
}

#[test]
fn test_completions() {
    let ctx = TestContext::new();

    ctx.bare_command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("todo"));
}
