//! Tests for error handling, config and global flags.

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    for command in ["ops", "bake", "step", "invert", "recipe", "session"] {
        assert_stdout_contains(&output, command);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "ladle");
}

#[test]
fn test_input_flags_conflict() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t
        .cmd()
        .args(["bake", "r.json", "--input", "a", "--paste"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "ladle");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::new();
    t.write_config("[clipboard\n");

    let output = t.cmd().arg("ops").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_unknown_config_key_fails() {
    let t = Test::new();
    t.write_config("[output]\ncolour = false\n");

    let output = t.cmd().arg("ops").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "colour");
}

#[test]
fn test_blank_clipboard_command_rejected() {
    let t = Test::new();
    t.write_config("[clipboard]\ncopy = \"  \"\n");

    let output = t.cmd().arg("ops").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "clipboard.copy");
}

#[test]
fn test_color_off_in_config() {
    let t = Test::new();
    t.write_config("[output]\ncolor = false\n");

    let output = t.cmd().arg("ops").env_remove("NO_COLOR").output().unwrap();
    assert_success(&output);
    assert_stdout_excludes(&output, "\u{1b}[");
}
