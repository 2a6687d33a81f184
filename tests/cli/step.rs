//! Tests for `ladle step`.

use crate::support::*;

#[test]
fn test_step_shows_each_prefix() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.step("r.json", SAMPLE_INPUT, &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "Executed step 1 of 3: Caesar Encrypt");
    assert_stdout_contains(&output, "Executed step 2 of 3: To Hex");
    assert_stdout_contains(&output, "Executed step 3 of 3: To Base64");

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().map(str::trim).collect();
    for expected in SAMPLE_STEPS {
        assert!(lines.contains(&expected), "missing {}: {}", expected, out);
    }
}

#[test]
fn test_step_marks_executed_step() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.step("r.json", SAMPLE_INPUT, &["-n", "1"]);
    assert_success(&output);
    assert_stdout_contains(&output, "▶ 1. Caesar Encrypt (shift: 1)");
    assert_stdout_excludes(&output, "Executed step 2");
}

#[test]
fn test_step_wraps_after_last() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.step("r.json", SAMPLE_INPUT, &["-n", "5"]);
    assert_success(&output);
    let out = stdout(&output);
    assert_eq!(out.matches("End of recipe reached. Resetting.").count(), 1);
    // the fifth call starts over
    assert_eq!(out.matches("Executed step 1 of 3").count(), 2);
}

#[test]
fn test_step_allows_empty_input() {
    let t = Test::new();
    t.write("r.json", r#"[{"operation": "To Hex", "args": {}}]"#);

    let output = t.cmd().args(["step", "r.json"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Executed step 1 of 1: To Hex");
}

#[test]
fn test_step_failure_stops() {
    let t = Test::with_recipe("r.json", BAD_SHIFT_RECIPE);

    let output = t.step("r.json", "abc", &[]);
    assert_failure(&output);
    assert_stdout_contains(&output, "Executed step 1 of 2: To Hex");
    assert_stderr_contains(&output, "Step 2 'Caesar Encrypt' failed");
}

#[test]
fn test_step_empty_recipe_fails_without_count() {
    let t = Test::with_recipe("r.json", "[]");

    let output = t.step("r.json", "abc", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "The recipe has no operations.");
    assert_stdout_contains(&output, "ladle recipe add");
}

#[test]
fn test_step_empty_recipe_fails() {
    let t = Test::with_recipe("r.json", "[]");

    let output = t.step("r.json", "abc", &["-n", "1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "The recipe has no operations.");
}
