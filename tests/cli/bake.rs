//! Tests for `ladle bake`.

use crate::support::*;

#[test]
fn test_bake_sample_recipe() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.bake("r.json", SAMPLE_INPUT);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), SAMPLE_STEPS[2]);
}

#[test]
fn test_bake_reads_piped_stdin() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t
        .cmd()
        .args(["bake", "r.json"])
        .write_stdin("abc\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "NjI2MzY0");
}

#[test]
fn test_bake_reads_input_file() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);
    t.write("in.txt", "abc");

    let output = t
        .cmd()
        .args(["bake", "r.json", "--file", "in.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "NjI2MzY0");
}

#[test]
fn test_bake_writes_output_file() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t
        .cmd()
        .args(["bake", "r.json", "--input", "abc", "--out", "out.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "output saved to");
    assert_eq!(t.read("out.txt"), "NjI2MzY0");
}

#[test]
fn test_bake_empty_input_fails() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.cmd().args(["bake", "r.json"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "The input field is empty.");
    assert_stdout_contains(&output, "--input");
}

#[test]
fn test_bake_empty_recipe_fails() {
    let t = Test::with_recipe("r.json", "[]");

    let output = t.bake("r.json", "abc");
    assert_failure(&output);
    assert_stderr_contains(&output, "The recipe has no operations.");
}

#[test]
fn test_bake_reports_failing_step() {
    let t = Test::with_recipe("r.json", BAD_SHIFT_RECIPE);

    let output = t.bake("r.json", "abc");
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "Step 2 'Caesar Encrypt' failed: Shift must be between 1 and 25.",
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_bake_decode_failure() {
    let t = Test::new();
    t.write("r.json", r#"[{"operation": "From Base64", "args": {}}]"#);

    let output = t.bake("r.json", "not base64!");
    assert_failure(&output);
    assert_stderr_contains(&output, "Step 1 'From Base64' failed");
}

#[test]
fn test_bake_rejects_unknown_operation() {
    let t = Test::with_recipe("r.json", RECIPE_WITH_UNKNOWN);

    let output = t.bake("r.json", "abc");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown operation: 'ROT13'");
    assert_stdout_contains(&output, "ladle ops");
}
