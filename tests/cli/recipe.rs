//! Tests for `ladle recipe` subcommands.

use crate::support::*;

#[test]
fn test_add_creates_file() {
    let t = Test::new();

    let output = t.add("r.json", "To Base64", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "✓ added");
    assert_stdout_contains(&output, "as step 1");

    assert_eq!(
        t.read("r.json"),
        "[\n    {\n        \"operation\": \"To Base64\",\n        \"args\": {}\n    }\n]"
    );
}

#[test]
fn test_add_appends_with_params() {
    let t = Test::new();

    assert_success(&t.add("r.json", "Caesar Encrypt", &["--shift", "3"]));
    assert_success(&t.add("r.json", "AES Encrypt", &["--key", "k"]));

    let output = t.show_json("r.json");
    assert_success(&output);
    assert_eq!(operations(&output), ["Caesar Encrypt", "AES Encrypt"]);
    assert_stdout_contains(&output, r#""shift": "3""#);
    assert_stdout_contains(&output, r#""key": "k""#);
}

#[test]
fn test_add_without_param_hints() {
    let t = Test::new();

    let output = t.add("r.json", "Caesar Decrypt", &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "needs --shift");
    assert!(t.read("r.json").contains(r#""shift": """#));
}

#[test]
fn test_add_wrong_param_fails() {
    let t = Test::new();

    let output = t.add("r.json", "To Hex", &["--shift", "3"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "'To Hex' takes no shift parameter");
    assert!(!t.path("r.json").exists());
}

#[test]
fn test_add_unknown_operation_fails() {
    let t = Test::new();

    let output = t.add("r.json", "ROT13", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown operation: 'ROT13'");
}

#[test]
fn test_show_lists_steps() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.cmd().args(["recipe", "show", "r.json"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "1. Caesar Encrypt (shift: 1)");
    assert_stdout_contains(&output, "2. To Hex");
    assert_stdout_contains(&output, "3. To Base64");
}

#[test]
fn test_show_hides_aes_key() {
    let t = Test::with_recipe("r.json", AES_RECIPE);

    let output = t.cmd().args(["recipe", "show", "r.json"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "AES Encrypt (key: ****)");
    assert_stdout_excludes(&output, "correct horse");
}

#[test]
fn test_rm_removes_position() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.cmd().args(["recipe", "rm", "r.json", "2"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "removed step 2");

    assert_eq!(
        operations(&t.show_json("r.json")),
        ["Caesar Encrypt", "To Base64"]
    );
}

#[test]
fn test_rm_last_step_deletes_file() {
    let t = Test::new();
    assert_success(&t.add("r.json", "To Hex", &[]));

    let output = t.cmd().args(["recipe", "rm", "r.json", "1"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "recipe is empty");
    assert!(!t.path("r.json").exists());
}

#[test]
fn test_rm_out_of_range() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.cmd().args(["recipe", "rm", "r.json", "4"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no step at position 4");

    let output = t.cmd().args(["recipe", "rm", "r.json", "0"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_clear_requires_confirmation() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.cmd().args(["recipe", "clear", "r.json"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--yes");
    assert!(t.path("r.json").exists());

    let output = t
        .cmd()
        .args(["recipe", "clear", "r.json", "--yes"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!t.path("r.json").exists());
}
