//! Tests for `ladle session` driven from piped stdin.

use crate::support::*;

#[test]
fn test_session_step_then_bake() {
    let t = Test::new();

    let output = t.session(
        "add Caesar Encrypt shift=1\n\
         add To Hex\n\
         input abc\n\
         step\n\
         step\n\
         step\n\
         bake\n\
         quit\n",
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Executed step 1: Caesar Encrypt");
    assert_stdout_contains(&output, "Executed step 2: To Hex");
    assert_stdout_contains(&output, "End of recipe reached. Resetting.");
    assert_stdout_contains(&output, "Recipe baked successfully!");
    assert_stdout_contains(&output, "626364");
}

#[test]
fn test_session_save_and_load_inverts() {
    let t = Test::new();

    let output = t.session(
        "add To Base64\n\
         add Caesar Encrypt shift=4\n\
         save r.json\n\
         load r.json\n\
         show\n",
    );
    assert_success(&output);
    assert_stdout_contains(&output, "Recipe saved!");
    assert_stdout_contains(&output, "Recipe loaded and inverted!");
    assert_stdout_contains(&output, "1. Caesar Decrypt (shift: 4)");
    assert_stdout_contains(&output, "2. From Base64");
    assert_eq!(
        operations(&t.show_json("r.json")),
        ["To Base64", "Caesar Encrypt"]
    );
}

#[test]
fn test_session_bake_without_input_notifies() {
    let t = Test::new();

    let output = t.session("add To Hex\nbake\n");
    assert_success(&output);
    assert_stderr_contains(&output, "Input Error: The input field is empty.");
}

#[test]
fn test_session_bake_without_recipe_notifies() {
    let t = Test::new();

    let output = t.session("input abc\nbake\nstep\n");
    assert_success(&output);
    assert_stderr_contains(&output, "Recipe Error: Please add at least one operation.");
    assert_stderr_contains(&output, "Recipe Error: Please add an operation to the recipe.");
}

#[test]
fn test_session_failed_step_reports() {
    let t = Test::new();

    let output = t.session("add From Hex\ninput zz\nstep\n");
    assert_success(&output);
    assert_stderr_contains(&output, "Processing Failed: Step 'From Hex' failed:");
}

#[test]
fn test_session_save_empty_recipe_warns() {
    let t = Test::new();

    let output = t.session("save r.json\n");
    assert_success(&output);
    assert_stderr_contains(&output, "Recipe is empty, nothing to save.");
    assert!(!t.path("r.json").exists());
}

#[test]
fn test_session_load_twice_shows_recipe_each_time() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);

    let output = t.session("load r.json\nload r.json\n");
    assert_success(&output);
    let out = stdout(&output);
    assert_eq!(out.matches("Recipe loaded and inverted!").count(), 2);
    assert_eq!(out.matches("1. From Base64").count(), 2);
}

#[test]
fn test_session_load_skips_unknown() {
    let t = Test::with_recipe("r.json", RECIPE_WITH_UNKNOWN);

    let output = t.session("load r.json\n");
    assert_success(&output);
    assert_stderr_contains(&output, "Could not find an inverse for 'ROT13'. Skipping.");
    assert_stdout_contains(&output, "1. From Hex");
    assert_stdout_contains(&output, "2. From Base64");
}

#[test]
fn test_session_open_and_save_output() {
    let t = Test::new();
    t.write("in.txt", "hi");

    let output = t.session("open in.txt\nadd To Hex\nbake\nsave-output out.txt\n");
    assert_success(&output);
    assert_eq!(t.read("out.txt"), "6869");
}

#[test]
fn test_session_file_command_without_path_cancels() {
    let t = Test::new();

    let output = t.session("add To Hex\nsave\n");
    assert_success(&output);
    assert_stdout_contains(&output, "cancelled");
}

#[test]
fn test_session_bad_lines_keep_going() {
    let t = Test::new();

    let output = t.session("frobnicate\nadd ROT13\nrm 1\nadd To Hex\nshow\n");
    assert_success(&output);
    assert_stderr_contains(&output, "unknown command 'frobnicate'");
    assert_stderr_contains(&output, "unknown operation: 'ROT13'");
    assert_stderr_contains(&output, "no step at position 1");
    assert_stdout_contains(&output, "1. To Hex");
}

#[test]
fn test_session_set_param() {
    let t = Test::new();

    let output = t.session("add Caesar Encrypt\nset 1 2\ninput a\nbake\n");
    assert_success(&output);
    assert_stdout_contains(&output, "step 1 shift set");
    assert_stdout_contains(&output, "\nc\n");
}
