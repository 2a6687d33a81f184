//! Tests for clipboard input and output through configured commands.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_bake_copy_and_paste_roundtrip() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);
    t.write_config(
        "[clipboard]\n\
         copy = \"tee clip.txt\"\n\
         paste = \"cat clip.txt\"\n",
    );

    let output = t
        .cmd()
        .args(["bake", "r.json", "--input", "abc", "--copy"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "output copied to clipboard");
    assert_eq!(t.read("clip.txt"), "NjI2MzY0");

    let output = t
        .cmd()
        .args(["invert", "r.json", "--out", "undo.json"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t
        .cmd()
        .args(["bake", "undo.json", "--paste"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "abc");
}

#[cfg(unix)]
#[test]
fn test_failing_clipboard_command() {
    let t = Test::with_recipe("r.json", SAMPLE_RECIPE);
    t.write_config("[clipboard]\npaste = \"false\"\n");

    let output = t
        .cmd()
        .args(["bake", "r.json", "--paste"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "false");
}
