//! Test fixtures and constants.

/// Caesar shift 1, then hex, then base64.
pub const SAMPLE_RECIPE: &str = r#"[
    {"operation": "Caesar Encrypt", "args": {"shift": "1"}},
    {"operation": "To Hex", "args": {}},
    {"operation": "To Base64", "args": {}}
]"#;

/// `abc` baked through [`SAMPLE_RECIPE`], step by step.
pub const SAMPLE_INPUT: &str = "abc";
pub const SAMPLE_STEPS: [&str; 3] = ["bcd", "626364", "NjI2MzY0"];

/// A recipe saved by a build that knew an operation this one does not.
pub const RECIPE_WITH_UNKNOWN: &str = r#"[
    {"operation": "To Base64", "args": {}},
    {"operation": "ROT13", "args": {}},
    {"operation": "To Hex", "args": {}}
]"#;

/// AES encryption with a fixed key.
pub const AES_RECIPE: &str = r#"[
    {"operation": "AES Encrypt", "args": {"key": "correct horse"}}
]"#;

/// A Caesar step whose shift can never run.
pub const BAD_SHIFT_RECIPE: &str = r#"[
    {"operation": "To Hex", "args": {}},
    {"operation": "Caesar Encrypt", "args": {"shift": "30"}}
]"#;
