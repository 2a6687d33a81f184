//! Ladle - build, bake and invert recipes of text transformations.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── ops           # List operations
//! │   ├── bake          # Run a whole recipe
//! │   ├── step          # Run a recipe one step at a time
//! │   ├── invert        # Load a recipe inverted
//! │   ├── recipe        # Edit recipe files
//! │   ├── session       # Interactive session
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── operation     # Closed set of operations
//!     ├── codec/        # Base64, hex
//!     ├── cipher/       # Caesar, AES-256-GCM
//!     ├── inversion     # Operation <-> inverse table
//!     ├── registry      # Name-based lookup and invoke
//!     ├── recipe        # Steps and the step-mode cursor
//!     ├── executor      # Bake and step modes
//!     ├── persist       # Recipe files, load-and-invert
//!     ├── session       # Interactive controller
//!     ├── host          # Clipboard/file/notify collaborators
//!     ├── clipboard     # System clipboard via platform tools
//!     └── config        # config.toml
//! ```
//!
//! # Inverting a recipe
//!
//! Saving a recipe `[op1, ..., opN]` and loading it back inverted gives
//! `[inverse(opN), ..., inverse(op1)]` with the same parameters, which
//! undoes the original when every step is exactly reversible.
//!
//! ```
//! use ladle::core::{executor, operation::Operation, persist, recipe::Recipe, types::Params};
//!
//! let mut encode: Recipe = [
//!     (Operation::ToBase64, Params::new()),
//!     (Operation::ToHex, Params::new()),
//! ]
//! .into_iter()
//! .collect();
//! let encoded = executor::bake(&mut encode, "hello").unwrap().output;
//!
//! let mut decode = persist::invert(persist::records(&encode)).recipe;
//! assert_eq!(executor::bake(&mut decode, &encoded).unwrap().output, "hello");
//! ```

pub mod cli;
pub mod core;
pub mod error;
