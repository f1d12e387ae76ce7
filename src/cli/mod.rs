//! CLI subcommand implementations for the `refx` binary.
//!
//! Each subcommand module follows the same pattern: an `Options` struct
//! holding the parsed arguments and a `pub fn execute(opts, writer) ->
//! Result<(), RefdbError>` entry point. The `writer: &mut dyn Write`
//! parameter allows output to be captured in tests or redirected to a file
//! via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `refx extract` | [`extract`] | Run the extraction pipeline and print records |
//! | `refx tables` | [`tables`] | Per-table record counts for one database |
//! | `refx archives` | [`archives`] | Show which archive member would be parsed |
//!
//! # Common patterns
//!
//! - **`--json`** — structured output via `#[derive(Serialize)]` and
//!   `serde_json`.
//! - **`--color`** (global) — control colored terminal output (`auto`,
//!   `always`, `never`).
//! - **`--output` / `-o`** (global) — redirect output to a file instead of
//!   stdout.
//!
//! The `wprintln!` and `wprint!` macros wrap `writeln!`/`write!` to convert
//! `io::Error` into `RefdbError`.

pub mod app;
pub mod archives;
pub mod extract;
pub mod tables;

/// Write a line to the given writer, converting io::Error to RefdbError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::RefdbError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::RefdbError::Io(e.to_string()))
    };
}

pub(crate) use wprintln;

use std::path::Path;

use crate::RefdbError;

/// Validate that the reference root argument points at a directory.
pub(crate) fn require_root(root: &str) -> Result<&Path, RefdbError> {
    let path = Path::new(root);
    if !path.is_dir() {
        return Err(RefdbError::Argument(format!(
            "Reference root does not exist: {}",
            root
        )));
    }
    Ok(path)
}
