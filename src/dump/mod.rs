//! MySQL export dump parsing.
//!
//! This module contains the extraction pipeline that turns a reference
//! database drop (a ZIP archive holding a MySQL export dump, sometimes with
//! the dump nested one ZIP deeper) into typed positional records. The stages
//! compose strictly left to right: archive resolution yields SQL text, the
//! statement scanner yields `(table, values)` pairs, the tuple splitter
//! yields one parenthesized group per row, and value coercion produces the
//! typed fields that the record sink collects under a bounded cap.
//!
//! Start with [`database::extract_database`] for the whole pipeline, or use
//! the stages individually for synthetic input.

pub mod archive;
pub mod database;
pub mod record;
pub mod scanner;
pub mod tuple;
pub mod value;
