//! Shared utilities (filesystem helpers for drop discovery).

pub mod fs;
