//! Integration tests driving the compiled preview binaries.
//!
//! Each binary runs with a search path containing only the tools a test
//! asks for, so fallbacks are deterministic whatever is installed locally.

#![cfg(unix)]

mod helpers;

mod package_test;
mod status_test;
