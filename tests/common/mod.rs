//! Common test utilities for gamepack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_bundled!`, `assert_not_bundled!`
//! - Fixtures: small byte payloads standing in for PNG files

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
