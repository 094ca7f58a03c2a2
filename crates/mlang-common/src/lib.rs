//! # mlang Common
//!
//! Shared types, errors, logging, and formatting utilities for mlang.
//!
//! This crate provides the foundational types used across all other crates in
//! the mlang workspace: the language and message identifiers that index a
//! packed message table, the application error, and the logging setup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
pub use types::*;
pub use utils::*;
