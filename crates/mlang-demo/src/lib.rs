//! # mlang Demo
//!
//! Command-line demonstration of the packed message table: select a
//! language, fetch one message, print its length and code units.
//!
//! The embedded table in [`pack`] stands in for a generated one; a table
//! file and character list can be supplied through configuration instead.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod demo;
pub mod error;
pub mod pack;

pub use cli::*;
pub use demo::*;
pub use error::*;
