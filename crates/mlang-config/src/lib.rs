//! # mlang Config
//!
//! Configuration for the mlang demo: where the packed table and character
//! list live, which language and message to look up, and how to log.
//!
//! Configuration comes from a YAML or TOML file, is overridden by `MLANG_*`
//! environment variables, and is validated before use.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
