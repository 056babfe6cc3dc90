//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod assumptions;
pub mod check;
pub mod value;
