//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod draw;
pub mod network;
