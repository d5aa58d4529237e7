//! Command implementations for the Vista CLI.

pub mod config;
pub mod explore;
pub mod search;
