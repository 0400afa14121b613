//! Command-line front end support.

pub mod commands;
