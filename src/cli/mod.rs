//! Command-line front end for `sgraph`.

pub mod commands;
