#![deny(clippy::print_stdout)]

pub mod fingerprint;
pub mod graph;
pub mod query;
