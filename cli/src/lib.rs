#![deny(clippy::pedantic)]
pub mod cli_benches;
pub mod runner;
