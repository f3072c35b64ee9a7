#![no_std]
#![deny(clippy::pedantic)]

pub mod constants;
pub mod ecall_id;

/// A signed machine word, the unit every trap moves and every arena slot
/// holds.
pub type Word = i64;
