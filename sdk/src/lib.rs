#![cfg_attr(not(feature = "std"), no_std)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arena;
pub mod array;
pub mod core;
pub mod host;
pub mod pipeline;
pub mod sort;
#[cfg(test)]
pub(crate) mod test_utils;

pub use trapsort_core_types::{constants, ecall_id, Word};
