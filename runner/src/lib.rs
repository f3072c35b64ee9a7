#![deny(clippy::pedantic)]

#[cfg(not(target_arch = "wasm32"))]
use mimalloc::MiMalloc;

#[cfg(not(target_arch = "wasm32"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod ecall;
pub mod native;
pub mod state;
#[cfg(any(feature = "test", test))]
pub mod test_utils;
pub mod vm;
