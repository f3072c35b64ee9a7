#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
use trapsort_sdk::{host::Syscalls, pipeline, Word};

#[cfg(target_os = "none")]
fn sort_random(host: &mut Syscalls, backing: &'static mut [Word]) {
    if let Err(err) = pipeline::run(host, backing) {
        panic!("{err}");
    }
}

#[cfg(target_os = "none")]
trapsort_sdk::entry!(sort_random);

#[cfg(not(target_os = "none"))]
fn main() {}
