pub mod benches;
pub mod sort;
