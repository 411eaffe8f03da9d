// tests/support/mod.rs
// Shared by several integration test binaries; not every binary touches
// every helper, so dead-code warnings are silenced at the module level.
#[allow(dead_code)]
pub mod helpers;
#[allow(dead_code)]
pub mod memory;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use memory::*;
