//! Shared types and pure logic of the fleet dashboard.
//!
//! Everything here is target-independent: the frontend compiles it to
//! wasm, tests run natively.

pub mod enums;
pub mod shared;
pub mod system;
