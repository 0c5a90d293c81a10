//! Mock catalog generation
//!
//! There is no backing store; both admin tables are seeded from these
//! generators at startup.

mod generator;


pub use generator::*;
