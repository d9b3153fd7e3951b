//! ZQLZ Monitor - Database server status collection
//!
//! This crate turns a database server's global status counters into named
//! integer metrics:
//! - Status fetching over a scoped driver connection
//! - Status-name to metric-name mapping
//! - Collection across configured servers into an accumulator

pub mod collector;
pub mod mapping;
pub mod status;

#[cfg(test)]
mod testing;

pub use collector::*;
pub use mapping::*;
pub use status::*;
