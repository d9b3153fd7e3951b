//! Metric collection
//!
//! Polls configured servers for their global status and forwards the mapped
//! metrics to an [`Accumulator`].

mod accumulator;
mod config;
mod mysql;
mod registry;


pub use accumulator::*;
pub use config::*;
pub use mysql::*;
pub use registry::*;
