//! Status-name to metric-name mapping
//!
//! Translates raw status rows into exported metrics using an immutable rule
//! table. Anything the table does not recognize is dropped.

mod mapper;
mod rules;


pub use mapper::*;
pub use rules::*;
