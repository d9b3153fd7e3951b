//! Server status fetching
//!
//! Opens a connection to one target, runs the global status statement and
//! decodes the result into raw `(name, value)` status rows.

mod fetcher;
mod row;

#[cfg(test)]
mod tests;

pub use fetcher::*;
pub use row::*;
