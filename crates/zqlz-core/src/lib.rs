//! ZQLZ Core - Core abstractions and traits shared by ZQLZ crates
//!
//! This crate provides the fundamental traits and types that all other
//! ZQLZ crates depend on. It defines:
//!
//! - `DatabaseDriver` - Trait for opening connections by address
//! - `Connection` - Trait for database connections
//! - Common types like `Value`, `Row`, `ColumnMeta` and `QueryResult`
//! - `ZqlzError` and the crate-wide `Result` alias

mod connection;
mod driver;
mod error;
mod types;


pub use connection::*;
pub use driver::*;
pub use error::*;
pub use types::*;
