//! MySQL/MariaDB driver implementation

mod connection;
mod driver;

pub use connection::{DEFAULT_HOST, DEFAULT_PORT, MySqlConnection, build_opts};
pub use driver::MySqlDriver;
