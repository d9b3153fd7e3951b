//! Database driver trait definition

use crate::{Connection, Result};
use async_trait::async_trait;

/// A database driver that opens connections from an address string
///
/// The address format belongs to the driver. An empty address asks the
/// driver for its local default instance.
#[async_trait]
pub trait DatabaseDriver: Send + Sync {
    /// Driver identifier (e.g., "mysql")
    fn name(&self) -> &'static str;

    /// Open a connection to `address`
    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>>;
}
