//! MySQL driver implementation

use async_trait::async_trait;
use zqlz_core::{Connection, DatabaseDriver, Result};

use crate::MySqlConnection;

/// MySQL database driver
pub struct MySqlDriver;

impl MySqlDriver {
    /// Create a new MySQL driver instance
    pub fn new() -> Self {
        tracing::debug!("MySQL driver initialized");
        Self
    }
}

impl Default for MySqlDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseDriver for MySqlDriver {
    fn name(&self) -> &'static str {
        "mysql"
    }

    #[tracing::instrument(skip(self, address))]
    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>> {
        let conn = MySqlConnection::connect(address).await.map_err(|e| {
            tracing::error!(error = %e, "failed to connect to MySQL server");
            e
        })?;
        Ok(Box::new(conn))
    }
}
