//! Status fetcher
//!
//! One fetch is one scoped connection: open, run the status statement, hand
//! every decoded row to the caller, close.

use std::sync::Arc;
use zqlz_core::{Connection, DatabaseDriver, QueryResult, Result, Row, ZqlzError};

use super::StatusRow;

/// Query builder for database-specific global status statements
pub struct StatusQuery;

impl StatusQuery {
    /// Get the global status statement for MySQL/MariaDB
    ///
    /// The versioned comment keeps the statement valid on servers older than
    /// 5.0.2, which only know `SHOW STATUS`.
    pub fn mysql() -> &'static str {
        "SHOW /*!50002 GLOBAL */ STATUS"
    }

    /// Get the appropriate statement for a driver
    pub fn for_driver(driver_name: &str) -> Result<&'static str> {
        match driver_name {
            "mysql" | "mariadb" => Ok(Self::mysql()),
            _ => Err(ZqlzError::NotSupported(format!(
                "Global status query not available for driver: {}",
                driver_name
            ))),
        }
    }
}

/// Decoded view over a status query result
///
/// Rows are decoded lazily and in server order, so a malformed row surfaces
/// only after every row before it has been handed out.
pub struct StatusRows {
    rows: std::vec::IntoIter<Row>,
}

impl StatusRows {
    /// A result with no rows
    pub fn empty() -> Self {
        Self {
            rows: Vec::new().into_iter(),
        }
    }
}

impl From<QueryResult> for StatusRows {
    fn from(result: QueryResult) -> Self {
        Self {
            rows: result.rows.into_iter(),
        }
    }
}

impl Iterator for StatusRows {
    type Item = Result<StatusRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| StatusRow::decode(&row))
    }
}

/// Run the status statement on an open connection.
///
/// A failing statement (missing privilege, unsupported syntax, a dialect
/// without a status statement) yields no rows instead of an error. Losing the
/// connection is still an error.
pub async fn query_status(conn: &dyn Connection) -> Result<StatusRows> {
    let sql = match StatusQuery::for_driver(conn.driver_name()) {
        Ok(sql) => sql,
        Err(e) => {
            tracing::warn!(driver = %conn.driver_name(), error = %e, "no status query for driver");
            return Ok(StatusRows::empty());
        }
    };

    match conn.query(sql, &[]).await {
        Ok(result) => {
            tracing::debug!(rows = result.row_count(), "status query returned");
            Ok(result.into())
        }
        Err(e) if e.is_query_error() => {
            tracing::warn!(error = %e, "status query failed, reporting no data for server");
            Ok(StatusRows::empty())
        }
        Err(e) => Err(e),
    }
}

/// Fetches raw status rows through an injected driver
#[derive(Clone)]
pub struct StatusFetcher {
    driver: Arc<dyn DatabaseDriver>,
}

impl StatusFetcher {
    /// Create a fetcher that opens connections with `driver`
    pub fn new(driver: Arc<dyn DatabaseDriver>) -> Self {
        Self { driver }
    }

    /// Fetch the status of the server at `address`, passing each row to `visit`.
    ///
    /// The connection is closed before returning on every path. Failing to
    /// connect, a malformed row or an error from `visit` ends the fetch with
    /// that error.
    pub async fn fetch<F>(&self, address: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(StatusRow) -> Result<()> + Send,
    {
        let conn = self.driver.connect(address).await?;

        let outcome = Self::fetch_from(conn.as_ref(), &mut visit).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close status connection");
        }

        outcome
    }

    async fn fetch_from<F>(conn: &dyn Connection, visit: &mut F) -> Result<()>
    where
        F: FnMut(StatusRow) -> Result<()> + Send,
    {
        for row in query_status(conn).await? {
            visit(row?)?;
        }
        Ok(())
    }
}
