//! In-memory driver and connection used by the unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zqlz_core::{
    ColumnMeta, Connection, DatabaseDriver, QueryResult, Result, Row, Value, ZqlzError,
};

/// What a scripted server does when polled
#[derive(Debug, Clone)]
pub enum Script {
    /// Refuse the connection
    Refuse,
    /// Accept the connection, fail the status query
    QueryFails,
    /// Accept and answer with these rows
    Rows(Vec<Row>),
    /// Accept, then lose the connection while querying
    DropsConnection,
}

/// Calls observed by a [`MockDriver`]
#[derive(Debug, Default)]
pub struct Journal {
    pub connects: Vec<String>,
    pub queries: Vec<String>,
    pub closes: Vec<String>,
}

/// Driver answering from a per-address script
#[derive(Clone)]
pub struct MockDriver {
    name: &'static str,
    scripts: HashMap<String, Script>,
    journal: Arc<Mutex<Journal>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            name: "mysql",
            scripts: HashMap::new(),
            journal: Arc::new(Mutex::new(Journal::default())),
        }
    }

    /// Pretend to be a driver for another database
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_server(mut self, address: &str, script: Script) -> Self {
        self.scripts.insert(address.to_string(), script);
        self
    }

    pub fn journal(&self) -> std::sync::MutexGuard<'_, Journal> {
        self.journal.lock().expect("journal lock poisoned")
    }
}

#[async_trait]
impl DatabaseDriver for MockDriver {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn connect(&self, address: &str) -> Result<Box<dyn Connection>> {
        self.journal().connects.push(address.to_string());
        match self.scripts.get(address) {
            None | Some(Script::Refuse) => Err(ZqlzError::Connection(format!(
                "connection refused: {}",
                address
            ))),
            Some(script) => Ok(Box::new(MockConnection {
                driver_name: self.name,
                address: address.to_string(),
                script: script.clone(),
                journal: self.journal.clone(),
                closed: Mutex::new(false),
            })),
        }
    }
}

pub struct MockConnection {
    driver_name: &'static str,
    address: String,
    script: Script,
    journal: Arc<Mutex<Journal>>,
    closed: Mutex<bool>,
}

#[async_trait]
impl Connection for MockConnection {
    fn driver_name(&self) -> &str {
        self.driver_name
    }

    async fn query(&self, sql: &str, _params: &[Value]) -> Result<QueryResult> {
        self.journal
            .lock()
            .expect("journal lock poisoned")
            .queries
            .push(sql.to_string());
        match &self.script {
            Script::QueryFails => Err(ZqlzError::Query(
                "Access denied; you need the PROCESS privilege".to_string(),
            )),
            Script::DropsConnection => Err(ZqlzError::Connection(
                "server has gone away".to_string(),
            )),
            Script::Rows(rows) => Ok(QueryResult {
                columns: vec![
                    ColumnMeta {
                        name: "Variable_name".to_string(),
                        ordinal: 0,
                        ..Default::default()
                    },
                    ColumnMeta {
                        name: "Value".to_string(),
                        ordinal: 1,
                        ..Default::default()
                    },
                ],
                rows: rows.clone(),
                ..Default::default()
            }),
            Script::Refuse => unreachable!("refused scripts never produce a connection"),
        }
    }

    async fn close(&self) -> Result<()> {
        *self.closed.lock().expect("closed lock poisoned") = true;
        self.journal
            .lock()
            .expect("journal lock poisoned")
            .closes
            .push(self.address.clone());
        Ok(())
    }

    fn is_closed(&self) -> bool {
        *self.closed.lock().expect("closed lock poisoned")
    }
}

/// A `(Variable_name, Value)` row the way MySQL reports it
pub fn status(name: &str, value: &str) -> Row {
    Row::new(
        vec!["Variable_name".to_string(), "Value".to_string()],
        vec![Value::String(name.to_string()), Value::String(value.to_string())],
    )
}

/// A row with arbitrary values
pub fn raw_row(values: Vec<Value>) -> Row {
    let columns = (0..values.len()).map(|i| format!("col{}", i)).collect();
    Row::new(columns, values)
}
