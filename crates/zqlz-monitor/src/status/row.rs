//! Raw status rows as reported by the server

use serde::{Deserialize, Serialize};
use zqlz_core::{Result, Row, Value, ZqlzError};

/// Untyped status value as read from the server
///
/// Status tables report every counter as text, so nothing is interpreted at
/// read time. Conversion to a number happens only through [`StatusValue::parse_i64`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusValue {
    /// Textual value
    Text(String),
    /// Raw bytes (not guaranteed to be UTF-8)
    Bytes(Vec<u8>),
    /// SQL NULL
    Null,
}

impl StatusValue {
    /// Build a status value from a driver value.
    ///
    /// Scalars are rendered as text. Temporal values are not something a
    /// status table ever reports and are rejected as a decode error.
    pub fn decode(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(StatusValue::Null),
            Value::String(s) | Value::Decimal(s) => Ok(StatusValue::Text(s.clone())),
            Value::Bytes(b) => Ok(StatusValue::Bytes(b.clone())),
            Value::Bool(_)
            | Value::Int8(_)
            | Value::Int16(_)
            | Value::Int32(_)
            | Value::Int64(_)
            | Value::Float32(_)
            | Value::Float64(_) => Ok(StatusValue::Text(value.to_string())),
            Value::Date(_) | Value::Time(_) | Value::DateTime(_) => Err(ZqlzError::Decode(
                format!("unexpected {} in status value column", value.type_name()),
            )),
        }
    }

    /// Parse the value as a base-10 signed 64-bit integer
    pub fn parse_i64(&self) -> Result<i64> {
        let text = match self {
            StatusValue::Text(s) => s.as_str(),
            StatusValue::Bytes(b) => std::str::from_utf8(b).map_err(|_| {
                ZqlzError::Coercion(format!("{} is not valid UTF-8", self))
            })?,
            StatusValue::Null => {
                return Err(ZqlzError::Coercion("NULL is not an integer".to_string()));
            }
        };

        text.parse::<i64>()
            .map_err(|e| ZqlzError::Coercion(format!("{} is not an integer: {}", self, e)))
    }
}

impl std::fmt::Display for StatusValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusValue::Text(s) => write!(f, "{:?}", s),
            StatusValue::Bytes(b) => write!(f, "{:?}", String::from_utf8_lossy(b)),
            StatusValue::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for StatusValue {
    fn from(value: &str) -> Self {
        StatusValue::Text(value.to_string())
    }
}

/// One `(name, value)` pair from the server's status table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    /// Status variable name, e.g. `Bytes_received`
    pub name: String,
    /// Raw value
    pub value: StatusValue,
}

impl StatusRow {
    /// Create a new status row
    pub fn new(name: impl Into<String>, value: impl Into<StatusValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Decode a result row of shape `(name, value)`
    pub fn decode(row: &Row) -> Result<Self> {
        let (Some(name), Some(value), 2) = (row.get(0), row.get(1), row.len()) else {
            return Err(ZqlzError::Decode(format!(
                "status row has {} columns [{}], expected 2 (name, value)",
                row.len(),
                row.columns().join(", ")
            )));
        };

        let name = match name {
            Value::String(s) => s.clone(),
            Value::Bytes(b) => String::from_utf8(b.clone()).map_err(|_| {
                ZqlzError::Decode("status name is not valid UTF-8".to_string())
            })?,
            other => {
                return Err(ZqlzError::Decode(format!(
                    "status name must be text, got {}",
                    other.type_name()
                )));
            }
        };

        let value = StatusValue::decode(value).map_err(|_| {
            ZqlzError::Decode(format!(
                "status {} has unexpected {} value",
                name,
                value.type_name()
            ))
        })?;

        Ok(Self { name, value })
    }

    /// Parse the value as an integer, naming the status variable on failure
    pub fn parse_i64(&self) -> Result<i64> {
        self.value.parse_i64().map_err(|_| {
            ZqlzError::Coercion(format!(
                "status {} has non-integer value {}",
                self.name, self.value
            ))
        })
    }
}
