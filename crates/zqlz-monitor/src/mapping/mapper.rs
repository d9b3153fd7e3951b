//! Metric mapper

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zqlz_core::Result;

use super::MappingRules;
use crate::StatusRow;
use crate::collector::Tags;

/// A named integer metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Exported metric name
    pub name: String,
    /// Metric value
    pub value: i64,
    /// Tags attached by the sink's caller, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

impl Metric {
    /// Create an untagged metric
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            tags: None,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Applies a rule table to status rows
#[derive(Debug, Clone)]
pub struct MetricMapper {
    rules: Arc<MappingRules>,
}

impl MetricMapper {
    /// Create a mapper over `rules`
    pub fn new(rules: Arc<MappingRules>) -> Self {
        Self { rules }
    }

    /// Mapper over the default MySQL table
    pub fn mysql() -> Self {
        Self::new(Arc::new(MappingRules::mysql()))
    }

    /// Get the rule table
    pub fn rules(&self) -> &MappingRules {
        &self.rules
    }

    /// Map one status row to zero or more metrics.
    ///
    /// Phase one collects every matching prefix rule. Phase two consults the
    /// exact rules, and only runs when phase one matched nothing. An exact
    /// match whose value is not an integer is an error; a prefix match with
    /// such a value is exported as 0.
    pub fn map(&self, row: &StatusRow) -> Result<Vec<Metric>> {
        let prefixed = self.map_prefixed(row);
        if !prefixed.is_empty() {
            return Ok(prefixed);
        }

        Ok(self.map_exact(row)?.into_iter().collect())
    }

    fn map_prefixed(&self, row: &StatusRow) -> Vec<Metric> {
        let names: Vec<String> = self
            .rules
            .prefix_rules()
            .iter()
            .filter_map(|rule| rule.apply(&row.name))
            .collect();

        if names.is_empty() {
            return Vec::new();
        }

        let value = row.parse_i64().unwrap_or_else(|e| {
            tracing::debug!(status = %row.name, error = %e, "exporting non-integer status as 0");
            0
        });

        names
            .into_iter()
            .map(|name| Metric::new(name, value))
            .collect()
    }

    fn map_exact(&self, row: &StatusRow) -> Result<Option<Metric>> {
        match self
            .rules
            .exact_rules()
            .iter()
            .find(|rule| rule.matches(&row.name))
        {
            Some(rule) => Ok(Some(Metric::new(
                rule.in_export.to_string(),
                row.parse_i64()?,
            ))),
            None => Ok(None),
        }
    }
}

impl Default for MetricMapper {
    fn default() -> Self {
        Self::mysql()
    }
}
