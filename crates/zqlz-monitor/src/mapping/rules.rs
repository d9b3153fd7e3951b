//! Mapping rule table

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Maps every status name starting with `on_server` to `in_export` followed
/// by the rest of the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixRule {
    /// Server-side name prefix, e.g. `Bytes_`
    pub on_server: Cow<'static, str>,
    /// Exported name prefix, e.g. `mysql_bytes_`
    pub in_export: Cow<'static, str>,
}

impl PrefixRule {
    pub const fn new(on_server: &'static str, in_export: &'static str) -> Self {
        Self {
            on_server: Cow::Borrowed(on_server),
            in_export: Cow::Borrowed(in_export),
        }
    }

    /// Exported name for `name`, if this rule matches it
    pub fn apply(&self, name: &str) -> Option<String> {
        name.strip_prefix(&*self.on_server)
            .map(|rest| format!("{}{}", self.in_export, rest))
    }
}

/// Maps one status name to one fixed exported name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactRule {
    /// Server-side status name, e.g. `Queries`
    pub on_server: Cow<'static, str>,
    /// Exported metric name, e.g. `mysql_queries`
    pub in_export: Cow<'static, str>,
}

impl ExactRule {
    pub const fn new(on_server: &'static str, in_export: &'static str) -> Self {
        Self {
            on_server: Cow::Borrowed(on_server),
            in_export: Cow::Borrowed(in_export),
        }
    }

    /// Whether this rule is keyed on `name`
    pub fn matches(&self, name: &str) -> bool {
        self.on_server == name
    }
}

/// Default MySQL prefix rules, in match order
pub const MYSQL_PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule::new("Bytes_", "mysql_bytes_"),
    PrefixRule::new("Com_", "mysql_commands_"),
    PrefixRule::new("Handler_", "mysql_handler_"),
    PrefixRule::new("Innodb_", "mysql_innodb_"),
    PrefixRule::new("Threads_", "mysql_threads_"),
];

/// Default MySQL exact rules
pub const MYSQL_EXACT_RULES: &[ExactRule] = &[
    ExactRule::new("Queries", "mysql_queries"),
    ExactRule::new("Slow_queries", "mysql_slow_queries"),
];

/// Ordered, immutable rule table
///
/// Prefix rules are not mutually exclusive: a name matching several of them
/// is exported once per matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRules {
    #[serde(default)]
    prefix: Vec<PrefixRule>,
    #[serde(default)]
    exact: Vec<ExactRule>,
}

impl MappingRules {
    /// Create a rule table from explicit rules
    pub fn new(prefix: Vec<PrefixRule>, exact: Vec<ExactRule>) -> Self {
        Self { prefix, exact }
    }

    /// The default MySQL table
    pub fn mysql() -> Self {
        Self::new(MYSQL_PREFIX_RULES.to_vec(), MYSQL_EXACT_RULES.to_vec())
    }

    /// Prefix rules, in match order
    pub fn prefix_rules(&self) -> &[PrefixRule] {
        &self.prefix
    }

    /// Exact rules, in match order
    pub fn exact_rules(&self) -> &[ExactRule] {
        &self.exact
    }

    /// Check if the table has no rules at all
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.exact.is_empty()
    }
}

impl Default for MappingRules {
    fn default() -> Self {
        Self::mysql()
    }
}
