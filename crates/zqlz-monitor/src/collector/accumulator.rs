//! Metric sinks

use std::collections::BTreeMap;

use crate::Metric;

/// Key-value tags attached to a metric
pub type Tags = BTreeMap<String, String>;

/// Receives metrics produced by a collector
pub trait Accumulator: Send {
    /// Record one measurement
    fn add(&mut self, measurement: &str, value: i64, tags: Option<&Tags>);
}

/// Accumulator that keeps every metric in arrival order
#[derive(Debug, Clone, Default)]
pub struct MetricBuffer {
    metrics: Vec<Metric>,
}

impl MetricBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics recorded so far
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Take the recorded metrics, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<Metric> {
        std::mem::take(&mut self.metrics)
    }

    /// Last recorded value for `name`
    pub fn get(&self, name: &str) -> Option<i64> {
        self.metrics
            .iter()
            .rev()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl Accumulator for MetricBuffer {
    fn add(&mut self, measurement: &str, value: i64, tags: Option<&Tags>) {
        self.metrics.push(Metric {
            name: measurement.to_string(),
            value,
            tags: tags.cloned(),
        });
    }
}
