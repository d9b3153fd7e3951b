//! MySQL global status collector

use std::sync::Arc;
use zqlz_core::{DatabaseDriver, Result};

use super::{Accumulator, CollectorConfig, ServerConfig};
use crate::{MappingRules, MetricMapper, StatusFetcher};

/// Polls every configured server once per gather and forwards the mapped
/// status counters to an accumulator
#[derive(Clone)]
pub struct MysqlCollector {
    config: CollectorConfig,
    fetcher: StatusFetcher,
    mapper: MetricMapper,
}

impl MysqlCollector {
    /// Create a collector that connects through `driver`, using the default
    /// MySQL rule table
    pub fn new(driver: Arc<dyn DatabaseDriver>, config: CollectorConfig) -> Self {
        Self {
            config,
            fetcher: StatusFetcher::new(driver),
            mapper: MetricMapper::mysql(),
        }
    }

    /// Builder method: replace the rule table
    pub fn with_rules(mut self, rules: MappingRules) -> Self {
        self.mapper = MetricMapper::new(Arc::new(rules));
        self
    }

    /// Poll the configured servers in order.
    ///
    /// With no servers configured the local default instance is polled and
    /// any failure is ignored. Otherwise the first failing server ends the
    /// gather and its error is returned; later servers are not polled.
    #[tracing::instrument(skip(self, acc), fields(servers = self.config.servers.len()))]
    pub async fn gather(&self, acc: &mut dyn Accumulator) -> Result<()> {
        if self.config.disabled {
            tracing::debug!("collector disabled, skipping gather");
            return Ok(());
        }

        if self.config.servers.is_empty() {
            let server = ServerConfig::local_default();
            if let Err(e) = self.gather_server(&server, acc).await {
                tracing::debug!(error = %e, "no servers configured and local server unavailable");
            }
            return Ok(());
        }

        for server in &self.config.servers {
            self.gather_server(server, acc).await?;
        }

        Ok(())
    }

    async fn gather_server(&self, server: &ServerConfig, acc: &mut dyn Accumulator) -> Result<()> {
        tracing::debug!(address = %server.display_address(), "gathering status");

        let mapper = &self.mapper;
        let mut emitted = 0usize;
        self.fetcher
            .fetch(&server.address, |row| {
                for metric in mapper.map(&row)? {
                    acc.add(&metric.name, metric.value, None);
                    emitted += 1;
                }
                Ok(())
            })
            .await
            .inspect_err(|e| {
                tracing::debug!(address = %server.display_address(), error = %e, "gather failed");
            })?;

        tracing::debug!(address = %server.display_address(), metrics = emitted, "gathered status");
        Ok(())
    }
}
