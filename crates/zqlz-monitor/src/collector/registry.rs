//! Plugin registry for constructing collectors by name

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use zqlz_core::{Result, ZqlzError};

use super::{Accumulator, CollectorConfig, MysqlCollector};

/// A collector the host can drive without knowing its concrete type
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Registry name of the plugin
    fn name(&self) -> &str;

    /// Run one collection pass into `acc`
    async fn gather(&self, acc: &mut dyn Accumulator) -> Result<()>;
}

#[async_trait]
impl Plugin for MysqlCollector {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn gather(&self, acc: &mut dyn Accumulator) -> Result<()> {
        MysqlCollector::gather(self, acc).await
    }
}

/// Builds a plugin from its configuration
pub type PluginFactory = Arc<dyn Fn(CollectorConfig) -> Box<dyn Plugin> + Send + Sync>;

/// Registry of available collector plugins
pub struct PluginRegistry {
    factories: HashMap<String, PluginFactory>,
}

impl PluginRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with all built-in plugins registered
    pub fn with_defaults() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "mysql")]
        registry.register("mysql", |config| {
            let driver = Arc::new(zqlz_driver_mysql::MySqlDriver::new());
            Box::new(MysqlCollector::new(driver, config)) as Box<dyn Plugin>
        });

        registry
    }

    /// Register a plugin factory under `name`, replacing any previous one
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(CollectorConfig) -> Box<dyn Plugin> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::info!(plugin = %name, "registering collector plugin");
        self.factories.insert(name, Arc::new(factory));
    }

    /// Build the plugin registered as `name`
    pub fn create(&self, name: &str, config: CollectorConfig) -> Result<Box<dyn Plugin>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory(config)),
            None => {
                tracing::warn!(plugin = %name, "plugin not found in registry");
                Err(ZqlzError::NotFound(format!("Unknown plugin: {}", name)))
            }
        }
    }

    /// List all registered plugin names, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a plugin is registered
    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
