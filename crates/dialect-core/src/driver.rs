use crate::{async_trait, Result, Value};

use std::{collections::HashMap, fmt::Debug, sync::Arc};

/// A pool of connections to one database, supplied by a vendor driver.
///
/// The pool owns connection lifecycle; dialects only hand it finished SQL.
#[async_trait]
pub trait ConnPool: Debug + Send + Sync + 'static {
    /// Executes a statement, returning the number of affected rows.
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<u64>;
}

/// Opens a [`ConnPool`] from a driver-specific connection string.
pub trait Connector: Send + Sync + 'static {
    fn open(&self, dsn: &str) -> Result<Arc<dyn ConnPool>>;
}

impl<F> Connector for F
where
    F: Fn(&str) -> Result<Arc<dyn ConnPool>> + Send + Sync + 'static,
{
    fn open(&self, dsn: &str) -> Result<Arc<dyn ConnPool>> {
        self(dsn)
    }
}

/// Connectors registered by driver name.
#[derive(Clone, Default)]
pub struct Drivers {
    connectors: HashMap<String, Arc<dyn Connector>>,
}

impl Drivers {
    pub fn register(&mut self, name: impl Into<String>, connector: impl Connector) {
        self.connectors.insert(name.into(), Arc::new(connector));
    }

    /// Opens a pool through the connector registered under `name`.
    pub fn open(&self, name: &str, dsn: &str) -> Result<Arc<dyn ConnPool>> {
        let connector = self
            .connectors
            .get(name)
            .ok_or_else(|| crate::Error::unknown_driver(name))?;

        connector.open(dsn)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connectors.contains_key(name)
    }
}

impl Debug for Drivers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.connectors.keys()).finish()
    }
}
