use super::Db;
use crate::{
    callbacks::CallbackConfig,
    driver::{Connector, Drivers},
    Dialect, Result,
};

use std::{collections::HashMap, sync::Arc};

#[derive(Debug, Default)]
pub struct Builder {
    drivers: Drivers,
}

impl Builder {
    /// Makes `connector` available to dialects under `name`.
    pub fn driver(&mut self, name: impl Into<String>, connector: impl Connector) -> &mut Self {
        self.drivers.register(name, connector);
        self
    }

    /// Opens the database, letting `dialect` initialize it.
    ///
    /// Errors raised by the dialect, including failures to open the
    /// connection pool, are returned unchanged.
    pub fn open(&self, dialect: impl Dialect) -> Result<Db> {
        let dialect: Arc<dyn Dialect> = Arc::new(dialect);

        let mut db = Db {
            dialect: dialect.clone(),
            conn_pool: None,
            clause_builders: HashMap::new(),
            callbacks: CallbackConfig::default(),
            drivers: self.drivers.clone(),
        };

        dialect.initialize(&mut db)?;

        tracing::debug!(
            dialect = dialect.name(),
            clause_builders = db.clause_builders.len(),
            "database opened"
        );

        Ok(db)
    }
}
