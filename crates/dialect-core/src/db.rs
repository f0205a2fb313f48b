mod builder;
pub use builder::Builder;

use crate::{
    callbacks::{CallbackConfig, Operation},
    clause::{ClauseBuilder, Expr},
    driver::{ConnPool, Drivers},
    Dialect, Error, Migrator, Result, Statement,
};

use std::{collections::HashMap, fmt, sync::Arc, time::Instant};

/// An open database: a dialect, the connection pool it installed, and the
/// clause rendering rules it registered.
pub struct Db {
    dialect: Arc<dyn Dialect>,

    /// Installed by the dialect during initialization
    conn_pool: Option<Arc<dyn ConnPool>>,

    /// Clause rendering overrides, by clause name
    clause_builders: HashMap<String, ClauseBuilder>,

    callbacks: CallbackConfig,

    /// Connectors available to the dialect when it opens its pool
    drivers: Drivers,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.dialect
    }

    /// Replaces the clause order used for each operation.
    pub fn register_default_callbacks(&mut self, config: CallbackConfig) {
        self.callbacks = config;
    }

    pub fn callbacks(&self) -> &CallbackConfig {
        &self.callbacks
    }

    /// Opens a connection pool through the connector registered as `driver`.
    pub fn open_pool(&self, driver: &str, dsn: &str) -> Result<Arc<dyn ConnPool>> {
        self.drivers.open(driver, dsn)
    }

    pub fn set_conn_pool(&mut self, pool: Arc<dyn ConnPool>) {
        self.conn_pool = Some(pool);
    }

    pub fn conn_pool(&self) -> Result<&Arc<dyn ConnPool>> {
        self.conn_pool
            .as_ref()
            .ok_or_else(|| crate::err!("no connection pool; dialect={}", self.dialect.name()))
    }

    pub fn register_clause_builder(&mut self, name: impl Into<String>, builder: ClauseBuilder) {
        self.clause_builders.insert(name.into(), builder);
    }

    pub fn clause_builder(&self, name: &str) -> Option<&ClauseBuilder> {
        self.clause_builders.get(name)
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement::new(self)
    }

    /// Renders `stmt` with the clauses registered for `op`.
    pub fn build(&self, op: Operation, stmt: &mut Statement<'_>) {
        stmt.build(self.callbacks.clauses(op));
    }

    /// A statement made of raw SQL.
    pub fn raw(&self, expr: impl Into<Expr>) -> Statement<'_> {
        let expr: Expr = expr.into();
        let mut stmt = self.statement();
        stmt.add_clause(expr);
        stmt.build(&["EXPR"]);
        stmt
    }

    /// Executes a rendered statement on the connection pool.
    pub async fn exec(&self, stmt: &Statement<'_>) -> Result<u64> {
        let pool = self.conn_pool()?;

        let start = Instant::now();
        let res = pool.exec(stmt.sql(), stmt.vars()).await;
        let elapsed = start.elapsed();

        match &res {
            Ok(rows) => tracing::debug!(
                sql = %stmt.explain(),
                rows = *rows,
                ?elapsed,
                "statement executed"
            ),
            Err(err) => tracing::warn!(
                sql = %stmt.explain(),
                %err,
                ?elapsed,
                "statement failed"
            ),
        }

        res
    }

    /// The dialect's migrator.
    pub fn migrator(&self) -> Result<Box<dyn Migrator>> {
        self.dialect.migrator(self).ok_or_else(|| {
            Error::unsupported_feature(format!(
                "schema migration is not supported by the `{}` dialect",
                self.dialect.name()
            ))
        })
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("dialect", &self.dialect)
            .field("conn_pool", &self.conn_pool)
            .field(
                "clause_builders",
                &self.clause_builders.keys().collect::<Vec<_>>(),
            )
            .field("callbacks", &self.callbacks)
            .field("drivers", &self.drivers)
            .finish()
    }
}
