//! Vertica support for the mapping layer in [`dialect_core`].
//!
//! ```no_run
//! use dialect_core::Db;
//!
//! # fn main() -> dialect_core::Result<()> {
//! let _db = Db::builder()
//!     // .driver("vertica", connector)
//!     .open(dialect_vertica::open("vertica://dbadmin:@localhost:5433/docker"))?;
//! # Ok(())
//! # }
//! ```

mod clause;

mod config;
pub use config::{Config, ConnectOptions};

mod data_type;

mod quote;

use dialect_core::{
    callbacks::CallbackConfig,
    clause::{ClauseBuilder, Expr, Expression, Writer},
    logger,
    schema::Field,
    Db, Dialect, Migrator, Result, Value,
};
use std::collections::HashMap;

/// Name of the dialect, and of the driver its connection pool is opened
/// with by default.
pub const DRIVER_NAME: &str = "vertica";

/// The Vertica dialect.
#[derive(Debug, Clone)]
pub struct Dialector {
    config: Config,
}

/// A dialect connecting to `dsn` through the `vertica` driver.
pub fn open(dsn: impl Into<String>) -> Dialector {
    Dialector {
        config: Config {
            dsn: dsn.into(),
            ..Config::default()
        },
    }
}

pub fn new(config: Config) -> Dialector {
    Dialector { config }
}

impl Dialector {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clause builders installed on the database during initialization.
    pub fn clause_builders(&self) -> HashMap<&'static str, ClauseBuilder> {
        clause::clause_builders()
    }
}

impl Dialect for Dialector {
    fn name(&self) -> &str {
        DRIVER_NAME
    }

    fn initialize(&self, db: &mut Db) -> Result<()> {
        db.register_default_callbacks(CallbackConfig {
            update_clauses: vec!["UPDATE", "SET", "WHERE", "ORDER BY", "LIMIT"],
            delete_clauses: vec!["DELETE", "FROM", "WHERE", "ORDER BY", "LIMIT"],
            ..CallbackConfig::default()
        });

        let pool = match &self.config.conn {
            Some(conn) => {
                tracing::debug!(dialect = DRIVER_NAME, "using provided connection pool");
                conn.clone()
            }
            None => {
                let driver = self.config.driver_name();

                if driver == DRIVER_NAME {
                    let opts = ConnectOptions::parse(&self.config.dsn)?;
                    tracing::debug!(
                        host = %opts.host,
                        port = opts.port,
                        database = %opts.database,
                        "opening vertica connection pool"
                    );
                } else {
                    tracing::debug!(driver, "opening connection pool");
                }

                db.open_pool(driver, &self.config.dsn)?
            }
        };
        db.set_conn_pool(pool);

        for (name, builder) in self.clause_builders() {
            db.register_clause_builder(name, builder);
        }

        Ok(())
    }

    fn migrator(&self, _db: &Db) -> Option<Box<dyn Migrator>> {
        None
    }

    fn data_type_of(&self, field: &Field) -> String {
        data_type::data_type_of(field, self.config.default_string_size)
    }

    fn default_value_of(&self, _field: &Field) -> Expression {
        Expr::new("DEFAULT").into()
    }

    fn bind_var_to(&self, writer: &mut dyn Writer, _position: usize, _value: &Value) {
        writer.write_char('?');
    }

    fn quote_to(&self, writer: &mut dyn Writer, s: &str) {
        quote::quote_to(writer, s);
    }

    fn explain(&self, sql: &str, vars: &[Value]) -> String {
        logger::explain_sql(sql, None, "'", vars)
    }
}
