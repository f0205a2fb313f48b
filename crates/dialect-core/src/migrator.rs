use crate::{schema::Field, Result};

/// Schema migration support offered by a dialect.
///
/// Dialects without migration support return `None` from
/// [`Dialect::migrator`](crate::Dialect::migrator).
pub trait Migrator: Send + Sync {
    /// Creates missing tables and columns so the database matches `fields`.
    fn auto_migrate(&self, table: &str, fields: &[Field]) -> Result<()>;

    fn has_table(&self, table: &str) -> Result<bool>;

    fn drop_table(&self, table: &str) -> Result<()>;
}
