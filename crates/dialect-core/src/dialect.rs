use crate::{
    clause::{Expression, Writer},
    schema::Field,
    Db, Migrator, Result, Value,
};

use std::fmt::Debug;

/// Adapts SQL generation to one database product.
///
/// The [`Db`] calls into its dialect whenever generated SQL depends on the
/// target database: column types, identifier quoting, bind placeholders and
/// the way statements are logged.
pub trait Dialect: Debug + Send + Sync + 'static {
    /// Name of the database product, e.g. `"vertica"`.
    fn name(&self) -> &str;

    /// Prepares `db` for use with this dialect.
    ///
    /// Called once while the database is opened. Implementations register
    /// callbacks and clause builders, and install the connection pool.
    fn initialize(&self, db: &mut Db) -> Result<()>;

    /// Schema migration support, if the dialect has any.
    fn migrator(&self, db: &Db) -> Option<Box<dyn Migrator>>;

    /// The SQL column type for `field`.
    fn data_type_of(&self, field: &Field) -> String;

    /// The expression inserted for `field` when the caller supplies no value.
    fn default_value_of(&self, field: &Field) -> Expression;

    /// Writes the placeholder for the bind variable at `position` (1-based).
    fn bind_var_to(&self, writer: &mut dyn Writer, position: usize, value: &Value);

    /// Writes `s` quoted as an identifier.
    fn quote_to(&self, writer: &mut dyn Writer, s: &str);

    /// Renders `sql` with `vars` inlined, for logging.
    fn explain(&self, sql: &str, vars: &[Value]) -> String;
}
