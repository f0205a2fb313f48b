mod delete;
pub use delete::Delete;

mod expr;
pub use expr::Expr;

mod from;
pub use from::From;

mod insert;
pub use insert::Insert;

mod limit;
pub use limit::Limit;

mod order_by;
pub use order_by::{OrderBy, OrderByColumn};

mod select;
pub use select::Select;

mod set;
pub use set::{Assignment, Set};

mod update;
pub use update::Update;

mod values;
pub use values::Values;

mod where_;
pub use where_::Where;

use crate::Value;

use std::sync::Arc;

/// Destination for generated SQL text.
pub trait Writer {
    fn write_str(&mut self, s: &str);

    fn write_char(&mut self, c: char);
}

impl Writer for String {
    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }
}

/// A [`Writer`] that also knows how the current dialect quotes identifiers
/// and binds values.
pub trait Builder: Writer {
    /// Writes `name` quoted as an identifier.
    fn write_quoted(&mut self, name: &str);

    /// Binds `value` and writes its placeholder.
    fn add_var(&mut self, value: &Value);

    /// Binds each value, writing the placeholders comma separated.
    fn add_vars(&mut self, values: &[Value]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.write_char(',');
            }
            self.add_var(value);
        }
    }
}

/// Renders a clause in place of its default rendering.
///
/// Dialects register builders by clause name on the [`Db`](crate::Db).
pub type ClauseBuilder = Arc<dyn Fn(&Clause, &mut dyn Builder) + Send + Sync>;

/// One clause of a statement, e.g. the `WHERE` of a `SELECT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Name the clause is registered under, e.g. `"ORDER BY"`.
    pub name: &'static str,

    pub expression: Expression,
}

impl Clause {
    pub fn new(expression: impl Into<Expression>) -> Clause {
        let expression = expression.into();
        Clause {
            name: expression.name(),
            expression,
        }
    }

    /// Renders the clause with its default builder.
    pub fn build(&self, builder: &mut dyn Builder) {
        self.expression.build(builder);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Delete(Delete),
    Expr(Expr),
    From(From),
    Insert(Insert),
    Limit(Limit),
    OrderBy(OrderBy),
    Select(Select),
    Set(Set),
    Update(Update),
    Values(Values),
    Where(Where),
}

impl Expression {
    /// The clause name this expression is stored under in a statement.
    pub fn name(&self) -> &'static str {
        match self {
            Expression::Delete(_) => "DELETE",
            Expression::Expr(_) => "EXPR",
            Expression::From(_) => "FROM",
            Expression::Insert(_) => "INSERT",
            Expression::Limit(_) => "LIMIT",
            Expression::OrderBy(_) => "ORDER BY",
            Expression::Select(_) => "SELECT",
            Expression::Set(_) => "SET",
            Expression::Update(_) => "UPDATE",
            Expression::Values(_) => "VALUES",
            Expression::Where(_) => "WHERE",
        }
    }

    pub fn build(&self, builder: &mut dyn Builder) {
        match self {
            Expression::Delete(e) => e.build(builder),
            Expression::Expr(e) => e.build(builder),
            Expression::From(e) => e.build(builder),
            Expression::Insert(e) => e.build(builder),
            Expression::Limit(e) => e.build(builder),
            Expression::OrderBy(e) => e.build(builder),
            Expression::Select(e) => e.build(builder),
            Expression::Set(e) => e.build(builder),
            Expression::Update(e) => e.build(builder),
            Expression::Values(e) => e.build(builder),
            Expression::Where(e) => e.build(builder),
        }
    }
}

macro_rules! impl_into_expression {
    ( $( $ty:ident ),+ ) => {
        $(
            impl std::convert::From<$ty> for Expression {
                fn from(value: $ty) -> Self {
                    Expression::$ty(value)
                }
            }
        )+
    };
}

impl_into_expression!(
    Delete, Expr, From, Insert, Limit, OrderBy, Select, Set, Update, Values, Where
);

/// Writes each identifier quoted, comma separated.
fn write_quoted_list(builder: &mut dyn Builder, names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            builder.write_char(',');
        }
        builder.write_quoted(name);
    }
}
