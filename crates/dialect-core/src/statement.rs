use crate::{
    clause::{Builder, Clause, Expression, Writer},
    Db, Value,
};

use indexmap::IndexMap;

/// A statement under construction.
///
/// Clauses are collected by name and rendered by [`Statement::build`] in the
/// order the caller asks for. The dialect of the owning [`Db`] decides how
/// identifiers are quoted and values bound, and any clause builder the
/// dialect registered replaces the clause's default rendering.
#[derive(Debug)]
pub struct Statement<'a> {
    db: &'a Db,

    clauses: IndexMap<&'static str, Clause>,

    /// The SQL rendered so far
    sql: String,

    /// Values bound to the placeholders in `sql`, in order
    vars: Vec<Value>,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(db: &'a Db) -> Statement<'a> {
        Statement {
            db,
            clauses: IndexMap::new(),
            sql: String::new(),
            vars: vec![],
        }
    }

    /// Adds a clause, replacing any clause with the same name.
    pub fn add_clause(&mut self, expression: impl Into<Expression>) -> &mut Self {
        let clause = Clause::new(expression);
        self.clauses.insert(clause.name, clause);
        self
    }

    pub fn clause(&self, name: &str) -> Option<&Clause> {
        self.clauses.get(name)
    }

    /// Renders the named clauses, in the order given, separated by a space.
    pub fn build(&mut self, names: &[&str]) {
        let db = self.db;
        let clauses = std::mem::take(&mut self.clauses);

        let mut first = true;
        for name in names {
            let Some(clause) = clauses.get(*name) else {
                continue;
            };

            if !first {
                self.write_char(' ');
            }
            first = false;

            match db.clause_builder(name) {
                Some(builder) => builder(clause, self),
                None => clause.build(self),
            }
        }

        self.clauses = clauses;
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn vars(&self) -> &[Value] {
        &self.vars
    }

    /// The rendered SQL with its values inlined, for logging.
    pub fn explain(&self) -> String {
        self.db.dialect().explain(&self.sql, &self.vars)
    }
}

impl Writer for Statement<'_> {
    fn write_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn write_char(&mut self, c: char) {
        self.sql.push(c);
    }
}

impl Builder for Statement<'_> {
    fn write_quoted(&mut self, name: &str) {
        self.db.dialect().quote_to(&mut self.sql, name);
    }

    fn add_var(&mut self, value: &Value) {
        self.vars.push(value.clone());
        self.db
            .dialect()
            .bind_var_to(&mut self.sql, self.vars.len(), value);
    }
}
