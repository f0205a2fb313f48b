use super::Builder;
use crate::Value;

/// Raw SQL with `?` placeholders for its values.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub sql: String,
    pub vars: Vec<Value>,
}

impl Expr {
    pub fn new(sql: impl Into<String>) -> Expr {
        Expr {
            sql: sql.into(),
            vars: vec![],
        }
    }

    /// Binds the next value.
    pub fn bind(mut self, value: impl Into<Value>) -> Expr {
        self.vars.push(value.into());
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        let mut vars = self.vars.iter();

        // Each `?` is replaced by the dialect placeholder of the next value.
        // Once the values run out the remaining `?` are written literally.
        let mut rest = &self.sql[..];
        while let Some(pos) = rest.find('?') {
            builder.write_str(&rest[..pos]);
            match vars.next() {
                Some(value) => builder.add_var(value),
                None => builder.write_char('?'),
            }
            rest = &rest[pos + 1..];
        }
        builder.write_str(rest);
    }
}

impl From<&str> for Expr {
    fn from(sql: &str) -> Self {
        Expr::new(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::test_util::build;

    #[test]
    fn placeholders_are_bound_in_order() {
        let out = build(Expr::new("a = ? AND b = ?").bind(1).bind("x"));
        assert_eq!(out.sql, "a = $1 AND b = $2");
        assert_eq!(out.vars, vec![Value::I64(1), Value::from("x")]);
    }

    #[test]
    fn surplus_placeholders_stay_literal() {
        let out = build(Expr::new("a = ? OR b = ?").bind(true));
        assert_eq!(out.sql, "a = $1 OR b = ?");
    }

    #[test]
    fn plain_sql_passes_through() {
        assert_eq!(build(Expr::new("DEFAULT")).sql, "DEFAULT");
    }
}
