use super::{write_quoted_list, Builder};
use crate::Value;

/// The column list and rows of an `INSERT`.
///
/// Renders as `("a","b") VALUES (?,?),(?,?)`, or `DEFAULT VALUES` when no
/// columns are given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

impl Values {
    pub fn new<I, S>(columns: I) -> Values
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Values {
            columns: columns.into_iter().map(Into::into).collect(),
            values: vec![],
        }
    }

    pub fn row<I, V>(mut self, row: I) -> Values
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        if self.columns.is_empty() {
            builder.write_str("DEFAULT VALUES");
            return;
        }

        builder.write_char('(');
        write_quoted_list(builder, &self.columns);
        builder.write_str(") VALUES ");

        for (i, row) in self.values.iter().enumerate() {
            if i > 0 {
                builder.write_char(',');
            }
            builder.write_char('(');
            builder.add_vars(row);
            builder.write_char(')');
        }
    }
}
