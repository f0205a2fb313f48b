use super::{write_quoted_list, Builder};

/// `SELECT *` or `SELECT "a","b"`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    /// Columns to project; all columns when empty.
    pub columns: Vec<String>,
}

impl Select {
    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("SELECT ");
        if self.columns.is_empty() {
            builder.write_char('*');
        } else {
            write_quoted_list(builder, &self.columns);
        }
    }
}
