use super::Builder;

/// `UPDATE "table"`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,
}

impl Update {
    pub fn table(table: impl Into<String>) -> Update {
        Update {
            table: table.into(),
        }
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("UPDATE ");
        builder.write_quoted(&self.table);
    }
}
