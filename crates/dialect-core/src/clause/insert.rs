use super::Builder;

/// `INSERT INTO "table"`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
}

impl Insert {
    pub fn table(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
        }
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("INSERT INTO ");
        builder.write_quoted(&self.table);
    }
}
