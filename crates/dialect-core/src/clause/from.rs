use super::{write_quoted_list, Builder};

/// `FROM "a","b"`
#[derive(Debug, Clone, PartialEq)]
pub struct From {
    pub tables: Vec<String>,
}

impl From {
    pub fn table(name: impl Into<String>) -> From {
        From {
            tables: vec![name.into()],
        }
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("FROM ");
        write_quoted_list(builder, &self.tables);
    }
}
