use super::Builder;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByColumn {
    pub column: String,
    pub desc: bool,
}

/// `ORDER BY "a" DESC,"b"`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBy {
    pub columns: Vec<OrderByColumn>,
}

impl OrderBy {
    pub fn asc(mut self, column: impl Into<String>) -> OrderBy {
        self.columns.push(OrderByColumn {
            column: column.into(),
            desc: false,
        });
        self
    }

    pub fn desc(mut self, column: impl Into<String>) -> OrderBy {
        self.columns.push(OrderByColumn {
            column: column.into(),
            desc: true,
        });
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("ORDER BY ");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                builder.write_char(',');
            }
            builder.write_quoted(&column.column);
            if column.desc {
                builder.write_str(" DESC");
            }
        }
    }
}
