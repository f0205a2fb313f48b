use super::Builder;

/// `LIMIT n OFFSET m`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Limit {
    pub limit: Option<u64>,
    pub offset: u64,
}

impl Limit {
    pub fn new(limit: u64) -> Limit {
        Limit {
            limit: Some(limit),
            offset: 0,
        }
    }

    pub fn offset(mut self, offset: u64) -> Limit {
        self.offset = offset;
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        if let Some(limit) = self.limit {
            builder.write_str("LIMIT ");
            builder.write_str(&limit.to_string());
        }

        if self.offset > 0 {
            if self.limit.is_some() {
                builder.write_char(' ');
            }
            builder.write_str("OFFSET ");
            builder.write_str(&self.offset.to_string());
        }
    }
}
