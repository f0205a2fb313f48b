use super::{Builder, Expr};

/// `WHERE e1 AND e2`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Where {
    pub exprs: Vec<Expr>,
}

impl Where {
    pub fn and(mut self, expr: impl Into<Expr>) -> Where {
        self.exprs.push(expr.into());
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("WHERE ");
        for (i, expr) in self.exprs.iter().enumerate() {
            if i > 0 {
                builder.write_str(" AND ");
            }
            expr.build(builder);
        }
    }
}
