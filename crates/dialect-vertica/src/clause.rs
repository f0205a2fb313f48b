use dialect_core::clause::{Builder, Clause, ClauseBuilder, Expression};

use std::{collections::HashMap, sync::Arc};

/// Clause renderings that differ from the default ones.
pub(crate) fn clause_builders() -> HashMap<&'static str, ClauseBuilder> {
    let mut builders: HashMap<&'static str, ClauseBuilder> = HashMap::new();
    builders.insert("VALUES", Arc::new(build_values));
    builders
}

/// An insert without columns is written `VALUES()` rather than
/// `DEFAULT VALUES`.
fn build_values(clause: &Clause, builder: &mut dyn Builder) {
    if let Expression::Values(values) = &clause.expression {
        if values.columns.is_empty() {
            builder.write_str("VALUES()");
            return;
        }
    }

    clause.build(builder);
}
