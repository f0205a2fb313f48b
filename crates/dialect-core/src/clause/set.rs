use super::Builder;
use crate::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

/// `SET "a"=?,"b"=?`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Set {
    pub assignments: Vec<Assignment>,
}

impl Set {
    pub fn assign(mut self, column: impl Into<String>, value: impl Into<Value>) -> Set {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub(super) fn build(&self, builder: &mut dyn Builder) {
        builder.write_str("SET ");
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                builder.write_char(',');
            }
            builder.write_quoted(&assignment.column);
            builder.write_char('=');
            builder.add_var(&assignment.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::test_util::build;

    #[test]
    fn assignments_bind_values() {
        let out = build(Set::default().assign("name", "biscuit").assign("active", true));
        assert_eq!(out.sql, "SET `name`=$1,`active`=$2");
        assert_eq!(out.vars.len(), 2);
    }
}
