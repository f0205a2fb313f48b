/// The kind of statement being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Query,
    Update,
    Delete,
}

/// Which clauses each operation renders, and in what order.
///
/// Clauses a statement does not carry are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackConfig {
    pub create_clauses: Vec<&'static str>,
    pub query_clauses: Vec<&'static str>,
    pub update_clauses: Vec<&'static str>,
    pub delete_clauses: Vec<&'static str>,
}

impl CallbackConfig {
    pub fn clauses(&self, op: Operation) -> &[&'static str] {
        match op {
            Operation::Create => &self.create_clauses,
            Operation::Query => &self.query_clauses,
            Operation::Update => &self.update_clauses,
            Operation::Delete => &self.delete_clauses,
        }
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        CallbackConfig {
            create_clauses: vec!["INSERT", "VALUES", "ON CONFLICT"],
            query_clauses: vec![
                "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "LIMIT", "FOR",
            ],
            update_clauses: vec!["UPDATE", "SET", "WHERE"],
            delete_clauses: vec!["DELETE", "FROM", "WHERE"],
        }
    }
}
