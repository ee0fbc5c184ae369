//! Identifier quoting collaborator.

/// Host-supplied identifier quoting.
///
/// This layer never quotes identifiers itself: [`crate::translate`] accepts
/// already-quoted column references, and the introspection and DDL paths call
/// out through this trait for every table, column, constraint and index name
/// they embed in generated SQL.
pub trait IdentifierQuoter {
    fn quote(&self, ident: &str) -> String;
}

impl<F> IdentifierQuoter for F
where
    F: Fn(&str) -> String,
{
    fn quote(&self, ident: &str) -> String {
        self(ident)
    }
}
