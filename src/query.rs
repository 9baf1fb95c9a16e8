//! Filter query builder for DocBase listing endpoints.
//!
//! Listing endpoints accept an array of textual filter clauses. This module
//! builds those clauses from structured expressions instead of hand-formatted
//! strings.

use crate::error::{Error, Result};

/// A single filter predicate.
///
/// Each variant renders to exactly one clause. Adding a predicate kind means
/// adding a variant here and one arm in [`QueryExpression::render`]; existing
/// arms are never touched, since the server's filter grammar is versioned
/// independently of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpression {
    Equal { property: String, value: String },
}

impl QueryExpression {
    /// Render this predicate to its wire clause.
    ///
    /// No escaping is performed: the property is embedded verbatim and the
    /// value is only wrapped in the array-of-one-string form the server
    /// expects. A value containing `"` or `\` cannot be embedded safely and
    /// is rejected rather than silently producing a malformed clause.
    pub fn render(&self) -> Result<String> {
        match self {
            QueryExpression::Equal { property, value } => {
                if value.contains('"') || value.contains('\\') {
                    return Err(Error::MalformedFilter {
                        property: property.clone(),
                        value: value.clone(),
                    });
                }
                Ok(format!("equal(\"{}\",[\"{}\"])", property, value))
            }
        }
    }
}

/// An ordered set of filter predicates.
///
/// Insertion order is preserved; the server combines clauses in the order
/// they are sent.
///
/// # Example
/// ```
/// use docbase::query::Query;
///
/// let clauses = Query::new().equal("name", "agreements").build().unwrap();
/// assert_eq!(clauses, vec![r#"equal("name",["agreements"])"#]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    expressions: Vec<QueryExpression>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate.
    pub fn equal(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.expressions.push(QueryExpression::Equal {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Render every predicate into its textual clause, preserving order.
    ///
    /// Pure and deterministic: building the same query twice yields
    /// byte-identical output.
    pub fn build(&self) -> Result<Vec<String>> {
        self.expressions.iter().map(|e| e.render()).collect()
    }
}
