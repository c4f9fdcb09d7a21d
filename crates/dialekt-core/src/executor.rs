//! The executor seam.
//!
//! Almost everything in this layer is a pure string builder. The one
//! exception, index-existence checking, must read a live result set, and
//! does so through the [`QueryExecutor`] contract below so the physical
//! connection layer stays out of scope. Connection lifecycle, retries and
//! timeouts all belong to the implementor.

use crate::error::Error;
use asupersync::{Cx, Outcome};
use serde::{Deserialize, Serialize};

/// A single result value from an introspection query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Boolean result.
    Bool(bool),
    /// Integer result.
    Int(i64),
    /// Floating-point result.
    Float(f64),
    /// Character result.
    Text(String),
}

impl Value {
    /// The value as text, if it carries any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

/// One row of an introspection result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Build a row from values in column order.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Minimal query contract consumed by the index-existence check.
///
/// Implemented by the (out-of-scope) connection layer. The returned rows
/// are fully materialized; this layer never streams.
pub trait QueryExecutor {
    /// Run `sql` and return all rows.
    fn query(
        &mut self,
        cx: &Cx,
        sql: &str,
    ) -> impl Future<Output = Outcome<Vec<Row>, Error>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Text("IDX_A".to_string()).as_text(), Some("IDX_A"));
        assert_eq!(Value::Int(42).as_text(), None);
        assert_eq!(Value::Int(42).as_i64(), Some(42));
        assert_eq!(Value::Null.as_i64(), None);
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(vec![Value::Text("NAME".to_string()), Value::Int(1)]);
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
        assert_eq!(row.get(0).and_then(Value::as_text), Some("NAME"));
        assert!(row.get(5).is_none());
    }
}
