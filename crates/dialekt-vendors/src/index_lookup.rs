//! Index-existence checking.
//!
//! The one operation in this layer that reads a live result set. It runs
//! the vendor's index introspection query through the caller-supplied
//! [`QueryExecutor`] and verifies the requested column set against the
//! indexed columns. Connection lifecycle, retries and timeouts stay with
//! the executor.

use crate::dialect::Dialect;
use dialekt_core::{Cx, Error, Outcome, QueryExecutor, Value};

/// Check whether every column in `columns` is covered by the indexed
/// columns of `schema.table`.
///
/// Resolves to `Ok(false)` (feature absent, not failure) when the
/// vendor has no SQL-reachable index catalog. Matching is
/// case-insensitive, following catalog case-folding.
pub async fn check_index_exists<E: QueryExecutor>(
    dialect: &dyn Dialect,
    executor: &mut E,
    cx: &Cx,
    schema: &str,
    table: &str,
    columns: &[&str],
) -> Outcome<bool, Error> {
    let Some(sql) = dialect.sql_index_columns(schema, table) else {
        return Outcome::Ok(false);
    };
    tracing::debug!(vendor = dialect.vendor_id(), sql = %sql, "index introspection");

    let rows = match executor.query(cx, &sql).await {
        Outcome::Ok(rows) => rows,
        Outcome::Err(e) => return Outcome::Err(e),
        Outcome::Cancelled(r) => return Outcome::Cancelled(r),
        Outcome::Panicked(p) => return Outcome::Panicked(p),
    };

    let mut found = vec![false; columns.len()];
    for row in &rows {
        if let Some(Value::Text(indexed)) = row.get(0) {
            for (i, wanted) in columns.iter().enumerate() {
                if wanted.eq_ignore_ascii_case(indexed) {
                    found[i] = true;
                }
            }
        }
    }
    Outcome::Ok(found.iter().all(|f| *f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_dialect;
    use asupersync::runtime::RuntimeBuilder;
    use dialekt_core::{AccessType, Row};

    struct FixedRows(Vec<Row>);

    impl QueryExecutor for FixedRows {
        async fn query(&mut self, _cx: &Cx, _sql: &str) -> Outcome<Vec<Row>, Error> {
            Outcome::Ok(self.0.clone())
        }
    }

    fn text_row(s: &str) -> Row {
        Row::new(vec![Value::Text(s.to_string())])
    }

    fn block_on<T>(fut: impl Future<Output = T>) -> T {
        let rt = RuntimeBuilder::current_thread()
            .build()
            .expect("create asupersync runtime");
        rt.block_on(fut)
    }

    #[test]
    fn test_full_set_match() {
        let cx = Cx::for_testing();
        let dialect = create_dialect("oracle", AccessType::Native).unwrap();
        let mut exec = FixedRows(vec![text_row("ID"), text_row("VERSION")]);
        let found = block_on(check_index_exists(
            dialect.as_ref(),
            &mut exec,
            &cx,
            "",
            "T",
            &["id", "version"],
        ));
        assert!(matches!(found, Outcome::Ok(true)));
    }

    #[test]
    fn test_partial_set_is_not_a_match() {
        let cx = Cx::for_testing();
        let dialect = create_dialect("oracle", AccessType::Native).unwrap();
        let mut exec = FixedRows(vec![text_row("ID")]);
        let found = block_on(check_index_exists(
            dialect.as_ref(),
            &mut exec,
            &cx,
            "",
            "T",
            &["id", "version"],
        ));
        assert!(matches!(found, Outcome::Ok(false)));
    }

    #[test]
    fn test_no_catalog_resolves_false() {
        let cx = Cx::for_testing();
        let dialect = create_dialect("msaccess", AccessType::Odbc).unwrap();
        let mut exec = FixedRows(vec![]);
        let found = block_on(check_index_exists(
            dialect.as_ref(),
            &mut exec,
            &cx,
            "",
            "T",
            &["id"],
        ));
        assert!(matches!(found, Outcome::Ok(false)));
    }
}
