//! The delegated read through the public API: a scripted executor stands
//! in for the connection layer.

use asupersync::runtime::RuntimeBuilder;
use dialekt::{
    AccessType, Cx, Error, Outcome, QueryExecutor, Row, Value, check_index_exists, create_dialect,
};

/// Executor that records the SQL it was asked to run and returns a
/// scripted result set.
struct Scripted {
    rows: Vec<Row>,
    seen_sql: Vec<String>,
}

impl Scripted {
    fn returning(columns: &[&str]) -> Self {
        Self {
            rows: columns
                .iter()
                .map(|c| Row::new(vec![Value::Text((*c).to_string())]))
                .collect(),
            seen_sql: Vec::new(),
        }
    }
}

impl QueryExecutor for Scripted {
    async fn query(&mut self, _cx: &Cx, sql: &str) -> Outcome<Vec<Row>, Error> {
        self.seen_sql.push(sql.to_string());
        Outcome::Ok(self.rows.clone())
    }
}

fn block_on<T>(fut: impl Future<Output = T>) -> T {
    let rt = RuntimeBuilder::current_thread()
        .build()
        .expect("create asupersync runtime");
    rt.block_on(fut)
}

#[test]
fn index_check_runs_the_vendor_introspection_sql() {
    let cx = Cx::for_testing();
    let dialect = create_dialect("mysql", AccessType::Native).unwrap();
    let mut exec = Scripted::returning(&["order_id", "customer_id", "created_at"]);

    let found = block_on(check_index_exists(
        dialect.as_ref(),
        &mut exec,
        &cx,
        "shop",
        "orders",
        &["ORDER_ID", "CUSTOMER_ID"],
    ));

    assert!(matches!(found, Outcome::Ok(true)));
    assert_eq!(exec.seen_sql.len(), 1);
    assert!(exec.seen_sql[0].contains("information_schema.statistics"));
    assert!(exec.seen_sql[0].contains("orders"));
    assert!(exec.seen_sql[0].contains("shop"));
}

#[test]
fn missing_column_fails_the_set_match() {
    let cx = Cx::for_testing();
    let dialect = create_dialect("postgres", AccessType::Native).unwrap();
    let mut exec = Scripted::returning(&["order_id"]);

    let found = block_on(check_index_exists(
        dialect.as_ref(),
        &mut exec,
        &cx,
        "",
        "orders",
        &["order_id", "customer_id"],
    ));

    assert!(matches!(found, Outcome::Ok(false)));
}
