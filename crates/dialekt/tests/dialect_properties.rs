//! Cross-vendor contract tests: every registered variant must honor the
//! shared behavioral properties, whatever its grammar looks like.

use dialekt::{AccessType, ColumnMeta, Dialect, ODBC_BRIDGE_DRIVER, ValueKind, create_dialect, vendor_ids};

fn all_dialects() -> Vec<Box<dyn Dialect>> {
    vendor_ids()
        .into_iter()
        .map(|id| create_dialect(id, AccessType::Native).unwrap())
        .collect()
}

fn sample_columns() -> Vec<ColumnMeta> {
    vec![
        ColumnMeta::string("NAME", 50),
        ColumnMeta::string("DESCRIPTION", 100_000),
        ColumnMeta::string("FREEFORM", -1),
        ColumnMeta::integer("COUNTER"),
        ColumnMeta::integer_sized("SMALL", 3),
        ColumnMeta::number("PRICE", 10, 2),
        ColumnMeta::big_number("TOTAL", 38, 10),
        ColumnMeta::boolean("ACTIVE"),
        ColumnMeta::date("CREATED"),
        ColumnMeta::timestamp("UPDATED"),
        ColumnMeta::binary("PAYLOAD", 1000),
    ]
}

#[test]
fn field_definition_is_pure() {
    for dialect in all_dialects() {
        for col in sample_columns() {
            let a = dialect.field_definition(&col, "ID", "ID", true, true, false);
            let b = dialect.field_definition(&col, "ID", "ID", true, true, false);
            assert_eq!(a, b, "{} not pure for {:?}", dialect.vendor_id(), col.name);
        }
    }
}

#[test]
fn field_definition_never_empty_for_representable_kinds() {
    for dialect in all_dialects() {
        for col in sample_columns() {
            let def = dialect.field_definition(&col, "", "", false, false, false);
            assert!(
                !def.is_empty(),
                "{} produced empty definition for {}",
                dialect.vendor_id(),
                col.name
            );
        }
    }
}

#[test]
fn unsupported_kind_yields_the_unknown_marker() {
    let col = ColumnMeta::new("X", ValueKind::Unsupported, -1, -1);
    for dialect in all_dialects() {
        let def = dialect.field_definition(&col, "", "", false, false, false);
        assert_eq!(
            def,
            " UNKNOWN",
            "{} must emit the malformed-SQL marker",
            dialect.vendor_id()
        );
    }
}

#[test]
fn sequence_sql_matches_the_capability_flag() {
    for dialect in all_dialects() {
        let id = dialect.vendor_id();
        let next = dialect.sql_next_sequence_value("DLK_SEQ");
        let current = dialect.sql_current_sequence_value("DLK_SEQ");
        let exists = dialect.sql_sequence_exists("DLK_SEQ");
        let list = dialect.sql_list_of_sequences();

        if dialect.caps().supports_sequences {
            for (what, sql) in [("next", &next), ("current", &current), ("exists", &exists)] {
                let sql = sql.as_deref().unwrap_or_else(|| {
                    panic!("{id}: {what} must be Some when sequences are supported")
                });
                assert!(
                    sql.to_uppercase().contains("DLK_SEQ"),
                    "{id}: {what} SQL must name the sequence: {sql}"
                );
            }
            assert!(
                list.as_deref().is_some_and(|s| !s.is_empty()),
                "{id}: list must be Some"
            );
        } else {
            assert!(next.is_none(), "{id}: next must be None without sequences");
            assert!(current.is_none(), "{id}: current must be None without sequences");
            assert!(exists.is_none(), "{id}: exists must be None without sequences");
            assert!(list.is_none(), "{id}: list must be None without sequences");
        }
    }
}

#[test]
fn safe_field_name_is_idempotent() {
    for dialect in all_dialects() {
        for name in ["first name", "1st_place", "select", "order", "tötal", "ok"] {
            let once = dialect.safe_field_name(name);
            let twice = dialect.safe_field_name(&once);
            assert_eq!(once, twice, "{} not idempotent for {name:?}", dialect.vendor_id());
        }
    }
}

#[test]
fn odbc_access_is_vendor_independent() {
    for id in vendor_ids() {
        let dialect = create_dialect(id, AccessType::Odbc).unwrap();
        assert_eq!(
            dialect.url("host", "1234", "MyDsn").unwrap(),
            "jdbc:odbc:MyDsn",
            "{id}: ODBC URL is the bridge shape"
        );
        assert_eq!(
            dialect.driver_class(),
            ODBC_BRIDGE_DRIVER,
            "{id}: ODBC access uses the bridge driver"
        );
    }
}

#[test]
fn jndi_access_returns_the_datasource_name() {
    for id in vendor_ids() {
        let dialect = create_dialect(id, AccessType::Jndi).unwrap();
        assert_eq!(
            dialect.url("ignored", "0", "jdbc/MyDataSource").unwrap(),
            "jdbc/MyDataSource",
            "{id}: JNDI URL is the datasource name"
        );
    }
}

#[test]
fn lock_statements_are_none_for_empty_table_lists() {
    for dialect in all_dialects() {
        assert!(
            dialect.lock_tables(&[]).is_none(),
            "{}: nothing to lock means no statement",
            dialect.vendor_id()
        );
    }
}

#[test]
fn truncate_and_drop_are_never_empty() {
    for dialect in all_dialects() {
        assert!(!dialect.truncate_table_statement("T").is_empty());
        assert!(!dialect.drop_table_if_exists_statement("T").is_empty());
        assert!(!dialect.create_table_statement().is_empty());
    }
}

#[test]
fn modify_column_always_emits_at_least_one_statement() {
    let col = ColumnMeta::string("C", 32);
    for dialect in all_dialects() {
        let stmts = dialect.modify_column_statement("T", &col, "", false, "");
        assert!(
            !stmts.is_empty(),
            "{}: modify must emit statements",
            dialect.vendor_id()
        );
        for stmt in &stmts {
            assert!(!stmt.is_empty(), "{}: no empty statements", dialect.vendor_id());
        }
    }
}

#[test]
fn schema_table_combination_joins_with_the_vendor_shape() {
    for dialect in all_dialects() {
        let combined = dialect.schema_table_combination("app", "orders");
        assert!(combined.contains("app") && combined.contains("orders"));
        if dialect.vendor_id() == "msaccess" {
            assert_eq!(combined, "[app].[orders]");
        } else {
            assert_eq!(combined, "app.orders");
        }
    }
}

#[test]
fn quote_field_uses_the_capability_quote_pair() {
    for dialect in all_dialects() {
        let caps = dialect.caps();
        assert_eq!(
            dialect.quote_field("name"),
            format!("{}name{}", caps.quote_start, caps.quote_end)
        );
    }
}

#[test]
fn quoted_combination_wraps_both_sides() {
    let pg = create_dialect("postgres", AccessType::Native).unwrap();
    assert_eq!(
        pg.quoted_schema_table_combination("app", "orders"),
        "\"app\".\"orders\""
    );
    let mysql = create_dialect("mysql", AccessType::Native).unwrap();
    assert_eq!(
        mysql.quoted_schema_table_combination("app", "orders"),
        "`app`.`orders`"
    );
    let access = create_dialect("msaccess", AccessType::Odbc).unwrap();
    assert_eq!(
        access.quoted_schema_table_combination("app", "orders"),
        "[app].[orders]"
    );
}
