//! End-to-end fixtures against concrete vendors: exact strings callers
//! depend on, pinned so a refactor cannot silently change emitted SQL.

use dialekt::{AccessType, ColumnMeta, Dialect, create_dialect};

fn dialect(id: &str) -> Box<dyn Dialect> {
    create_dialect(id, AccessType::Native).unwrap()
}

#[test]
fn db2_boolean_is_character_1() {
    let def = dialect("db2").field_definition(
        &ColumnMeta::boolean("FOO"),
        "",
        "",
        false,
        false,
        false,
    );
    assert_eq!(def, "CHARACTER(1)");
}

#[test]
fn mysql_add_auto_increment_key_column() {
    let stmt = dialect("mysql").add_column_statement(
        "FOO",
        &ColumnMeta::integer("BAR"),
        "BAR",
        true,
        "",
    );
    assert_eq!(
        stmt,
        "ALTER TABLE FOO ADD BAR BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY"
    );
}

#[test]
fn postgres_list_of_sequences() {
    assert_eq!(
        dialect("postgres").sql_list_of_sequences().unwrap(),
        "SELECT relname AS sequence_name FROM pg_catalog.pg_statio_all_sequences"
    );
}

#[test]
fn oracle_thin_url_with_database_only() {
    assert_eq!(
        dialect("oracle").url("", "", "FOO").unwrap(),
        "jdbc:oracle:thin:@FOO"
    );
}

#[test]
fn h2_unknown_dimension_bootstrap_row() {
    assert_eq!(
        dialect("h2")
            .sql_insert_auto_inc_unknown_dimension_row("FOO", "FOOKEY", "FOOVERSION")
            .unwrap(),
        "insert into FOO(FOOKEY, FOOVERSION) values (0, 1)"
    );
}

#[test]
fn hana_is_a_column_store() {
    assert_eq!(dialect("hana").create_table_statement(), "CREATE COLUMN TABLE ");
    assert_eq!(dialect("mysql").create_table_statement(), "CREATE TABLE ");
}

#[test]
fn table_and_column_probes() {
    let d = dialect("generic");
    assert_eq!(d.sql_table_exists("T"), "SELECT 1 FROM T");
    assert_eq!(d.sql_column_exists("C", "T"), "SELECT C FROM T");
    assert_eq!(d.sql_query_fields("T"), "SELECT * FROM T");
}

#[test]
fn varchar_boundaries_follow_each_vendor() {
    // Oracle: bounded at the limit, CLOB one past it
    let oracle = dialect("oracle");
    let max = oracle.caps().max_varchar_length;
    assert_eq!(
        oracle.field_definition(&ColumnMeta::string("S", max), "", "", false, false, false),
        format!("VARCHAR2({})", max)
    );
    assert_eq!(
        oracle.field_definition(&ColumnMeta::string("S", max + 1), "", "", false, false, false),
        "CLOB"
    );

    // PostgreSQL: the threshold itself is already TEXT
    let pg = dialect("postgres");
    let max = pg.caps().max_varchar_length;
    assert_eq!(
        pg.field_definition(&ColumnMeta::string("S", max), "", "", false, false, false),
        "TEXT"
    );
    assert_eq!(
        pg.field_definition(&ColumnMeta::string("S", max - 1), "", "", false, false, false),
        format!("VARCHAR({})", max - 1)
    );
}

#[test]
fn append_extra_options_per_vendor_separator() {
    let mysql = dialect("mysql");
    assert_eq!(
        mysql.append_extra_options("jdbc:mysql://h/db", &[("a", "1"), ("b", "2")]),
        "jdbc:mysql://h/db?a=1&b=2"
    );
    let generic = dialect("generic");
    assert_eq!(
        generic.append_extra_options("jdbc:generic://h/db", &[("a", "1"), ("b", "2")]),
        "jdbc:generic://h/db;a=1;b=2"
    );
    assert_eq!(generic.append_extra_options("url", &[]), "url");
}
