//! PostgreSQL and the engines speaking its dialect (Greenplum, Redshift,
//! KingbaseES).
//!
//! Serial keys, `nextval()` sequences, lower-folded catalogs, and a
//! MODIFY that has to go through the shadow-column dance.

use crate::dialect::{Dialect, has_port, lower_literal, split_schema_qualified};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

const RESERVED: &[&str] = &[
    "ALL", "ANALYSE", "ANALYZE", "AND", "ANY", "ARRAY", "AS", "ASC", "ASYMMETRIC", "BOTH", "CASE",
    "CAST", "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "CREATE", "CURRENT_DATE", "CURRENT_ROLE",
    "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "DEFAULT", "DEFERRABLE", "DESC",
    "DISTINCT", "DO", "ELSE", "END", "EXCEPT", "FALSE", "FOR", "FOREIGN", "FROM", "GRANT",
    "GROUP", "HAVING", "IN", "INITIALLY", "INTERSECT", "INTO", "LEADING", "LIMIT", "LOCALTIME",
    "LOCALTIMESTAMP", "NEW", "NOT", "NULL", "OFF", "OFFSET", "OLD", "ON", "ONLY", "OR", "ORDER",
    "PLACING", "PRIMARY", "REFERENCES", "RETURNING", "SELECT", "SESSION_USER", "SOME",
    "SYMMETRIC", "TABLE", "THEN", "TO", "TRAILING", "TRUE", "UNION", "UNIQUE", "USER", "USING",
    "WHEN", "WHERE", "WITH",
];

fn postgres_caps(default_port: i32, driver_class: &'static str) -> DatabaseCapabilities {
    DatabaseCapabilities {
        default_port,
        driver_class,
        reserved_words: RESERVED,
        supports_sequences: true,
        supports_auto_increment: true,
        supports_boolean_type: true,
        ..Default::default()
    }
}

fn postgres_field_type(
    caps: &DatabaseCapabilities,
    col: &ColumnMeta,
    table_key: &str,
    primary_key: &str,
    use_auto_increment: bool,
) -> String {
    match col.kind {
        ValueKind::Timestamp | ValueKind::Date => "TIMESTAMP".to_string(),
        ValueKind::Boolean => "BOOLEAN".to_string(),
        ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
            if col.is_key_of(table_key, primary_key) {
                if use_auto_increment && caps.supports_auto_increment {
                    "BIGSERIAL".to_string()
                } else {
                    "BIGINT PRIMARY KEY".to_string()
                }
            } else if col.precision == 0 {
                if col.length > 18 {
                    format!("NUMERIC({})", col.length)
                } else if col.length > 9 {
                    "BIGINT".to_string()
                } else if col.length > 4 {
                    "INTEGER".to_string()
                } else if col.length > 0 {
                    "SMALLINT".to_string()
                } else {
                    "BIGINT".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("NUMERIC({}, {})", col.length, col.precision)
            } else {
                "DOUBLE PRECISION".to_string()
            }
        }
        ValueKind::String => {
            // >= here: a column at the threshold is already TEXT
            if col.length >= caps.max_varchar_length || col.length <= 0 {
                "TEXT".to_string()
            } else {
                format!("VARCHAR({})", col.length)
            }
        }
        ValueKind::Binary => "BYTEA".to_string(),
        ValueKind::Internet => "INET".to_string(),
        ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

/// PostgreSQL.
#[derive(Debug)]
pub struct Postgres {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Postgres {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: postgres_caps(5432, "org.postgresql.Driver"),
        }
    }
}

macro_rules! postgres_family_common {
    () => {
        fn access_type(&self) -> AccessType {
            self.access
        }

        fn caps(&self) -> &DatabaseCapabilities {
            &self.caps
        }

        fn field_type(
            &self,
            col: &ColumnMeta,
            table_key: &str,
            primary_key: &str,
            use_auto_increment: bool,
        ) -> String {
            postgres_field_type(&self.caps, col, table_key, primary_key, use_auto_increment)
        }

        fn add_column_statement(
            &self,
            table: &str,
            col: &ColumnMeta,
            table_key: &str,
            use_auto_increment: bool,
            primary_key: &str,
        ) -> String {
            format!(
                "ALTER TABLE {} ADD COLUMN {}",
                table,
                self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
            )
        }

        fn drop_column_statement(
            &self,
            table: &str,
            col: &ColumnMeta,
            _table_key: &str,
            _use_auto_increment: bool,
            _primary_key: &str,
        ) -> String {
            format!("ALTER TABLE {} DROP COLUMN {}", table, col.name)
        }

        /// No ALTER TYPE in the supported baseline: shadow-column dance.
        fn modify_column_statement(
            &self,
            table: &str,
            col: &ColumnMeta,
            table_key: &str,
            use_auto_increment: bool,
            primary_key: &str,
        ) -> Vec<String> {
            self.rename_dance(table, col, table_key, use_auto_increment, primary_key)
        }

        fn lock_tables(&self, tables: &[&str]) -> Option<String> {
            if tables.is_empty() {
                return None;
            }
            Some(format!(
                "LOCK TABLE {} IN ACCESS EXCLUSIVE MODE;",
                tables.join(", ")
            ))
        }

        fn limit_clause(&self, rows: u64) -> String {
            format!(" LIMIT {}", rows)
        }

        fn sql_list_of_procedures(&self) -> Option<String> {
            Some("SELECT proname FROM pg_catalog.pg_proc".to_string())
        }

        fn sql_list_of_schemas(&self) -> Option<String> {
            Some("SELECT nspname AS schema_name FROM pg_catalog.pg_namespace".to_string())
        }

        fn sql_index_columns(&self, schema: &str, table: &str) -> Option<String> {
            let _ = schema;
            Some(format!(
                "SELECT a.attname FROM pg_class t, pg_class i, pg_index ix, pg_attribute a \
                 WHERE t.oid = ix.indrelid AND i.oid = ix.indexrelid AND a.attrelid = t.oid \
                 AND a.attnum = ANY(ix.indkey) AND t.relname = {}",
                lower_literal(table)
            ))
        }
    };
}

macro_rules! postgres_family_sequences {
    () => {
        fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
            Some(format!("SELECT nextval('{}')", sequence))
        }

        fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
            Some(format!("SELECT currval('{}')", sequence))
        }

        fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
            let (_, seq) = split_schema_qualified(sequence);
            Some(format!(
                "SELECT relname AS sequence_name FROM pg_catalog.pg_statio_all_sequences WHERE relname = {}",
                lower_literal(seq)
            ))
        }

        fn sql_list_of_sequences(&self) -> Option<String> {
            Some(
                "SELECT relname AS sequence_name FROM pg_catalog.pg_statio_all_sequences"
                    .to_string(),
            )
        }
    };
}

impl Dialect for Postgres {
    fn vendor_id(&self) -> &'static str {
        "postgres"
    }

    fn vendor_name(&self) -> &'static str {
        "PostgreSQL"
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        postgres_url("postgresql", host, port, database)
    }

    postgres_family_common!();
    postgres_family_sequences!();
}

/// Greenplum (PostgreSQL dialect, MPP).
#[derive(Debug)]
pub struct Greenplum {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Greenplum {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: postgres_caps(5432, "org.postgresql.Driver"),
        }
    }
}

impl Dialect for Greenplum {
    fn vendor_id(&self) -> &'static str {
        "greenplum"
    }

    fn vendor_name(&self) -> &'static str {
        "Greenplum"
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        postgres_url("postgresql", host, port, database)
    }

    postgres_family_common!();
    postgres_family_sequences!();
}

/// Amazon Redshift: PostgreSQL grammar, no sequences, IDENTITY keys.
#[derive(Debug)]
pub struct Redshift {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Redshift {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                supports_sequences: false,
                // IDENTITY exists but SERIAL does not; keys stay explicit
                supports_auto_increment: false,
                ..postgres_caps(5439, "com.amazon.redshift.jdbc.Driver")
            },
        }
    }
}

impl Dialect for Redshift {
    fn vendor_id(&self) -> &'static str {
        "redshift"
    }

    fn vendor_name(&self) -> &'static str {
        "Amazon Redshift"
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        postgres_url("redshift", host, port, database)
    }

    postgres_family_common!();
    // no sequence overrides: the base None answers apply
}

/// KingbaseES (PostgreSQL dialect).
#[derive(Debug)]
pub struct KingbaseEs {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl KingbaseEs {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: postgres_caps(54321, "com.kingbase8.Driver"),
        }
    }
}

impl Dialect for KingbaseEs {
    fn vendor_id(&self) -> &'static str {
        "kingbase"
    }

    fn vendor_name(&self) -> &'static str {
        "KingbaseES"
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        postgres_url("kingbase8", host, port, database)
    }

    postgres_family_common!();
    postgres_family_sequences!();
}

fn postgres_url(subprotocol: &str, host: &str, port: &str, database: &str) -> Result<String> {
    let mut url = format!("jdbc:{}://{}", subprotocol, host);
    if has_port(port) {
        url.push(':');
        url.push_str(port);
    }
    url.push('/');
    url.push_str(database);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pg() -> Postgres {
        Postgres::new(AccessType::Native)
    }

    #[test]
    fn test_list_of_sequences_exact() {
        assert_eq!(
            pg().sql_list_of_sequences().unwrap(),
            "SELECT relname AS sequence_name FROM pg_catalog.pg_statio_all_sequences"
        );
    }

    #[test]
    fn test_sequence_sql_lower_folds_name() {
        assert_eq!(
            pg().sql_sequence_exists("SEQ_ID").unwrap(),
            "SELECT relname AS sequence_name FROM pg_catalog.pg_statio_all_sequences WHERE relname = 'seq_id'"
        );
        assert_eq!(
            pg().sql_next_sequence_value("seq_id").unwrap(),
            "SELECT nextval('seq_id')"
        );
    }

    #[test]
    fn test_serial_key() {
        let def = pg().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, true, false);
        assert_eq!(def, "ID BIGSERIAL");
        let def = pg().field_definition(&ColumnMeta::integer("ID"), "ID", "", false, true, false);
        assert_eq!(def, "ID BIGINT PRIMARY KEY");
    }

    #[test]
    fn test_text_boundary_is_inclusive() {
        let caps_max = pg().caps().max_varchar_length;
        let def = pg().field_definition(
            &ColumnMeta::string("S", caps_max - 1),
            "",
            "",
            false,
            false,
            false,
        );
        assert_eq!(def, format!("VARCHAR({})", caps_max - 1));
        let def =
            pg().field_definition(&ColumnMeta::string("S", caps_max), "", "", false, false, false);
        assert_eq!(def, "TEXT");
    }

    #[test]
    fn test_internet_address_maps_to_inet() {
        let def = pg().field_definition(&ColumnMeta::internet("ADDR"), "", "", false, false, false);
        assert_eq!(def, "INET");
    }

    #[test]
    fn test_modify_is_a_rename_dance() {
        let stmts = pg().modify_column_statement("T", &ColumnMeta::string("C", 10), "", false, "");
        assert_eq!(stmts.len(), 4);
        assert_eq!(stmts[0], "ALTER TABLE T ADD COLUMN C_DLK VARCHAR(10)");
        assert_eq!(stmts[1], "UPDATE T SET C_DLK = C");
        assert_eq!(stmts[2], "ALTER TABLE T DROP COLUMN C");
        assert_eq!(stmts[3], "ALTER TABLE T RENAME C_DLK TO C");
    }

    #[test]
    fn test_redshift_has_no_sequences() {
        let d = Redshift::new(AccessType::Native);
        assert!(!d.caps().supports_sequences);
        assert!(d.sql_next_sequence_value("SEQ").is_none());
        assert!(d.sql_sequence_exists("SEQ").is_none());
        assert_eq!(
            d.url("cluster.example.com", "5439", "dw").unwrap(),
            "jdbc:redshift://cluster.example.com:5439/dw"
        );
    }

    #[test]
    fn test_lock_tables_single_statement() {
        assert_eq!(
            pg().lock_tables(&["A", "B"]).unwrap(),
            "LOCK TABLE A, B IN ACCESS EXCLUSIVE MODE;"
        );
        assert!(pg().unlock_tables(&["A"]).is_none());
    }

    #[test]
    fn test_kingbase_url() {
        let d = KingbaseEs::new(AccessType::Native);
        assert_eq!(
            d.url("h", "54321", "db").unwrap(),
            "jdbc:kingbase8://h:54321/db"
        );
    }
}
