//! H2.
//!
//! Embedded when no host is given, TCP server otherwise; sequences via
//! `NEXTVAL`/`CURRVAL`, `AUTO_INCREMENT` keys, and the seeded unknown
//! dimension row.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// H2, embedded or client/server.
#[derive(Debug)]
pub struct H2 {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl H2 {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 9092,
                driver_class: "org.h2.Driver",
                reserved_words: &[
                    "ALL", "AND", "ARRAY", "AS", "BETWEEN", "BOTH", "CASE", "CHECK", "CONSTRAINT",
                    "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
                    "DISTINCT", "EXCEPT", "EXISTS", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM",
                    "FULL", "GROUP", "HAVING", "IF", "ILIKE", "IN", "INNER", "INTERSECT",
                    "INTERVAL", "IS", "JOIN", "LEADING", "LEFT", "LIKE", "LIMIT", "LOCALTIME",
                    "LOCALTIMESTAMP", "MINUS", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "OR",
                    "ORDER", "PRIMARY", "QUALIFY", "RIGHT", "ROW", "ROWNUM", "SELECT", "TABLE",
                    "TOP", "TRAILING", "TRUE", "UNION", "UNIQUE", "USING", "VALUES", "WHERE",
                    "WINDOW", "WITH",
                ],
                supports_sequences: true,
                supports_auto_increment: true,
                supports_boolean_type: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for H2 {
    fn vendor_id(&self) -> &'static str {
        "h2"
    }

    fn vendor_name(&self) -> &'static str {
        "H2"
    }

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
        match col.kind {
            ValueKind::Timestamp => "TIMESTAMP".to_string(),
            ValueKind::Date => "DATE".to_string(),
            ValueKind::Boolean => "BOOLEAN".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY".to_string()
                    } else {
                        "BIGINT NOT NULL PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 18 {
                        format!("DECIMAL({})", col.length)
                    } else if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 0 {
                        "INT".to_string()
                    } else {
                        "BIGINT".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("DECIMAL({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length >= self.caps.clob_threshold {
                    "CLOB".to_string()
                } else if col.length > 0 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn modify_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> Vec<String> {
        vec![format!(
            "ALTER TABLE {} ALTER COLUMN {}",
            table,
            self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
        )]
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        if host.is_empty() {
            // embedded: the database field is a file path or mem: name
            return Ok(format!("jdbc:h2:{}", database));
        }
        let mut url = format!("jdbc:h2:tcp://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT NEXTVAL('{}')", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT CURRVAL('{}')", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT * FROM INFORMATION_SCHEMA.SEQUENCES WHERE SEQUENCE_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQUENCE_NAME FROM INFORMATION_SCHEMA.SEQUENCES".to_string())
    }

    fn sql_insert_auto_inc_unknown_dimension_row(
        &self,
        table: &str,
        key_field: &str,
        version_field: &str,
    ) -> Option<String> {
        Some(format!(
            "insert into {}({}, {}) values (0, 1)",
            table, key_field, version_field
        ))
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }

    fn sql_index_columns(&self, _schema: &str, table: &str) -> Option<String> {
        Some(format!(
            "SELECT column_name FROM INFORMATION_SCHEMA.INDEXES WHERE table_name = {}",
            upper_literal(table)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h2() -> H2 {
        H2::new(AccessType::Native)
    }

    #[test]
    fn test_unknown_dimension_row_exact() {
        assert_eq!(
            h2().sql_insert_auto_inc_unknown_dimension_row("FOO", "FOOKEY", "FOOVERSION")
                .unwrap(),
            "insert into FOO(FOOKEY, FOOVERSION) values (0, 1)"
        );
    }

    #[test]
    fn test_embedded_vs_server_url() {
        assert_eq!(h2().url("", "", "/data/test").unwrap(), "jdbc:h2:/data/test");
        assert_eq!(
            h2().url("localhost", "9092", "test").unwrap(),
            "jdbc:h2:tcp://localhost:9092/test"
        );
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            h2().sql_next_sequence_value("SEQ").unwrap(),
            "SELECT NEXTVAL('SEQ')"
        );
        assert_eq!(
            h2().sql_sequence_exists("seq").unwrap(),
            "SELECT * FROM INFORMATION_SCHEMA.SEQUENCES WHERE SEQUENCE_NAME = 'SEQ'"
        );
    }

    #[test]
    fn test_auto_increment_key() {
        let def = h2().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, true, false);
        assert_eq!(def, "ID BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY");
    }
}
