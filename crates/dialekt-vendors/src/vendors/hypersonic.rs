//! HSQLDB (Hypersonic).
//!
//! `NEXT VALUE FOR` sequences answered through the system-sequence
//! catalog, identity keys with an explicit start.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// HSQLDB, in-process or hsql server.
#[derive(Debug)]
pub struct Hypersonic {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Hypersonic {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 9001,
                driver_class: "org.hsqldb.jdbcDriver",
                supports_sequences: true,
                supports_auto_increment: true,
                supports_boolean_type: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Hypersonic {
    fn vendor_id(&self) -> &'static str {
        "hypersonic"
    }

    fn vendor_name(&self) -> &'static str {
        "Hypersonic (HSQLDB)"
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
                        "BIGINT GENERATED BY DEFAULT AS IDENTITY (START WITH 0, INCREMENT BY 1) PRIMARY KEY"
                            .to_string()
                    } else {
                        "BIGINT NOT NULL PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 0 {
                        "INTEGER".to_string()
                    } else {
                        "BIGINT".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMERIC({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length >= self.caps.clob_threshold {
                    "LONGVARCHAR".to_string()
                } else if col.length > 0 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR".to_string()
                }
            }
            ValueKind::Binary => "LONGVARBINARY".to_string(),
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
            return Ok(format!("jdbc:hsqldb:{}", database));
        }
        let mut url = format!("jdbc:hsqldb:hsql://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT NEXT VALUE FOR {} FROM INFORMATION_SCHEMA.SYSTEM_SEQUENCES WHERE SEQUENCE_NAME = {}",
            sequence,
            upper_literal(sequence)
        ))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT {}.currval FROM INFORMATION_SCHEMA.SYSTEM_SEQUENCES WHERE SEQUENCE_NAME = {}",
            sequence,
            upper_literal(sequence)
        ))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT * FROM INFORMATION_SCHEMA.SYSTEM_SEQUENCES WHERE SEQUENCE_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQUENCE_NAME FROM INFORMATION_SCHEMA.SYSTEM_SEQUENCES".to_string())
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsql() -> Hypersonic {
        Hypersonic::new(AccessType::Native)
    }

    #[test]
    fn test_urls() {
        assert_eq!(hsql().url("", "", "mem:test").unwrap(), "jdbc:hsqldb:mem:test");
        assert_eq!(
            hsql().url("localhost", "9001", "xdb").unwrap(),
            "jdbc:hsqldb:hsql://localhost:9001/xdb"
        );
    }

    #[test]
    fn test_sequence_statements_name_the_sequence() {
        let sql = hsql().sql_next_sequence_value("seq").unwrap();
        assert!(sql.contains("NEXT VALUE FOR seq"));
        assert!(sql.contains("SEQUENCE_NAME = 'SEQ'"));
    }

    #[test]
    fn test_identity_key_starts_at_zero() {
        let def = hsql().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, false, false);
        assert!(def.starts_with("BIGINT GENERATED BY DEFAULT AS IDENTITY (START WITH 0"));
    }
}
