//! Teradata.
//!
//! The comma-keyed URL shape (`/DATABASE=...,DBS_PORT=...`), no
//! sequences, no `DROP TABLE IF EXISTS`.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Teradata.
#[derive(Debug)]
pub struct Teradata {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Teradata {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 1025,
                driver_class: "com.teradata.jdbc.TeraDriver",
                max_varchar_length: 64000,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Teradata {
    fn vendor_id(&self) -> &'static str {
        "teradata"
    }

    fn vendor_name(&self) -> &'static str {
        "Teradata"
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
        _use_auto_increment: bool,
    ) -> String {
        match col.kind {
            ValueKind::Timestamp => "TIMESTAMP".to_string(),
            ValueKind::Date => "DATE".to_string(),
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    "BIGINT NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 4 {
                        "INTEGER".to_string()
                    } else if col.length > 0 {
                        "SMALLINT".to_string()
                    } else {
                        "BIGINT".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("DECIMAL({}, {})", col.length, col.precision)
                } else {
                    "FLOAT".to_string()
                }
            }
            ValueKind::String => {
                if col.length > self.caps.max_varchar_length {
                    "CLOB".to_string()
                } else if col.length > 0 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR(64000)".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:teradata://{}/DATABASE={}", host, database);
        if has_port(port) {
            url.push_str(",DBS_PORT=");
            url.push_str(port);
        }
        Ok(url)
    }

    fn truncate_table_statement(&self, table: &str) -> String {
        format!("DELETE FROM {}", table)
    }

    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        // no IF EXISTS grammar; callers swallow the missing-table error
        format!("DROP TABLE {}", table)
    }

    fn sql_table_exists(&self, table: &str) -> String {
        format!("SELECT TOP 1 * FROM {}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td() -> Teradata {
        Teradata::new(AccessType::Native)
    }

    #[test]
    fn test_comma_keyed_url() {
        assert_eq!(
            td().url("tdhost", "1025", "dw").unwrap(),
            "jdbc:teradata://tdhost/DATABASE=dw,DBS_PORT=1025"
        );
        assert_eq!(
            td().url("tdhost", "", "dw").unwrap(),
            "jdbc:teradata://tdhost/DATABASE=dw"
        );
    }

    #[test]
    fn test_no_if_exists() {
        assert_eq!(td().drop_table_if_exists_statement("T"), "DROP TABLE T");
    }

    #[test]
    fn test_truncate_is_delete() {
        assert_eq!(td().truncate_table_statement("T"), "DELETE FROM T");
    }
}
