//! XuguDB.
//!
//! Oracle-shaped grammar out of China: guarded DROP block, `dual`-based
//! sequences, `VARCHAR2`.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// XuguDB.
#[derive(Debug)]
pub struct Xugu {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Xugu {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 5138,
                driver_class: "com.xugu.cloudjdbc.Driver",
                max_varchar_length: 2000,
                supports_sequences: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Xugu {
    fn vendor_id(&self) -> &'static str {
        "xugu"
    }

    fn vendor_name(&self) -> &'static str {
        "XuguDB"
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
                    if col.length > 0 {
                        format!("NUMBER({})", col.length)
                    } else {
                        "INTEGER".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMBER({}, {})", col.length, col.precision)
                } else {
                    "NUMBER".to_string()
                }
            }
            ValueKind::String => {
                if col.length > self.caps.max_varchar_length {
                    "CLOB".to_string()
                } else if col.length > 0 {
                    format!("VARCHAR2({})", col.length)
                } else {
                    "VARCHAR2(2000)".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:xugu://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        format!(
            "BEGIN EXECUTE IMMEDIATE 'DROP TABLE {}'; EXCEPTION WHEN OTHERS THEN NULL; END;",
            table
        )
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.nextval FROM dual", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.currval FROM dual", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT SEQ_NAME FROM ALL_SEQUENCES WHERE SEQ_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQ_NAME FROM ALL_SEQUENCES".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_drop_swallows_all() {
        let d = Xugu::new(AccessType::Native);
        let sql = d.drop_table_if_exists_statement("T");
        assert!(sql.starts_with("BEGIN EXECUTE IMMEDIATE 'DROP TABLE T';"));
        assert!(sql.contains("WHEN OTHERS THEN NULL"));
    }

    #[test]
    fn test_oracle_shaped_sequences() {
        let d = Xugu::new(AccessType::Native);
        assert_eq!(
            d.sql_next_sequence_value("S").unwrap(),
            "SELECT S.nextval FROM dual"
        );
    }
}
