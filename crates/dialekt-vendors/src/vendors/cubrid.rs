//! CUBRID.
//!
//! Serial objects in `db_serial`, and the colon-delimited URL with its
//! historical trailing `:::` kept as-is.

use crate::dialect::{Dialect, lower_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// CUBRID.
#[derive(Debug)]
pub struct Cubrid {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Cubrid {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 33000,
                driver_class: "cubrid.jdbc.driver.CUBRIDDriver",
                supports_sequences: true,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Cubrid {
    fn vendor_id(&self) -> &'static str {
        "cubrid"
    }

    fn vendor_name(&self) -> &'static str {
        "CUBRID"
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
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY".to_string()
                    } else {
                        "BIGINT NOT NULL PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 0 {
                        "INT".to_string()
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

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let port = if port.is_empty() || port == "-1" {
            "33000"
        } else {
            port
        };
        Ok(format!("jdbc:cubrid:{}:{}:{}:::", host, port, database))
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.NEXT_VALUE FROM db_root", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.CURRENT_VALUE FROM db_root", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT name FROM db_serial WHERE name = {}",
            lower_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT name FROM db_serial".to_string())
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_keeps_trailing_colons() {
        let d = Cubrid::new(AccessType::Native);
        assert_eq!(
            d.url("h", "33000", "demodb").unwrap(),
            "jdbc:cubrid:h:33000:demodb:::"
        );
        // missing port falls back to the broker default, shape unchanged
        assert_eq!(d.url("h", "", "demodb").unwrap(), "jdbc:cubrid:h:33000:demodb:::");
    }

    #[test]
    fn test_serial_sql() {
        let d = Cubrid::new(AccessType::Native);
        assert_eq!(
            d.sql_next_sequence_value("ord_seq").unwrap(),
            "SELECT ord_seq.NEXT_VALUE FROM db_root"
        );
        assert_eq!(
            d.sql_sequence_exists("ORD_SEQ").unwrap(),
            "SELECT name FROM db_serial WHERE name = 'ord_seq'"
        );
    }
}
