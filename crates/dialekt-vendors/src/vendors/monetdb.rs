//! MonetDB.
//!
//! Column store with sequences in `sys.sequences`, lower-folded catalog
//! names.

use crate::dialect::{Dialect, has_port, lower_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// MonetDB.
#[derive(Debug)]
pub struct MonetDb {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MonetDb {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 50000,
                driver_class: "nl.cwi.monetdb.jdbc.MonetDriver",
                supports_sequences: true,
                supports_auto_increment: true,
                supports_boolean_type: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for MonetDb {
    fn vendor_id(&self) -> &'static str {
        "monetdb"
    }

    fn vendor_name(&self) -> &'static str {
        "MonetDB"
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
                    if col.length > 9 {
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
                    "CLOB".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:monetdb://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT NEXT VALUE FOR {}", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT CURRENT VALUE FOR {}", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT name FROM sys.sequences WHERE name = {}",
            lower_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT name FROM sys.sequences".to_string())
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}
