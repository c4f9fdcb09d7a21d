//! IBM Informix.
//!
//! `SERIAL8` keys, `DATETIME YEAR TO FRACTION` timestamps, `FIRST`-style
//! limits (so no trailing clause), and the `INFORMIXSERVER` URL option.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Informix Dynamic Server.
#[derive(Debug)]
pub struct Informix {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Informix {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 1526,
                driver_class: "com.informix.jdbc.IfxDriver",
                max_varchar_length: 255,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Informix {
    fn vendor_id(&self) -> &'static str {
        "informix"
    }

    fn vendor_name(&self) -> &'static str {
        "IBM Informix"
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
            ValueKind::Timestamp => "DATETIME YEAR TO FRACTION(5)".to_string(),
            ValueKind::Date => "DATETIME YEAR TO DAY".to_string(),
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "SERIAL8".to_string()
                    } else {
                        "INT8 NOT NULL PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "INT8".to_string()
                    } else if col.length > 0 {
                        "INTEGER".to_string()
                    } else {
                        "INT8".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("DECIMAL({}, {})", col.length, col.precision)
                } else {
                    "FLOAT".to_string()
                }
            }
            ValueKind::String => {
                if col.length > self.caps.max_varchar_length {
                    "LVARCHAR".to_string()
                } else if col.length > 0 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR(255)".to_string()
                }
            }
            ValueKind::Binary => "BYTE".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:informix-sqli://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_table_exists(&self, table: &str) -> String {
        format!("SELECT FIRST 1 * FROM {}", table)
    }

    fn sql_column_exists(&self, column: &str, table: &str) -> String {
        format!("SELECT FIRST 1 {} FROM {}", column, table)
    }
}
