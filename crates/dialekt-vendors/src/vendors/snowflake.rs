//! Snowflake.
//!
//! Cloud warehouse over 443; `AUTOINCREMENT` keys, wide VARCHAR, and no
//! usable current-value sequence read, so sequences stay unsupported.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Snowflake.
#[derive(Debug)]
pub struct Snowflake {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Snowflake {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 443,
                driver_class: "net.snowflake.client.jdbc.SnowflakeDriver",
                max_varchar_length: 16_777_216,
                supports_auto_increment: true,
                supports_boolean_type: true,
                supports_bitmap_index: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Snowflake {
    fn vendor_id(&self) -> &'static str {
        "snowflake"
    }

    fn vendor_name(&self) -> &'static str {
        "Snowflake"
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
                        "BIGINT AUTOINCREMENT NOT NULL PRIMARY KEY".to_string()
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
                    format!("NUMBER({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR".to_string()
                }
            }
            ValueKind::Binary => "BINARY".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:snowflake://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push_str("/?db=");
        url.push_str(database);
        Ok(url)
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}
