//! Microsoft Access.
//!
//! ODBC-only, bracket quoting (`[schema].[table]`), `COUNTER` keys, no
//! TRUNCATE and no existence guard on DROP.

use crate::dialect::{Dialect, ODBC_BRIDGE_DRIVER};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Microsoft Access over the ODBC bridge.
#[derive(Debug)]
pub struct MsAccess {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MsAccess {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: -1,
                driver_class: ODBC_BRIDGE_DRIVER,
                max_varchar_length: 255,
                quote_start: "[",
                quote_end: "]",
                supports_auto_increment: true,
                supports_batch_updates: false,
                supports_schemas: false,
                supports_set_long: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for MsAccess {
    fn vendor_id(&self) -> &'static str {
        "msaccess"
    }

    fn vendor_name(&self) -> &'static str {
        "MS Access"
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
            ValueKind::Timestamp | ValueKind::Date => "DATETIME".to_string(),
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "COUNTER PRIMARY KEY".to_string()
                    } else {
                        "LONG PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "DOUBLE".to_string()
                    } else if col.length > 4 {
                        "LONG".to_string()
                    } else {
                        "INTEGER".to_string()
                    }
                } else {
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("TEXT({})", col.length)
                } else {
                    "MEMO".to_string()
                }
            }
            ValueKind::Binary => "LONGBINARY".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    /// Brackets on both sides, whatever the separator case.
    fn schema_table_combination(&self, schema: &str, table: &str) -> String {
        format!("[{}].[{}]", schema, table)
    }

    fn native_url(&self, _host: &str, _port: &str, database: &str) -> Result<String> {
        // there is no native route; everything rides the bridge
        Ok(format!("jdbc:odbc:{}", database))
    }

    fn truncate_table_statement(&self, table: &str) -> String {
        format!("DELETE FROM {}", table)
    }

    fn drop_table_if_exists_statement(&self, table: &str) -> String {
        // no guard grammar; callers swallow the missing-table error
        format!("DROP TABLE {}", table)
    }
}
