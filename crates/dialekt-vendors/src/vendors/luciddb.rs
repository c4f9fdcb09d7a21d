//! LucidDB.
//!
//! Column-store warehouse reached over HTTP, append-oriented: no
//! transactions to speak of, bitmap indexes are the point.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// LucidDB.
#[derive(Debug)]
pub struct LucidDb {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl LucidDb {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 8034,
                driver_class: "org.luciddb.jdbc.LucidDbClientDriver",
                supports_transactions: false,
                supports_bitmap_index: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for LucidDb {
    fn vendor_id(&self) -> &'static str {
        "luciddb"
    }

    fn vendor_name(&self) -> &'static str {
        "LucidDB"
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
            ValueKind::Boolean => "BOOLEAN".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    "BIGINT NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    if col.length > 9 {
                        "BIGINT".to_string()
                    } else if col.length > 0 {
                        "INTEGER".to_string()
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
                if col.length > 0 && col.length <= 32767 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR(32767)".to_string()
                }
            }
            ValueKind::Binary => "VARBINARY(32767)".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, _database: &str) -> Result<String> {
        let mut url = format!("jdbc:luciddb:http://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url() {
        let d = LucidDb::new(AccessType::Native);
        assert_eq!(
            d.url("wh", "8034", "ignored").unwrap(),
            "jdbc:luciddb:http://wh:8034"
        );
    }

    #[test]
    fn test_no_transactions() {
        assert!(!LucidDb::new(AccessType::Native).caps().supports_transactions);
    }
}
