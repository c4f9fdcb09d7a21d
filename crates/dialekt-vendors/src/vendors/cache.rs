//! InterSystems Caché.
//!
//! Namespace-addressed URL, conservative ANSI type surface.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// InterSystems Caché.
#[derive(Debug)]
pub struct Cache {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Cache {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 1972,
                driver_class: "com.intersys.jdbc.CacheDriver",
                ..Default::default()
            },
        }
    }
}

impl Dialect for Cache {
    fn vendor_id(&self) -> &'static str {
        "cache"
    }

    fn vendor_name(&self) -> &'static str {
        "InterSystems Cache"
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
                if col.length > 0 && col.length <= 32000 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "LONGVARCHAR".to_string()
                }
            }
            ValueKind::Binary => "LONGVARBINARY".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:Cache://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_url() {
        let d = Cache::new(AccessType::Native);
        assert_eq!(
            d.url("h", "1972", "SAMPLES").unwrap(),
            "jdbc:Cache://h:1972/SAMPLES"
        );
    }
}
