//! Exasol.
//!
//! In-memory analytics engine: the bare `jdbc:exa:` URL shape, wide
//! VARCHAR limit, no sequences.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Exasol.
#[derive(Debug)]
pub struct Exasol {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Exasol {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 8563,
                driver_class: "com.exasol.jdbc.EXADriver",
                max_varchar_length: 2_000_000,
                supports_boolean_type: true,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Exasol {
    fn vendor_id(&self) -> &'static str {
        "exasol"
    }

    fn vendor_name(&self) -> &'static str {
        "Exasol"
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
                        "BIGINT IDENTITY NOT NULL PRIMARY KEY".to_string()
                    } else {
                        "BIGINT NOT NULL PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    if col.length > 0 {
                        format!("DECIMAL({})", col.length)
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
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR(2000000)".to_string()
                }
            }
            ValueKind::Binary | ValueKind::Internet | ValueKind::Unsupported => {
                " UNKNOWN".to_string()
            }
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:exa:{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        if !database.is_empty() {
            url.push_str(";schema=");
            url.push_str(database);
        }
        Ok(url)
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        let d = Exasol::new(AccessType::Native);
        assert_eq!(
            d.url("exa1..exa4", "8563", "RETAIL").unwrap(),
            "jdbc:exa:exa1..exa4:8563;schema=RETAIL"
        );
        assert_eq!(d.url("exa1", "", "").unwrap(), "jdbc:exa:exa1");
    }

    #[test]
    fn test_identity_key() {
        let d = Exasol::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::integer("ID"), "ID", "", true, false, false);
        assert_eq!(def, "BIGINT IDENTITY NOT NULL PRIMARY KEY");
    }
}
