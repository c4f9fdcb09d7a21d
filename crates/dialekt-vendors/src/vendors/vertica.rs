//! Vertica.
//!
//! Column store with real sequences, everything stringy capped at
//! VARCHAR(65000), no bitmap indexes.

use crate::dialect::{Dialect, has_port, lower_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Vertica.
#[derive(Debug)]
pub struct Vertica {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Vertica {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 5433,
                driver_class: "com.vertica.jdbc.Driver",
                max_varchar_length: 65000,
                supports_sequences: true,
                supports_boolean_type: true,
                supports_get_blob: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Vertica {
    fn vendor_id(&self) -> &'static str {
        "vertica"
    }

    fn vendor_name(&self) -> &'static str {
        "Vertica"
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
                    "INTEGER NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    "INTEGER".to_string()
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMERIC({}, {})", col.length, col.precision)
                } else {
                    "FLOAT".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    // no CLOB either; everything is bounded
                    "VARCHAR(65000)".to_string()
                }
            }
            ValueKind::Binary => "VARBINARY".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:vertica://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT NEXTVAL('{}')", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT CURRVAL('{}')", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT sequence_name FROM sequences WHERE sequence_name = {}",
            lower_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT sequence_name FROM sequences".to_string())
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertica() -> Vertica {
        Vertica::new(AccessType::Native)
    }

    #[test]
    fn test_everything_stringy_is_bounded() {
        let def =
            vertica().field_definition(&ColumnMeta::string("S", 100_000), "", "", false, false, false);
        assert_eq!(def, "VARCHAR(65000)");
        let def = vertica().field_definition(&ColumnMeta::string("S", -1), "", "", false, false, false);
        assert_eq!(def, "VARCHAR(65000)");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(
            vertica().sql_next_sequence_value("s1").unwrap(),
            "SELECT NEXTVAL('s1')"
        );
        assert_eq!(
            vertica().sql_sequence_exists("S1").unwrap(),
            "SELECT sequence_name FROM sequences WHERE sequence_name = 's1'"
        );
    }
}
