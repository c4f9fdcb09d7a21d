//! SAP MaxDB (SAP DB).
//!
//! Oracle-flavored sequence grammar against `DUAL`, portless URL when
//! the instance resolves the port itself.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// SAP MaxDB.
#[derive(Debug)]
pub struct MaxDb {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl MaxDb {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 7210,
                driver_class: "com.sap.dbtech.jdbc.DriverSapDB",
                supports_sequences: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for MaxDb {
    fn vendor_id(&self) -> &'static str {
        "maxdb"
    }

    fn vendor_name(&self) -> &'static str {
        "SAP MaxDB"
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
                    "FIXED(19) NOT NULL PRIMARY KEY".to_string()
                } else if col.precision == 0 {
                    if col.length > 0 {
                        format!("FIXED({})", col.length)
                    } else {
                        "INTEGER".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("FIXED({}, {})", col.length, col.precision)
                } else {
                    "FLOAT".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= 8000 {
                    format!("VARCHAR({})", col.length)
                } else {
                    "LONG".to_string()
                }
            }
            ValueKind::Binary => "LONG BYTE".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:sapdb://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.NEXTVAL FROM DUAL", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.CURRVAL FROM DUAL", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT SEQUENCE_NAME FROM SEQUENCES WHERE SEQUENCE_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQUENCE_NAME FROM SEQUENCES".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_numbers() {
        let d = MaxDb::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::number("N", 10, 2), "", "", false, false, false);
        assert_eq!(def, "FIXED(10, 2)");
    }

    #[test]
    fn test_sequences_against_dual() {
        let d = MaxDb::new(AccessType::Native);
        assert_eq!(
            d.sql_next_sequence_value("S").unwrap(),
            "SELECT S.NEXTVAL FROM DUAL"
        );
    }
}
