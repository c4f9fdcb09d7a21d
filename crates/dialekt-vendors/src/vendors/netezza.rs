//! IBM Netezza.
//!
//! Appliance warehouse: sequences in `_v_sequence`, no binary type at
//! all (the `" UNKNOWN"` marker surfaces that), byte-sized integers.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Netezza.
#[derive(Debug)]
pub struct Netezza {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Netezza {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 5480,
                driver_class: "org.netezza.Driver",
                max_varchar_length: 32768,
                supports_sequences: true,
                supports_boolean_type: true,
                supports_get_blob: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Netezza {
    fn vendor_id(&self) -> &'static str {
        "netezza"
    }

    fn vendor_name(&self) -> &'static str {
        "IBM Netezza"
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
                    } else if col.length > 4 {
                        "INTEGER".to_string()
                    } else if col.length > 2 {
                        "SMALLINT".to_string()
                    } else if col.length > 0 {
                        "BYTEINT".to_string()
                    } else {
                        "BIGINT".to_string()
                    }
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMERIC({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE PRECISION".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    "VARCHAR(32768)".to_string()
                }
            }
            // no BLOB/VARBINARY on the appliance
            ValueKind::Binary | ValueKind::Internet | ValueKind::Unsupported => {
                " UNKNOWN".to_string()
            }
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:netezza://{}", host);
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
            "SELECT SEQNAME FROM _V_SEQUENCE WHERE SEQNAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQNAME FROM _V_SEQUENCE".to_string())
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}
