//! Ingres and Vectorwise.
//!
//! `iisequences` catalog, `NEXT VALUE FOR` grammar; Vectorwise rides the
//! same driver with the x100 engine flag in the URL.

use crate::dialect::{Dialect, has_port, lower_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

fn ingres_caps() -> DatabaseCapabilities {
    DatabaseCapabilities {
        default_port: 21071,
        driver_class: "com.ingres.jdbc.IngresDriver",
        supports_sequences: true,
        ..Default::default()
    }
}

fn ingres_field_type(col: &ColumnMeta, table_key: &str, primary_key: &str) -> String {
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
                } else if col.length > 4 {
                    "INTEGER".to_string()
                } else if col.length > 0 {
                    "SMALLINT".to_string()
                } else {
                    "BIGINT".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("DECIMAL({}, {})", col.length, col.precision)
            } else {
                "FLOAT".to_string()
            }
        }
        ValueKind::String => {
            if col.length > 0 && col.length <= 32000 {
                format!("VARCHAR({})", col.length)
            } else {
                "LONG VARCHAR".to_string()
            }
        }
        ValueKind::Binary => "LONG BYTE".to_string(),
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

macro_rules! ingres_family_dialect {
    ($ty:ident, $id:literal, $name:literal, $url_suffix:literal) => {
        impl Dialect for $ty {
            fn vendor_id(&self) -> &'static str {
                $id
            }

            fn vendor_name(&self) -> &'static str {
                $name
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
                ingres_field_type(col, table_key, primary_key)
            }

            fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
                let mut url = format!("jdbc:ingres://{}", host);
                if has_port(port) {
                    url.push(':');
                    url.push_str(port);
                }
                url.push('/');
                url.push_str(database);
                url.push_str($url_suffix);
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
                    "SELECT seq_name FROM iisequences WHERE seq_name = {}",
                    lower_literal(sequence)
                ))
            }

            fn sql_list_of_sequences(&self) -> Option<String> {
                Some("SELECT seq_name FROM iisequences".to_string())
            }
        }
    };
}

/// Ingres.
#[derive(Debug)]
pub struct Ingres {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Ingres {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: ingres_caps(),
        }
    }
}

ingres_family_dialect!(Ingres, "ingres", "Ingres", "");

/// Vectorwise (Ingres x100 engine).
#[derive(Debug)]
pub struct Vectorwise {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Vectorwise {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: ingres_caps(),
        }
    }
}

ingres_family_dialect!(Vectorwise, "vectorwise", "Vectorwise", ";auto=multi");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        assert_eq!(
            Ingres::new(AccessType::Native).url("h", "21071", "db").unwrap(),
            "jdbc:ingres://h:21071/db"
        );
        assert_eq!(
            Vectorwise::new(AccessType::Native).url("h", "", "db").unwrap(),
            "jdbc:ingres://h/db;auto=multi"
        );
    }

    #[test]
    fn test_sequences() {
        let d = Ingres::new(AccessType::Native);
        assert_eq!(
            d.sql_next_sequence_value("s").unwrap(),
            "SELECT NEXT VALUE FOR s"
        );
        assert_eq!(
            d.sql_sequence_exists("MY_SEQ").unwrap(),
            "SELECT seq_name FROM iisequences WHERE seq_name = 'my_seq'"
        );
    }
}
