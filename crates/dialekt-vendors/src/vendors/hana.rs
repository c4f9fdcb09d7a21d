//! SAP HANA.
//!
//! Column-store by default (`CREATE COLUMN TABLE`), with `DUMMY`-based
//! sequences in a schema-scoped catalog.

use crate::dialect::{Dialect, has_port, split_schema_qualified, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// SAP HANA.
#[derive(Debug)]
pub struct Hana {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Hana {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 30015,
                driver_class: "com.sap.db.jdbc.Driver",
                max_varchar_length: 5000,
                supports_sequences: true,
                supports_auto_increment: true,
                supports_boolean_type: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Hana {
    fn vendor_id(&self) -> &'static str {
        "hana"
    }

    fn vendor_name(&self) -> &'static str {
        "SAP HANA"
    }

    fn access_type(&self) -> AccessType {
        self.access
    }

    fn caps(&self) -> &DatabaseCapabilities {
        &self.caps
    }

    fn create_table_statement(&self) -> &'static str {
        "CREATE COLUMN TABLE "
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
                        "BIGINT NOT NULL PRIMARY KEY GENERATED ALWAYS AS IDENTITY".to_string()
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
                    format!("DECIMAL({}, {})", col.length, col.precision)
                } else {
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length > self.caps.max_varchar_length {
                    "NCLOB".to_string()
                } else if col.length > 0 {
                    format!("NVARCHAR({})", col.length)
                } else {
                    "NVARCHAR(5000)".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, _database: &str) -> Result<String> {
        let mut url = format!("jdbc:sap://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.NEXTVAL FROM DUMMY", sequence))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(format!("SELECT {}.CURRVAL FROM DUMMY", sequence))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        let (schema, seq) = split_schema_qualified(sequence);
        Some(match schema {
            Some(schema) => format!(
                "SELECT SEQUENCE_NAME FROM SYS.SEQUENCES WHERE SEQUENCE_NAME = {} AND SCHEMA_NAME = {}",
                upper_literal(seq),
                upper_literal(schema)
            ),
            None => format!(
                "SELECT SEQUENCE_NAME FROM SYS.SEQUENCES WHERE SEQUENCE_NAME = {}",
                upper_literal(seq)
            ),
        })
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT SEQUENCE_NAME FROM SYS.SEQUENCES".to_string())
    }

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hana() -> Hana {
        Hana::new(AccessType::Native)
    }

    #[test]
    fn test_column_store_create_clause() {
        assert_eq!(hana().create_table_statement(), "CREATE COLUMN TABLE ");
    }

    #[test]
    fn test_url_has_no_database_segment() {
        assert_eq!(
            hana().url("hdb", "30015", "ignored").unwrap(),
            "jdbc:sap://hdb:30015"
        );
    }

    #[test]
    fn test_schema_scoped_sequence_catalog() {
        let sql = hana().sql_sequence_exists("analytics.doc_seq").unwrap();
        assert!(sql.contains("SEQUENCE_NAME = 'DOC_SEQ'"));
        assert!(sql.contains("SCHEMA_NAME = 'ANALYTICS'"));
    }

    #[test]
    fn test_nvarchar_nclob_boundary() {
        let def = hana().field_definition(&ColumnMeta::string("S", 5000), "", "", false, false, false);
        assert_eq!(def, "NVARCHAR(5000)");
        let def = hana().field_definition(&ColumnMeta::string("S", 5001), "", "", false, false, false);
        assert_eq!(def, "NCLOB");
    }
}
