//! Firebird and InterBase.
//!
//! Generator-backed sequences (`GEN_ID` against `RDB$DATABASE`),
//! `BLOB SUB_TYPE TEXT` for long strings.

use crate::dialect::{Dialect, has_port, upper_literal};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

fn firebird_field_type(
    col: &ColumnMeta,
    table_key: &str,
    primary_key: &str,
    max_varchar: i32,
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
                } else if col.length > 4 {
                    "INTEGER".to_string()
                } else if col.length > 0 {
                    "SMALLINT".to_string()
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
            if col.length > 0 && col.length <= max_varchar {
                format!("VARCHAR({})", col.length)
            } else {
                "BLOB SUB_TYPE TEXT".to_string()
            }
        }
        ValueKind::Binary => "BLOB".to_string(),
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

fn gen_id_sql(sequence: &str, increment: u8) -> String {
    format!("SELECT GEN_ID({}, {}) FROM RDB$DATABASE", sequence, increment)
}

/// Firebird.
#[derive(Debug)]
pub struct Firebird {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Firebird {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 3050,
                driver_class: "org.firebirdsql.jdbc.FBDriver",
                max_varchar_length: 32765,
                supports_sequences: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Firebird {
    fn vendor_id(&self) -> &'static str {
        "firebird"
    }

    fn vendor_name(&self) -> &'static str {
        "Firebird"
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
        firebird_field_type(col, table_key, primary_key, self.caps.max_varchar_length)
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:firebirdsql://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(gen_id_sql(sequence, 1))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(gen_id_sql(sequence, 0))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT RDB$GENERATOR_NAME FROM RDB$GENERATORS WHERE RDB$GENERATOR_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT RDB$GENERATOR_NAME FROM RDB$GENERATORS".to_string())
    }
}

/// InterBase.
#[derive(Debug)]
pub struct Interbase {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Interbase {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 3050,
                driver_class: "interbase.interclient.Driver",
                max_varchar_length: 32765,
                supports_sequences: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Interbase {
    fn vendor_id(&self) -> &'static str {
        "interbase"
    }

    fn vendor_name(&self) -> &'static str {
        "InterBase"
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
        firebird_field_type(col, table_key, primary_key, self.caps.max_varchar_length)
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:interbase://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn sql_next_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(gen_id_sql(sequence, 1))
    }

    fn sql_current_sequence_value(&self, sequence: &str) -> Option<String> {
        Some(gen_id_sql(sequence, 0))
    }

    fn sql_sequence_exists(&self, sequence: &str) -> Option<String> {
        Some(format!(
            "SELECT RDB$GENERATOR_NAME FROM RDB$GENERATORS WHERE RDB$GENERATOR_NAME = {}",
            upper_literal(sequence)
        ))
    }

    fn sql_list_of_sequences(&self) -> Option<String> {
        Some("SELECT RDB$GENERATOR_NAME FROM RDB$GENERATORS".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_sql() {
        let d = Firebird::new(AccessType::Native);
        assert_eq!(
            d.sql_next_sequence_value("GEN_ID_SEQ").unwrap(),
            "SELECT GEN_ID(GEN_ID_SEQ, 1) FROM RDB$DATABASE"
        );
        assert_eq!(
            d.sql_current_sequence_value("GEN_ID_SEQ").unwrap(),
            "SELECT GEN_ID(GEN_ID_SEQ, 0) FROM RDB$DATABASE"
        );
    }

    #[test]
    fn test_long_string_is_text_blob() {
        let d = Interbase::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::string("S", 40_000), "", "", false, false, false);
        assert_eq!(def, "BLOB SUB_TYPE TEXT");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            Firebird::new(AccessType::Native).url("h", "3050", "/db/app.fdb").unwrap(),
            "jdbc:firebirdsql://h:3050//db/app.fdb"
        );
        assert_eq!(
            Interbase::new(AccessType::Native).url("h", "", "app.ib").unwrap(),
            "jdbc:interbase://h/app.ib"
        );
    }
}
