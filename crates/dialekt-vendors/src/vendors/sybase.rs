//! Sybase ASE and Sybase IQ.
//!
//! T-SQL lineage close to SQL Server, reached through jTDS (ASE) or the
//! native SybDriver (IQ).

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

fn sybase_field_type(
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
                    "NUMERIC(19) IDENTITY NOT NULL PRIMARY KEY".to_string()
                } else {
                    "NUMERIC(19) NOT NULL PRIMARY KEY".to_string()
                }
            } else if col.precision == 0 {
                if col.length > 9 {
                    "NUMERIC(19)".to_string()
                } else if col.length > 0 {
                    "INT".to_string()
                } else {
                    "NUMERIC(19)".to_string()
                }
            } else if col.length > 0 && col.precision > 0 {
                format!("NUMERIC({}, {})", col.length, col.precision)
            } else {
                "FLOAT".to_string()
            }
        }
        ValueKind::String => {
            if col.length > 2048 {
                "TEXT".to_string()
            } else if col.length > 0 {
                format!("VARCHAR({})", col.length)
            } else {
                "VARCHAR(100)".to_string()
            }
        }
        ValueKind::Binary => "IMAGE".to_string(),
        ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
    }
}

/// Sybase ASE through jTDS.
#[derive(Debug)]
pub struct Sybase {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Sybase {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 5001,
                driver_class: "net.sourceforge.jtds.jdbc.Driver",
                max_varchar_length: 2048,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Sybase {
    fn vendor_id(&self) -> &'static str {
        "sybase"
    }

    fn vendor_name(&self) -> &'static str {
        "Sybase ASE"
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
        sybase_field_type(col, table_key, primary_key, use_auto_increment)
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:jtds:sybase://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    fn modify_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> Vec<String> {
        vec![format!(
            "ALTER TABLE {} MODIFY {}",
            table,
            self.field_definition(col, table_key, primary_key, use_auto_increment, true, false)
        )]
    }
}

/// Sybase IQ.
#[derive(Debug)]
pub struct SybaseIq {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl SybaseIq {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 2638,
                driver_class: "com.sybase.jdbc3.jdbc.SybDriver",
                max_varchar_length: 2048,
                ..Default::default()
            },
        }
    }
}

impl Dialect for SybaseIq {
    fn vendor_id(&self) -> &'static str {
        "sybase-iq"
    }

    fn vendor_name(&self) -> &'static str {
        "Sybase IQ"
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
        sybase_field_type(col, table_key, primary_key, use_auto_increment)
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        let mut url = format!("jdbc:sybase:Tds:{}", host);
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
    fn test_urls() {
        assert_eq!(
            Sybase::new(AccessType::Native).url("h", "5001", "db").unwrap(),
            "jdbc:jtds:sybase://h:5001/db"
        );
        assert_eq!(
            SybaseIq::new(AccessType::Native).url("h", "2638", "db").unwrap(),
            "jdbc:sybase:Tds:h:2638/db"
        );
    }

    #[test]
    fn test_identity_key() {
        let d = Sybase::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::integer("ID"), "ID", "", true, false, false);
        assert_eq!(def, "NUMERIC(19) IDENTITY NOT NULL PRIMARY KEY");
    }

    #[test]
    fn test_long_strings_go_to_text() {
        let d = SybaseIq::new(AccessType::Native);
        let def = d.field_definition(&ColumnMeta::string("S", 2049), "", "", false, false, false);
        assert_eq!(def, "TEXT");
    }
}
