//! Apache Derby.
//!
//! Embedded vs client/server branches on the host, identity keys start
//! at 1, and MODIFY goes through the shadow dance.

use crate::dialect::{Dialect, has_port};
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// Derby, embedded or network server.
#[derive(Debug)]
pub struct Derby {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Derby {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: 1527,
                driver_class: "org.apache.derby.jdbc.ClientDriver",
                max_varchar_length: 32672,
                supports_auto_increment: true,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Derby {
    fn vendor_id(&self) -> &'static str {
        "derby"
    }

    fn vendor_name(&self) -> &'static str {
        "Apache Derby"
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
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "BIGINT NOT NULL PRIMARY KEY GENERATED ALWAYS AS IDENTITY (START WITH 1, INCREMENT BY 1)"
                            .to_string()
                    } else {
                        "BIGINT NOT NULL PRIMARY KEY".to_string()
                    }
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
                    "DOUBLE".to_string()
                }
            }
            ValueKind::String => {
                if col.length > 0 && col.length <= self.caps.max_varchar_length {
                    format!("VARCHAR({})", col.length)
                } else {
                    "CLOB".to_string()
                }
            }
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, host: &str, port: &str, database: &str) -> Result<String> {
        if host.is_empty() {
            // embedded engine, database is a directory path
            return Ok(format!("jdbc:derby:{}", database));
        }
        let mut url = format!("jdbc:derby://{}", host);
        if has_port(port) {
            url.push(':');
            url.push_str(port);
        }
        url.push('/');
        url.push_str(database);
        Ok(url)
    }

    /// No in-place type change: shadow dance.
    fn modify_column_statement(
        &self,
        table: &str,
        col: &ColumnMeta,
        table_key: &str,
        use_auto_increment: bool,
        primary_key: &str,
    ) -> Vec<String> {
        self.rename_dance(table, col, table_key, use_auto_increment, primary_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derby() -> Derby {
        Derby::new(AccessType::Native)
    }

    #[test]
    fn test_embedded_vs_network_url() {
        assert_eq!(derby().url("", "", "/tmp/db").unwrap(), "jdbc:derby:/tmp/db");
        assert_eq!(
            derby().url("srv", "1527", "db").unwrap(),
            "jdbc:derby://srv:1527/db"
        );
    }

    #[test]
    fn test_identity_key() {
        let def = derby().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, false, false);
        assert!(def.contains("GENERATED ALWAYS AS IDENTITY"));
        assert!(def.contains("START WITH 1"));
    }

    #[test]
    fn test_modify_is_a_dance() {
        let stmts = derby().modify_column_statement("T", &ColumnMeta::string("C", 9), "", false, "");
        assert_eq!(stmts.len(), 4);
        assert!(stmts[0].contains("C_DLK VARCHAR(9)"));
    }
}
