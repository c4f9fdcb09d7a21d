//! SQLite.
//!
//! File database: no port, no schemas, no TRUNCATE, affinity types, and
//! column changes only through table recreation, here rendered as the
//! shadow dance, the closest single-table protocol.

use crate::dialect::Dialect;
use dialekt_core::{AccessType, ColumnMeta, DatabaseCapabilities, Result, ValueKind};

/// SQLite file databases.
#[derive(Debug)]
pub struct Sqlite {
    access: AccessType,
    caps: DatabaseCapabilities,
}

impl Sqlite {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            caps: DatabaseCapabilities {
                default_port: -1,
                driver_class: "org.sqlite.JDBC",
                supports_auto_increment: true,
                supports_catalogs: false,
                supports_schemas: false,
                supports_get_blob: false,
                ..Default::default()
            },
        }
    }
}

impl Dialect for Sqlite {
    fn vendor_id(&self) -> &'static str {
        "sqlite"
    }

    fn vendor_name(&self) -> &'static str {
        "SQLite"
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
            ValueKind::Timestamp | ValueKind::Date => "DATETIME".to_string(),
            ValueKind::Boolean => "CHAR(1)".to_string(),
            ValueKind::Integer | ValueKind::Number | ValueKind::BigNumber => {
                if col.is_key_of(table_key, primary_key) {
                    if use_auto_increment {
                        "INTEGER PRIMARY KEY AUTOINCREMENT".to_string()
                    } else {
                        "INTEGER PRIMARY KEY".to_string()
                    }
                } else if col.precision == 0 {
                    "INTEGER".to_string()
                } else if col.length > 0 && col.precision > 0 {
                    format!("NUMERIC({}, {})", col.length, col.precision)
                } else {
                    "REAL".to_string()
                }
            }
            ValueKind::String => "TEXT".to_string(),
            ValueKind::Binary => "BLOB".to_string(),
            ValueKind::Internet | ValueKind::Unsupported => " UNKNOWN".to_string(),
        }
    }

    fn native_url(&self, _host: &str, _port: &str, database: &str) -> Result<String> {
        Ok(format!("jdbc:sqlite:{}", database))
    }

    fn truncate_table_statement(&self, table: &str) -> String {
        format!("DELETE FROM {}", table)
    }

    /// Recreation is the only honest column change; the shadow dance is
    /// the single-table subset of it.
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

    fn limit_clause(&self, rows: u64) -> String {
        format!(" LIMIT {}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite() -> Sqlite {
        Sqlite::new(AccessType::Native)
    }

    #[test]
    fn test_url_is_a_file_path() {
        assert_eq!(
            sqlite().url("ignored", "123", "/data/app.db").unwrap(),
            "jdbc:sqlite:/data/app.db"
        );
    }

    #[test]
    fn test_affinity_types() {
        let d = sqlite();
        let def = d.field_definition(&ColumnMeta::string("S", 4000), "", "", false, false, false);
        assert_eq!(def, "TEXT");
        let def = d.field_definition(&ColumnMeta::integer_sized("N", 3), "", "", false, false, false);
        assert_eq!(def, "INTEGER");
    }

    #[test]
    fn test_rowid_key() {
        let def =
            sqlite().field_definition(&ColumnMeta::integer("ID"), "ID", "", true, false, false);
        assert_eq!(def, "INTEGER PRIMARY KEY AUTOINCREMENT");
    }

    #[test]
    fn test_truncate_falls_back_to_delete() {
        assert_eq!(sqlite().truncate_table_statement("T"), "DELETE FROM T");
    }

    #[test]
    fn test_no_lock_statements() {
        assert!(sqlite().lock_tables(&["T"]).is_none());
        assert!(sqlite().unlock_tables(&["T"]).is_none());
    }
}
